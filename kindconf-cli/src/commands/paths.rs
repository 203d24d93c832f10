//! Command to list kubeconfig candidates.

use crate::error::CliError;
use crate::utils::{kubeconfig_resolver, GlobalOptions};
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Output format for the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathsFormat {
    /// One path per line.
    Text,
    /// A JSON object with the source and the paths.
    Json,
}

#[derive(Serialize)]
struct PathsReport {
    source: String,
    paths: Vec<String>,
}

/// List kubeconfig files in precedence order.
#[derive(Args)]
pub struct PathsCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = PathsFormat::Text)]
    pub format: PathsFormat,
}

impl PathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let candidates = kubeconfig_resolver().resolve(global.explicit_kubeconfig());

        match self.format {
            PathsFormat::Text => {
                for path in candidates.paths() {
                    println!("{}", path.display());
                }
            }
            PathsFormat::Json => {
                let report = PathsReport {
                    source: candidates.source().to_string(),
                    paths: candidates
                        .paths()
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Ok(())
    }
}
