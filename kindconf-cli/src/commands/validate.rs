//! Command to validate a node config fragment.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use kindconf::{DocumentFormat, Node};
use std::path::PathBuf;

/// Validate a node config fragment (`extraMounts`, `extraPortMappings`).
#[derive(Args)]
pub struct ValidateCommand {
    /// Config file to validate (`.json` is read as JSON, anything else as YAML)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Print the document re-encoded with canonical names
    #[arg(long)]
    pub normalize: bool,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let contents = std::fs::read_to_string(&self.config_path)?;
        let format = DocumentFormat::from_path(&self.config_path);

        let node = match Node::parse(&contents, format) {
            Ok(node) => node,
            Err(e) => {
                eprintln!("Validation error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        if self.normalize {
            let rendered = node.render(format)?;
            if rendered.ends_with('\n') {
                print!("{rendered}");
            } else {
                println!("{rendered}");
            }
        } else {
            println!("Configuration is valid");
        }
        Ok(())
    }
}
