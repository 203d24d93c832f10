//! Command to show the kubeconfig merge target.

use crate::error::CliError;
use crate::utils::{kubeconfig_resolver, GlobalOptions};
use clap::Args;

/// Show the kubeconfig file that new entries are written to.
#[derive(Args)]
pub struct MergeTargetCommand {}

impl MergeTargetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let target = kubeconfig_resolver().merge_target(global.explicit_kubeconfig());
        println!("{}", target.display());
        Ok(())
    }
}
