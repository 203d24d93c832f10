//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "kindconf";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Where to put the generated script for shells we have advice for.
fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("kindconf completions bash > ~/.local/share/bash-completion/completions/kindconf"),
        Shell::Zsh => Some("kindconf completions zsh > ~/.zsh/completions/_kindconf"),
        Shell::Fish => Some("kindconf completions fish > ~/.config/fish/completions/kindconf.fish"),
        Shell::PowerShell => Some("kindconf completions powershell | Out-String | Invoke-Expression"),
        _ => None,
    }
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# To enable {} completions, run:", self.shell);
                eprintln!("#   {hint}");
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
