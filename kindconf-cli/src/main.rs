//! Main entry point for the kindconf CLI.
//!
//! Commands:
//! - `paths`: List kubeconfig files in precedence order
//! - `merge-target`: Show the kubeconfig file new entries are written to
//! - `validate`: Validate a node config fragment
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        kubeconfig: cli.kubeconfig,
    };

    if let Err(e) = global.logger().install() {
        eprintln!("Warning: {e}");
    }

    let result = match cli.command {
        cli::Command::Paths(cmd) => cmd.execute(&global),
        cli::Command::MergeTarget(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
