//! Build script for kindconf-cli.
//!
//! Renders the `kindconf.1` man page into OUT_DIR with clap_mangen.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("kindconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve kubeconfig paths and check node config")
        .long_about(
            "Shows which kubeconfig files kubectl-compatible tooling reads and writes, \
             and validates node config fragments with named mount propagation and \
             port protocol values",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("kubeconfig")
                .long("kubeconfig")
                .help("Use only this kubeconfig file (overrides KUBECONFIG)")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("paths")
                .about("List kubeconfig files in precedence order")
                .long_about(
                    "List the --kubeconfig file, the KUBECONFIG entries, or $HOME/.kube/config",
                ),
            Command::new("merge-target")
                .about("Show the kubeconfig file new entries are written to")
                .long_about(
                    "Show the first existing file in the chain, or the last one if none exist",
                ),
            Command::new("validate")
                .about("Validate a node config fragment")
                .long_about("Check extraMounts and extraPortMappings in a YAML or JSON file"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("kindconf.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
