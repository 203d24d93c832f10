//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, MergeTargetCommand, PathsCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect kubeconfig resolution and validate node config fragments.
#[derive(Parser)]
#[command(name = "kindconf")]
#[command(version, about = "Resolve kubeconfig paths and check node config", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use only this kubeconfig file (overrides KUBECONFIG)
    #[arg(long, value_name = "PATH", global = true)]
    pub kubeconfig: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List kubeconfig files in precedence order
    Paths(PathsCommand),

    /// Show the kubeconfig file new entries are written to
    MergeTarget(MergeTargetCommand),

    /// Validate a node config fragment
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
