//! Library exports for kindconf-cli.
//!
//! This module exports the CLI structure so integration tests and the
//! completions command can build the clap command tree.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
