//! Utility functions for CLI operations.

use kindconf::{init_logger, KubeconfigResolver, Logger};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit kubeconfig override (`--kubeconfig`).
    pub kubeconfig: Option<PathBuf>,
}

impl GlobalOptions {
    /// The explicit kubeconfig path, if one was given.
    pub fn explicit_kubeconfig(&self) -> Option<&Path> {
        self.kubeconfig.as_deref()
    }

    /// The logger matching `--verbose`/`--quiet` and `KINDCONF_LOG_MODE`.
    pub fn logger(&self) -> Logger {
        init_logger(self.verbose, self.quiet)
    }
}

/// Build the resolver used by every command.
///
/// Reads `KUBECONFIG` and the home directory from the real environment.
pub fn kubeconfig_resolver() -> KubeconfigResolver {
    KubeconfigResolver::new()
}
