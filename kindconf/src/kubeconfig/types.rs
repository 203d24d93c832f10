//! Types describing a resolved set of kubeconfig candidates.

use std::fmt;
use std::path::PathBuf;

/// Where a candidate list came from.
///
/// # Examples
///
/// ```
/// use kindconf::kubeconfig::CandidateSource;
///
/// assert_eq!(CandidateSource::Environment.to_string(), "environment");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// The explicit override (the `--kubeconfig` flag). No merging applies.
    Explicit,
    /// The `KUBECONFIG` environment variable. Files in the chain are merged.
    Environment,
    /// `$HOME/.kube/config`. No merging applies.
    Default,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit"),
            Self::Environment => write!(f, "environment"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// An ordered, deduplicated, never-empty list of kubeconfig paths.
///
/// Built only by [`KubeconfigResolver`](super::KubeconfigResolver), which
/// upholds the invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    paths: Vec<PathBuf>,
    source: CandidateSource,
}

impl Candidates {
    pub(crate) fn new(paths: Vec<PathBuf>, source: CandidateSource) -> Self {
        debug_assert!(!paths.is_empty());
        Self { paths, source }
    }

    /// Returns the candidate paths in precedence order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Returns where the candidates came from.
    #[must_use]
    pub const fn source(&self) -> CandidateSource {
        self.source
    }

    /// Consumes the list and returns the underlying paths.
    #[must_use]
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl IntoIterator for Candidates {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
