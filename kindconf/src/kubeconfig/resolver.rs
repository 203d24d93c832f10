//! Kubeconfig candidate resolution and merge-target selection.
//!
//! The rules follow `kubectl`:
//!
//! - If `--kubeconfig` is set, only that file is used and no merging takes place.
//! - If `$KUBECONFIG` is set, it is a list of paths that are merged. A
//!   modified value lands in the file defining its stanza, a new value in the
//!   first file that exists, and if no file in the chain exists, the last
//!   file is created.
//! - Otherwise `$HOME/.kube/config` is used and no merging takes place.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::kubeconfig::paths::{
    default_kubeconfig_path, discard_empty_and_duplicates, file_exists, split_path_list,
    KUBECONFIG_ENV,
};
use crate::kubeconfig::types::{CandidateSource, Candidates};

type EnvLookup = Box<dyn Fn(&str) -> Option<OsString> + Send + Sync>;

/// Resolves kubeconfig candidates and merge targets.
///
/// The environment lookup and home directory can be replaced for testing;
/// by default they read the real process environment.
///
/// # Examples
///
/// ```
/// use kindconf::kubeconfig::KubeconfigResolver;
/// use std::path::{Path, PathBuf};
///
/// let resolver = KubeconfigResolver::new()
///     .with_env_lookup(|_| None)
///     .with_home_dir("/home/someone");
///
/// let candidates = resolver.candidate_paths(None);
/// assert_eq!(candidates, vec![PathBuf::from("/home/someone/.kube/config")]);
///
/// let explicit = resolver.candidate_paths(Some(Path::new("/tmp/kind.yaml")));
/// assert_eq!(explicit, vec![PathBuf::from("/tmp/kind.yaml")]);
/// ```
pub struct KubeconfigResolver {
    env_lookup: EnvLookup,
    home_dir: Option<PathBuf>,
}

impl Default for KubeconfigResolver {
    fn default() -> Self {
        Self {
            env_lookup: Box::new(|name| env::var_os(name)),
            home_dir: None,
        }
    }
}

impl fmt::Debug for KubeconfigResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubeconfigResolver")
            .field("home_dir", &self.home_dir)
            .finish_non_exhaustive()
    }
}

impl KubeconfigResolver {
    /// Create a resolver backed by the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the environment lookup.
    ///
    /// The function receives a variable name and returns its value, or
    /// `None` when unset.
    #[must_use]
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString> + Send + Sync + 'static,
    {
        self.env_lookup = Box::new(lookup);
        self
    }

    /// Pin the home directory instead of asking the operating system.
    #[must_use]
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    /// The fallback path, `<home>/.kube/config`.
    #[must_use]
    pub fn default_path(&self) -> PathBuf {
        let home = self.home_dir.clone().or_else(home::home_dir);
        default_kubeconfig_path(home.as_deref())
    }

    /// Resolve candidates along with where they came from.
    ///
    /// An empty `explicit` path is treated the same as `None`.
    #[must_use]
    pub fn resolve(&self, explicit: Option<&Path>) -> Candidates {
        if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            log::debug!("using explicit kubeconfig {}", path.display());
            return Candidates::new(vec![path.to_path_buf()], CandidateSource::Explicit);
        }

        let from_env = (self.env_lookup)(KUBECONFIG_ENV)
            .map(|value| discard_empty_and_duplicates(split_path_list(&value)))
            .unwrap_or_default();
        if !from_env.is_empty() {
            log::debug!(
                "using {} kubeconfig path(s) from {KUBECONFIG_ENV}",
                from_env.len()
            );
            return Candidates::new(from_env, CandidateSource::Environment);
        }

        let fallback = self.default_path();
        log::debug!(
            "{KUBECONFIG_ENV} is empty, using default kubeconfig {}",
            fallback.display()
        );
        Candidates::new(vec![fallback], CandidateSource::Default)
    }

    /// Ordered candidate paths. Never empty.
    #[must_use]
    pub fn candidate_paths(&self, explicit: Option<&Path>) -> Vec<PathBuf> {
        self.resolve(explicit).into_paths()
    }

    /// The single file that new or modified entries are written to.
    ///
    /// Never fails: unreadable paths count as absent and the last candidate
    /// is the final fallback.
    #[must_use]
    pub fn merge_target(&self, explicit: Option<&Path>) -> PathBuf {
        select_merge_target(self.resolve(explicit))
    }
}

fn select_merge_target(candidates: Candidates) -> PathBuf {
    let mut paths = candidates.into_paths();
    if paths.len() == 1 {
        return paths.swap_remove(0);
    }

    if let Some(index) = paths.iter().position(|p| file_exists(p)) {
        log::debug!("merge target {} exists", paths[index].display());
        return paths.swap_remove(index);
    }

    // none exist, so the last file in the chain gets created
    let last = paths.pop().unwrap_or_default();
    log::debug!("no kubeconfig in the chain exists, targeting {}", last.display());
    last
}

/// Candidate kubeconfig paths for an explicit override and an env lookup.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use kindconf::kubeconfig::candidate_paths;
/// use std::ffi::OsString;
/// use std::path::PathBuf;
///
/// let paths = candidate_paths(None, |_| Some(OsString::from("a::a:b")));
/// assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
/// # }
/// ```
pub fn candidate_paths<F>(explicit: Option<&Path>, get_env: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<OsString> + Send + Sync + 'static,
{
    KubeconfigResolver::new()
        .with_env_lookup(get_env)
        .candidate_paths(explicit)
}

/// The file `kubectl` would merge into, using the process environment.
#[must_use]
pub fn merge_target(explicit: Option<&Path>) -> PathBuf {
    KubeconfigResolver::new().merge_target(explicit)
}

/// Like [`merge_target`] with an injected environment lookup.
pub fn merge_target_with<F>(explicit: Option<&Path>, get_env: F) -> PathBuf
where
    F: Fn(&str) -> Option<OsString> + Send + Sync + 'static,
{
    KubeconfigResolver::new()
        .with_env_lookup(get_env)
        .merge_target(explicit)
}
