//! Kubeconfig path resolution.
//!
//! Decides which kubeconfig file(s) a command should read and which single
//! file it should write to, with the same precedence `kubectl` uses. Nothing
//! here reads or parses kubeconfig contents.
//!
//! # Precedence
//!
//! 1. An explicit path (`--kubeconfig`) is used alone.
//! 2. Otherwise the `KUBECONFIG` path list, with empty and repeated entries
//!    removed.
//! 3. Otherwise `$HOME/.kube/config`.
//!
//! # Merge target
//!
//! With a single candidate the merge target is that candidate. With several,
//! it is the first one that exists as a file, or the last one when none do.
//! Resolution never fails.
//!
//! # Examples
//!
//! ```
//! use kindconf::kubeconfig::{CandidateSource, KubeconfigResolver};
//! use std::path::PathBuf;
//!
//! let resolver = KubeconfigResolver::new()
//!     .with_env_lookup(|_| None)
//!     .with_home_dir("/home/someone");
//!
//! let candidates = resolver.resolve(None);
//! assert_eq!(candidates.source(), CandidateSource::Default);
//! assert_eq!(
//!     resolver.merge_target(None),
//!     PathBuf::from("/home/someone/.kube/config")
//! );
//! ```

pub mod paths;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use paths::{
    default_kubeconfig_path, discard_empty_and_duplicates, file_exists, split_path_list,
    KUBECONFIG_ENV,
};
pub use resolver::{candidate_paths, merge_target, merge_target_with, KubeconfigResolver};
pub use types::{CandidateSource, Candidates};
