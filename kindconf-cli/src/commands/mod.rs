//! CLI command implementations.
//!
//! - `paths`: List kubeconfig files in precedence order
//! - `merge_target`: Show the kubeconfig file new entries are written to
//! - `validate`: Validate a node config fragment
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod merge_target;
pub mod paths;
pub mod validate;

pub use completions::CompletionsCommand;
pub use merge_target::MergeTargetCommand;
pub use paths::{PathsCommand, PathsFormat};
pub use validate::ValidateCommand;
