#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # kindconf
//!
//! Config plumbing for cluster tooling.
//!
//! This library decides which kubeconfig files a command should use, with
//! the same precedence as `kubectl`, and encodes the small integer enums of
//! node config documents as readable names.
//!
//! ## Core Types
//!
//! - [`KubeconfigResolver`]: kubeconfig candidates and merge target
//! - [`Mount`] and [`PortMapping`]: config values with named enum fields
//! - [`MountPropagation`] and [`PortMappingProtocol`]: the named enums
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use kindconf::{KubeconfigResolver, PortMapping, PortMappingProtocol};
//! use std::path::{Path, PathBuf};
//!
//! let resolver = KubeconfigResolver::new().with_env_lookup(|_| None);
//! let target = resolver.merge_target(Some(Path::new("/tmp/kind-config")));
//! assert_eq!(target, PathBuf::from("/tmp/kind-config"));
//!
//! let mapping: PortMapping = serde_yaml::from_str("containerPort: 53\nprotocol: udp\n").unwrap();
//! assert_eq!(mapping.protocol, PortMappingProtocol::Udp);
//! ```

pub mod config;
pub mod error;
pub mod kubeconfig;
pub mod logging;

// Re-export key types at crate root for convenience
pub use config::{
    DocumentFormat, Mount, MountPropagation, NamedEnum, Node, PortMapping, PortMappingProtocol,
};
pub use error::{Error, Result};
pub use kubeconfig::{candidate_paths, merge_target, CandidateSource, KubeconfigResolver};
pub use logging::{init_logger, LogLevel, Logger};
