//! Cluster config value types with named-enum encoding.
//!
//! `MountPropagation` and `PortMappingProtocol` are integer enums in memory
//! but appear in config documents under their canonical names. The mapping
//! is applied only to the `propagation` and `protocol` fields; the other
//! fields of [`Mount`] and [`PortMapping`] are (de)serialized as usual.
//!
//! | Enum | Names | Input matching |
//! |------|-------|----------------|
//! | [`MountPropagation`] | `None`, `HostToContainer`, `Bidirectional` | exact |
//! | [`PortMappingProtocol`] | `TCP`, `UDP`, `SCTP` | case-insensitive |
//!
//! An empty or missing name decodes to the zero value. An unknown name is an
//! error.
//!
//! # Examples
//!
//! ```
//! use kindconf::config::{Mount, MountPropagation};
//!
//! let mount: Mount = serde_json::from_str(r#"{"hostPath":"/srv","propagation":"Bidirectional"}"#).unwrap();
//! assert_eq!(mount.propagation, MountPropagation::Bidirectional);
//!
//! let err = serde_json::from_str::<Mount>(r#"{"propagation":"bogus"}"#).unwrap_err();
//! assert!(err.to_string().contains("unknown propagation value: bogus"));
//! ```

pub mod document;
pub mod named;
pub mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use document::{DocumentFormat, Node};
pub use named::NamedEnum;
pub use types::{Mount, MountPropagation, PortMapping, PortMappingProtocol};
