//! Mount and port-mapping config types.
//!
//! Field names follow the kind `v1alpha3` cluster config API. The
//! `propagation` and `protocol` fields travel as names (`"Bidirectional"`,
//! `"TCP"`) rather than integers; every other field uses plain serde.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::named::{self, NamedEnum};
use crate::error::Error;

/// How a mount is shared between a container and its host.
///
/// # Examples
///
/// ```
/// use kindconf::config::{MountPropagation, NamedEnum};
///
/// assert_eq!(MountPropagation::Bidirectional.name().unwrap(), "Bidirectional");
/// assert_eq!(i32::from(MountPropagation::Bidirectional), 2);
/// assert!("bidirectional".parse::<MountPropagation>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum MountPropagation {
    /// No propagation (`rprivate`).
    #[default]
    None = 0,
    /// Host mounts propagate into the container (`rslave`).
    HostToContainer = 1,
    /// Mounts propagate both ways (`rshared`).
    Bidirectional = 2,
}

impl NamedEnum for MountPropagation {
    const KIND: &'static str = "propagation";
    const NAMES: &'static [(Self, &'static str)] = &[
        (Self::None, "None"),
        (Self::HostToContainer, "HostToContainer"),
        (Self::Bidirectional, "Bidirectional"),
    ];

    fn value(self) -> i32 {
        self as i32
    }
}

/// Transport protocol of a port mapping.
///
/// Names are accepted in any case and always written upper-case.
///
/// # Examples
///
/// ```
/// use kindconf::config::{NamedEnum, PortMappingProtocol};
///
/// assert_eq!(PortMappingProtocol::from_name("udp").unwrap(), PortMappingProtocol::Udp);
/// assert_eq!(PortMappingProtocol::Udp.to_string(), "UDP");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum PortMappingProtocol {
    /// TCP.
    #[default]
    Tcp = 0,
    /// UDP.
    Udp = 1,
    /// SCTP.
    Sctp = 2,
}

impl NamedEnum for PortMappingProtocol {
    const KIND: &'static str = "protocol";
    const NAMES: &'static [(Self, &'static str)] = &[
        (Self::Tcp, "TCP"),
        (Self::Udp, "UDP"),
        (Self::Sctp, "SCTP"),
    ];

    fn value(self) -> i32 {
        self as i32
    }

    fn normalize(name: &str) -> Cow<'_, str> {
        Cow::Owned(name.to_uppercase())
    }
}

macro_rules! named_enum_conversions {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Ok(name) => f.write_str(name),
                    Err(_) => write!(f, "{}", self.value()),
                }
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s)
            }
        }

        impl TryFrom<i32> for $ty {
            type Error = Error;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::from_value(value)
            }
        }

        impl From<$ty> for i32 {
            fn from(member: $ty) -> Self {
                member.value()
            }
        }
    };
}

named_enum_conversions!(MountPropagation);
named_enum_conversions!(PortMappingProtocol);

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &i32) -> bool {
    *n == 0
}

/// An extra host directory mounted into a node container.
///
/// # Examples
///
/// ```
/// use kindconf::config::{Mount, MountPropagation};
///
/// let mount: Mount = serde_yaml::from_str(
///     "containerPath: /data\nhostPath: /srv/data\npropagation: HostToContainer\n",
/// ).unwrap();
/// assert_eq!(mount.host_path, "/srv/data");
/// assert_eq!(mount.propagation, MountPropagation::HostToContainer);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mount {
    /// Path inside the container.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub container_path: String,

    /// Path on the host.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host_path: String,

    /// Mount read-only.
    #[serde(default, skip_serializing_if = "is_false")]
    pub read_only: bool,

    /// Relabel the mount for SELinux.
    #[serde(default, skip_serializing_if = "is_false")]
    pub selinux_relabel: bool,

    /// Mount propagation mode, written by name.
    #[serde(default, with = "named")]
    pub propagation: MountPropagation,
}

/// A host port forwarded to a node container.
///
/// # Examples
///
/// ```
/// use kindconf::config::{PortMapping, PortMappingProtocol};
///
/// let mapping: PortMapping =
///     serde_json::from_str(r#"{"containerPort":80,"hostPort":8080,"protocol":"tcp"}"#).unwrap();
/// assert_eq!(mapping.protocol, PortMappingProtocol::Tcp);
/// assert_eq!(
///     serde_json::to_string(&mapping).unwrap(),
///     r#"{"containerPort":80,"hostPort":8080,"protocol":"TCP"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortMapping {
    /// Port inside the container.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub container_port: i32,

    /// Port on the host. Zero lets the runtime pick one.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub host_port: i32,

    /// Host address to bind.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub listen_address: String,

    /// Transport protocol, written by name.
    #[serde(default, with = "named")]
    pub protocol: PortMappingProtocol,
}
