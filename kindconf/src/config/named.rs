//! Named-enum codec.
//!
//! Small integer enums are written to config documents as their canonical
//! names. Each enum carries one static table that serves both directions.
//!
//! The serde helpers in this module are meant for field-level use, so only
//! the enum field goes through the codec and its siblings keep their derived
//! behavior:
//!
//! ```
//! use kindconf::config::{named, MountPropagation};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Volume {
//!     name: String,
//!     #[serde(default, with = "named")]
//!     propagation: MountPropagation,
//! }
//!
//! let volume: Volume = serde_json::from_str(r#"{"name":"data","propagation":"Bidirectional"}"#).unwrap();
//! assert_eq!(volume.propagation, MountPropagation::Bidirectional);
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{Error, Result};

/// An integer enum with a canonical name for every member.
pub trait NamedEnum: Copy + Eq + Default + 'static {
    /// Label used in error messages, e.g. `propagation`.
    const KIND: &'static str;

    /// Value to canonical name table.
    const NAMES: &'static [(Self, &'static str)];

    /// The integer value of this member.
    fn value(self) -> i32;

    /// Maps user input onto the spelling used in [`NamedEnum::NAMES`].
    ///
    /// The default is an exact match.
    fn normalize(name: &str) -> Cow<'_, str> {
        Cow::Borrowed(name)
    }

    /// Encodes this member as its canonical name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownValue`] if the member has no table entry.
    fn name(self) -> Result<&'static str> {
        Self::NAMES
            .iter()
            .find(|(member, _)| *member == self)
            .map(|(_, name)| *name)
            .ok_or(Error::UnknownValue {
                kind: Self::KIND,
                value: self.value(),
            })
    }

    /// Decodes a name, after [`NamedEnum::normalize`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] carrying the original input if no
    /// member matches.
    fn from_name(name: &str) -> Result<Self> {
        let wanted = Self::normalize(name);
        Self::NAMES
            .iter()
            .find(|(_, canonical)| *canonical == wanted.as_ref())
            .map(|(member, _)| *member)
            .ok_or_else(|| Error::UnknownName {
                kind: Self::KIND,
                name: name.to_string(),
            })
    }

    /// Converts a raw integer into a member.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownValue`] for integers outside the member set.
    fn from_value(value: i32) -> Result<Self> {
        Self::NAMES
            .iter()
            .map(|(member, _)| *member)
            .find(|member| member.value() == value)
            .ok_or(Error::UnknownValue {
                kind: Self::KIND,
                value,
            })
    }
}

/// Serializes a [`NamedEnum`] field as its canonical name.
///
/// # Errors
///
/// Fails if the member has no name, which means the enum's table is
/// incomplete.
pub fn serialize<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: NamedEnum,
    S: Serializer,
{
    let name = value.name().map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(name)
}

/// Deserializes a [`NamedEnum`] field from its name.
///
/// `null` and the empty string leave the default member. Pair with
/// `#[serde(default)]` so a missing field does the same.
///
/// # Errors
///
/// Fails for names that match no member.
pub fn deserialize<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
where
    T: NamedEnum,
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(T::default()),
        Some(name) => T::from_name(name).map_err(serde::de::Error::custom),
    }
}
