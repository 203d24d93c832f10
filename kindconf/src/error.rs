//! Error types for the kindconf library.
//!
//! Path resolution never fails, so almost everything here comes from the
//! named-enum codec or from reading and writing config documents.

use thiserror::Error;

/// Result type alias for operations that may fail with a kindconf error.
///
/// # Examples
///
/// ```
/// use kindconf::{Error, Result};
///
/// fn example_operation() -> Result<i32> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the kindconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// An integer has no entry in the name table of its enum.
    ///
    /// Seeing this while encoding means the table and the enum definition
    /// have drifted apart.
    #[error("unknown {kind} value: {value}")]
    UnknownValue {
        /// Which enum was being encoded (`propagation`, `protocol`).
        kind: &'static str,
        /// The offending numeric value.
        value: i32,
    },

    /// A name in a document does not match any member of its enum.
    #[error("unknown {kind} value: {name}")]
    UnknownName {
        /// Which enum was being decoded (`propagation`, `protocol`).
        kind: &'static str,
        /// The name as it appeared in the input.
        name: String,
    },

    /// A YAML document could not be parsed or produced.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON document could not be parsed or produced.
    #[error("configuration error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error was raised by the named-enum codec.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindconf::Error;
    ///
    /// let err = Error::UnknownName { kind: "protocol", name: "xyz".into() };
    /// assert!(err.is_codec_error());
    /// ```
    #[must_use]
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Self::UnknownValue { .. } | Self::UnknownName { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_value_error() {
        let err = Error::UnknownValue {
            kind: "propagation",
            value: 7,
        };
        assert_eq!(err.to_string(), "unknown propagation value: 7");
        assert!(err.is_codec_error());
    }

    #[test]
    fn test_unknown_name_error() {
        let err = Error::UnknownName {
            kind: "protocol",
            name: "xyz".to_string(),
        };
        assert_eq!(err.to_string(), "unknown protocol value: xyz");
        assert!(err.is_codec_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(!err.is_codec_error());
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<u16>>("{ not: a list }").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(err.to_string().starts_with("configuration error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Err(Error::UnknownValue {
                kind: "propagation",
                value: -1,
            })
        }

        assert!(returns_result().is_err());
    }
}
