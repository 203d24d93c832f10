//! Node config fragments as whole documents.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::types::{Mount, PortMapping};
use crate::error::Result;

/// Text format of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// YAML (also accepts JSON, which is a subset).
    #[default]
    Yaml,
    /// JSON.
    Json,
}

impl DocumentFormat {
    /// Picks JSON for a `.json` extension and YAML for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindconf::config::DocumentFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(DocumentFormat::from_path(Path::new("node.JSON")), DocumentFormat::Json);
    /// assert_eq!(DocumentFormat::from_path(Path::new("kind.yaml")), DocumentFormat::Yaml);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// The mount and port-mapping part of a node definition.
///
/// Other node fields are ignored when reading.
///
/// # Examples
///
/// ```
/// use kindconf::config::{Node, PortMappingProtocol};
///
/// let node = Node::from_yaml_str(
///     "role: control-plane\nextraPortMappings:\n- containerPort: 80\n  hostPort: 80\n  protocol: udp\n",
/// ).unwrap();
/// assert_eq!(node.extra_port_mappings[0].protocol, PortMappingProtocol::Udp);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Extra host directories mounted into the node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_mounts: Vec<Mount>,

    /// Extra host ports forwarded to the node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_port_mappings: Vec<PortMapping>,
}

impl Node {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed YAML or unknown enum names.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or unknown enum names.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a document in the given format.
    ///
    /// # Errors
    ///
    /// See [`Node::from_yaml_str`] and [`Node::from_json_str`].
    pub fn parse(input: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Yaml => Self::from_yaml_str(input),
            DocumentFormat::Json => Self::from_json_str(input),
        }
    }

    /// Reads and parses a file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise as
    /// [`Node::parse`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents, DocumentFormat::from_path(path))
    }

    /// Renders the canonical YAML form.
    ///
    /// # Errors
    ///
    /// Fails only if an enum member has no name.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Renders the canonical, pretty-printed JSON form.
    ///
    /// # Errors
    ///
    /// Fails only if an enum member has no name.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the canonical form in the given format.
    ///
    /// # Errors
    ///
    /// See [`Node::to_yaml_string`] and [`Node::to_json_string`].
    pub fn render(&self, format: DocumentFormat) -> Result<String> {
        match format {
            DocumentFormat::Yaml => self.to_yaml_string(),
            DocumentFormat::Json => self.to_json_string(),
        }
    }
}
