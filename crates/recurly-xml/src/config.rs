//! Mapper configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Result, XmlError};

/// Default limit on element nesting while reading a document.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// What to do with a closed-set token the enumeration does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownEnumPolicy {
    /// Fail the parse with `XmlError::UnknownEnumValue`.
    #[default]
    Reject,

    /// Keep the token in the enumeration's `Unknown` variant.
    Preserve,
}

impl std::str::FromStr for UnknownEnumPolicy {
    type Err = XmlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "preserve" => Ok(Self::Preserve),
            other => Err(XmlError::Configuration(format!(
                "unknown enum policy: {other}"
            ))),
        }
    }
}

/// Configuration shared by the reader, the decoders, and the writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Handling of unrecognised closed-set tokens (default: reject).
    pub unknown_enums: UnknownEnumPolicy,

    /// Emit `type="integer"` style hints on typed scalars (default: true).
    pub type_attributes: bool,

    /// Emit the `<?xml ...?>` declaration (default: true).
    pub declaration: bool,

    /// Indent nested elements by this many spaces; compact when `None`.
    pub indent: Option<usize>,

    /// Maximum element nesting accepted by the reader (default: 32).
    pub max_depth: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            unknown_enums: UnknownEnumPolicy::Reject,
            type_attributes: true,
            declaration: true,
            indent: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MapperConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown-token policy.
    #[must_use]
    pub fn with_unknown_enums(mut self, policy: UnknownEnumPolicy) -> Self {
        self.unknown_enums = policy;
        self
    }

    /// Enable or disable `type` attribute hints on output.
    #[must_use]
    pub fn with_type_attributes(mut self, enabled: bool) -> Self {
        self.type_attributes = enabled;
        self
    }

    /// Enable or disable the XML declaration on output.
    #[must_use]
    pub fn with_declaration(mut self, enabled: bool) -> Self {
        self.declaration = enabled;
        self
    }

    /// Indent output by `spaces` per level.
    #[must_use]
    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.indent = Some(spaces);
        self
    }

    /// Set the maximum nesting depth accepted by the reader.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Load configuration from `RECURLY_XML_*` environment variables.
    ///
    /// Unset variables keep their defaults; unparseable ones are logged
    /// and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(policy) = parse_var(&lookup, "RECURLY_XML_UNKNOWN_ENUMS") {
            config.unknown_enums = policy;
        }
        if let Some(enabled) = parse_var(&lookup, "RECURLY_XML_TYPE_ATTRIBUTES") {
            config.type_attributes = enabled;
        }
        if let Some(enabled) = parse_var(&lookup, "RECURLY_XML_DECLARATION") {
            config.declaration = enabled;
        }
        if let Some(spaces) = parse_var::<usize, _>(&lookup, "RECURLY_XML_INDENT") {
            config.indent = (spaces > 0).then_some(spaces);
        }
        if let Some(depth) = parse_var(&lookup, "RECURLY_XML_MAX_DEPTH") {
            config.max_depth = depth;
        }

        config
    }

    /// Load configuration from a JSON file.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `XmlError::Configuration` if the file cannot be read or is
    /// not valid JSON for this structure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            XmlError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            XmlError::Configuration(format!("failed to parse {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "Loaded mapper configuration");
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring invalid configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = MapperConfig::default();
        assert_eq!(config.unknown_enums, UnknownEnumPolicy::Reject);
        assert!(config.type_attributes);
        assert!(config.declaration);
        assert_eq!(config.indent, None);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MapperConfig::new()
            .with_unknown_enums(UnknownEnumPolicy::Preserve)
            .with_declaration(false)
            .with_indent(2);

        assert_eq!(config.unknown_enums, UnknownEnumPolicy::Preserve);
        assert!(!config.declaration);
        assert_eq!(config.indent, Some(2));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("RECURLY_XML_UNKNOWN_ENUMS", "preserve"),
            ("RECURLY_XML_TYPE_ATTRIBUTES", "false"),
            ("RECURLY_XML_INDENT", "4"),
            ("RECURLY_XML_MAX_DEPTH", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config = MapperConfig::from_lookup(|key| vars.get(key).map(ToString::to_string));

        assert_eq!(config.unknown_enums, UnknownEnumPolicy::Preserve);
        assert!(!config.type_attributes);
        assert!(config.declaration);
        assert_eq!(config.indent, Some(4));
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_zero_indent_means_compact() {
        let config = MapperConfig::from_lookup(|key| {
            (key == "RECURLY_XML_INDENT").then(|| "0".to_string())
        });
        assert_eq!(config.indent, None);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"unknown_enums": "preserve", "indent": 2}}"#).unwrap();

        let config = MapperConfig::from_file(file.path()).unwrap();
        assert_eq!(config.unknown_enums, UnknownEnumPolicy::Preserve);
        assert_eq!(config.indent, Some(2));
        assert!(config.type_attributes);
    }

    #[test]
    fn test_from_file_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "unknown_enums = preserve").unwrap();

        let err = MapperConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, XmlError::Configuration(_)));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "Reject".parse::<UnknownEnumPolicy>().unwrap(),
            UnknownEnumPolicy::Reject
        );
        assert!("lenient".parse::<UnknownEnumPolicy>().is_err());
    }
}
