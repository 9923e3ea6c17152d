//! Deserializable indent settings.

use serde::Deserialize;

#[cfg(any(feature = "json", feature = "yaml"))]
use crate::error::ConfigError;

/// Configuration for a single indent level.
///
/// Recognized keys are `amount` (number of leading spaces) and `string`
/// (literal prefix). At most one of them may be set; see
/// [`IndentPrefix::from_config`](super::IndentPrefix::from_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndentConfig {
    /// Width of the indent in spaces
    #[serde(default)]
    pub amount: Option<i64>,
    /// Literal string to indent with
    #[serde(default)]
    pub string: Option<String>,
}

impl IndentConfig {
    /// Create an empty configuration (four spaces).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of leading spaces.
    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set a literal prefix string.
    pub fn with_string(mut self, string: impl Into<String>) -> Self {
        self.string = Some(string.into());
        self
    }

    /// Parse a configuration from a JSON document.
    #[cfg(feature = "json")]
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(|e| ConfigError::Parse {
            format: "json",
            source: Box::new(e),
        })
    }

    /// Parse a configuration from a YAML document.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(input).map_err(|e| ConfigError::Parse {
            format: "yaml",
            source: Box::new(e),
        })
    }
}
