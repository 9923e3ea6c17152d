//! The immutable prefix inserted at the start of each indented line.

use std::fmt;
use std::rc::Rc;

use super::IndentConfig;
use crate::error::ConfigError;

/// Number of spaces used when no amount or string is configured.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// An immutable indentation prefix.
///
/// Cloning shares the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndentPrefix(Rc<str>);

impl IndentPrefix {
    /// A prefix of `amount` spaces.
    pub fn spaces(amount: usize) -> Self {
        Self(" ".repeat(amount).into())
    }

    /// A prefix made of exactly `string`.
    pub fn literal(string: impl AsRef<str>) -> Self {
        Self(string.as_ref().into())
    }

    /// Build a prefix from a configuration.
    ///
    /// `string` overrides the default width; supplying it together with
    /// `amount`, or giving a negative `amount`, is rejected.
    pub fn from_config(config: &IndentConfig) -> Result<Self, ConfigError> {
        match (config.amount, &config.string) {
            (Some(amount), Some(string)) => Err(ConfigError::AmountAndString {
                amount,
                string: string.clone(),
            }),
            (None, Some(string)) => Ok(Self::literal(string)),
            (Some(amount), None) => usize::try_from(amount)
                .map(Self::spaces)
                .map_err(|_| ConfigError::NegativeAmount(amount)),
            (None, None) => Ok(Self::default()),
        }
    }

    /// The prefix text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the prefix in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the prefix inserts nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for IndentPrefix {
    fn default() -> Self {
        Self::spaces(DEFAULT_INDENT_WIDTH)
    }
}

impl fmt::Display for IndentPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IndentPrefix {
    fn from(s: &str) -> Self {
        Self::literal(s)
    }
}

impl From<String> for IndentPrefix {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for IndentPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
