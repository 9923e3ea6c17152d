//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::ConfigError;

/// A diagnostic wrapper for configuration errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ConfigDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<ConfigError> for ConfigDiagnostic {
    fn from(e: ConfigError) -> Self {
        let help = match &e {
            ConfigError::AmountAndString { .. } => "Set either `amount` or `string`, not both",
            ConfigError::NegativeAmount(_) => "Use zero or a positive number of spaces",
            ConfigError::Parse { .. } => "Recognized keys are `amount` and `string`",
        };
        match e {
            ConfigError::Parse { format, source } => ConfigDiagnostic {
                message: format!("invalid {format} indent config"),
                source: Some(source),
                help: Some(help.into()),
                severity: Severity::Error,
            },
            other => ConfigDiagnostic {
                message: other.to_string(),
                source: None,
                help: Some(help.into()),
                severity: Severity::Error,
            },
        }
    }
}

impl From<ConfigError> for miette::Report {
    fn from(e: ConfigError) -> Self {
        miette::Report::new(ConfigDiagnostic::from(e))
    }
}
