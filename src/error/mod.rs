//! Error types for indentio.
//!
//! Writes never fail on their own account: sink errors are plain
//! `std::io::Error`s passed through untouched. The only errors this crate
//! raises come from building an indent prefix out of a configuration.

use thiserror::Error;

/// An invalid indent configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Both a space count and a literal prefix string were supplied.
    #[error("indent amount ({amount}) and indent string ({string:?}) are mutually exclusive")]
    AmountAndString { amount: i64, string: String },

    /// The space count was negative.
    #[error("indent amount must be non-negative, got {0}")]
    NegativeAmount(i64),

    /// The configuration document could not be parsed.
    #[error("failed to parse {format} indent config: {source}")]
    Parse {
        /// Name of the document format
        format: &'static str,
        /// The underlying parser error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
