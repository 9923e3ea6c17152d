//! Configuration types for indent levels.
//!
//! This module provides:
//! - `IndentConfig`: Deserializable `{amount, string}` settings
//! - `IndentPrefix`: The immutable prefix built from them

mod prefix;
mod settings;

pub use prefix::{DEFAULT_INDENT_WIDTH, IndentPrefix};
pub use settings::IndentConfig;
