//! I/O abstractions for output targets.
//!
//! This module provides:
//! - `OutputTarget`: Trait for text output destinations
//! - `LastChar`: What a target's write position sits after
//! - Standard implementations for stdout/stderr, files and writers
//! - An in-memory sink for capturing output

mod memory;
mod std_io;
mod target;

pub use memory::InMemorySink;
pub use std_io::{FileTarget, StderrTarget, StdoutTarget, WriterTarget};
pub use target::{LastChar, OutputTarget, SharedTarget, shared};
