//! # indentio
//!
//! Composable, nestable indentation of text written to a shared output target.
//!
//! ## Overview
//!
//! indentio provides:
//! - **Scoped indentation**: Enter an [`Indent`] and everything printed through
//!   the current output target is indented until the guard is dropped
//! - **Nesting**: Inner scopes add their prefix inside the outer ones
//! - **Fragment-safe rewriting**: Writers emit arbitrary fragments, not whole
//!   lines; the prefix still lands exactly at line starts
//! - **Cursor tracking**: [`CursorTracker`] remembers whether a target sits at
//!   the start of a line, across writes from unrelated callers
//! - **Pluggable targets**: stdout/stderr, files, any `std::io::Write`, or an
//!   in-memory sink for capturing
//!
//! ## Quick Start
//!
//! ```rust
//! use indentio::{Indent, InMemorySink, iprintln, shared, with_target};
//!
//! let sink = InMemorySink::new("out");
//! with_target(shared(sink.clone()), || -> std::io::Result<()> {
//!     iprintln!("root")?;
//!     Indent::default().scope(|| iprintln!("child"))?;
//!     iprintln!("root again")
//! })
//! .unwrap();
//!
//! assert_eq!(sink.contents(), "root\n    child\nroot again\n");
//! ```
//!
//! ## Features
//!
//! - `json` - Parse [`IndentConfig`] from JSON
//! - `yaml` - Parse [`IndentConfig`] from YAML
//! - `miette` - Pretty error reporting with miette
//!
//! ## Threading
//!
//! The current output target is per thread and handles are `Rc`-based, so an
//! indent stack belongs to the thread that built it.

pub mod config;
pub mod current;
pub mod error;
pub mod indent;
pub mod io;
pub mod tracker;

pub use config::{DEFAULT_INDENT_WIDTH, IndentConfig, IndentPrefix};
pub use current::{
    CurrentOutput, Redirect, current_depth, current_target, flush, output, print, print_batch,
    set_target, stdout_target, with_target, write_batch, write_fmt, write_str,
};
pub use error::ConfigError;
pub use indent::{Indent, IndentGuard, IndentingTarget};
pub use io::{
    FileTarget, InMemorySink, LastChar, OutputTarget, SharedTarget, StderrTarget, StdoutTarget,
    WriterTarget, shared,
};
pub use tracker::CursorTracker;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ConfigDiagnostic;
