//! Scoped indentation of the current output target.
//!
//! An [`Indent`] describes one indent level. Entering it returns an
//! [`IndentGuard`]; while the guard lives, everything written through the
//! current output target is indented, and dropping the guard puts the
//! previous target back. Guards nest, and inner prefixes are themselves
//! written through the outer scopes:
//!
//! ```
//! use indentio::{Indent, InMemorySink, Redirect, shared};
//!
//! let sink = InMemorySink::new("out");
//! let _redirect = Redirect::new(shared(sink.clone()));
//! {
//!     let _quote = Indent::with_string("> ").enter();
//!     indentio::iprintln!("quoted").unwrap();
//!     let _code = Indent::new(4).enter();
//!     indentio::iprintln!("code").unwrap();
//! }
//! assert_eq!(sink.contents(), "> quoted\n>     code\n");
//! ```

pub(crate) mod rewrite;

pub use rewrite::IndentingTarget;

use std::rc::Rc;

use tracing::trace;

use crate::config::{IndentConfig, IndentPrefix};
use crate::current::{pop_depth, push_depth, set_target};
use crate::error::ConfigError;
use crate::io::{SharedTarget, shared};
use crate::tracker::CursorTracker;

/// One level of indentation, ready to be entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indent {
    prefix: IndentPrefix,
}

impl Indent {
    /// Indent by `amount` spaces.
    pub fn new(amount: usize) -> Self {
        Self {
            prefix: IndentPrefix::spaces(amount),
        }
    }

    /// Indent with an exact prefix string.
    pub fn with_string(string: impl AsRef<str>) -> Self {
        Self {
            prefix: IndentPrefix::literal(string),
        }
    }

    /// Indent as described by `config`.
    pub fn from_config(config: &IndentConfig) -> Result<Self, ConfigError> {
        IndentPrefix::from_config(config).map(|prefix| Self { prefix })
    }

    /// The prefix inserted at every line start.
    pub fn prefix(&self) -> &IndentPrefix {
        &self.prefix
    }

    /// Start indenting the current output target.
    pub fn enter(&self) -> IndentGuard {
        let prior = crate::current_target();
        let tracked_prior = if prior.borrow().last_char().is_some() {
            Rc::clone(&prior)
        } else {
            shared(CursorTracker::new(Rc::clone(&prior)))
        };
        let indenting = IndentingTarget::new(self.prefix.clone(), tracked_prior);
        set_target(shared(CursorTracker::new(shared(indenting))));

        let depth = push_depth();
        trace!(depth, prefix = %self.prefix, "entered indent scope");
        IndentGuard {
            restore: Some(prior),
            depth,
        }
    }

    /// Run `f` inside this indent level.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.enter();
        f()
    }
}

impl From<IndentPrefix> for Indent {
    fn from(prefix: IndentPrefix) -> Self {
        Self { prefix }
    }
}

/// An active indent level.
///
/// Dropping the guard reinstalls exactly the target that was current when
/// the scope was entered, including while unwinding. Guards must be dropped
/// in reverse order of creation.
#[must_use = "the indent ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct IndentGuard {
    restore: Option<SharedTarget>,
    depth: usize,
}

impl IndentGuard {
    /// Nesting depth of this scope, starting at 1 for the outermost.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        if let Some(prior) = self.restore.take() {
            set_target(prior);
            pop_depth();
            trace!(depth = self.depth, "exited indent scope");
        }
    }
}
