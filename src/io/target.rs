//! Output target trait definition.

use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::io;
use std::rc::Rc;

/// What the cursor of an output target sits after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastChar {
    /// Nothing has been written yet, or the previous content is unknown.
    #[default]
    StartOfStream,
    /// The final character of the last non-empty write.
    Char(char),
}

impl LastChar {
    /// Whether the next write begins a fresh line.
    pub fn is_line_start(self) -> bool {
        matches!(self, LastChar::StartOfStream | LastChar::Char('\n'))
    }

    /// The final character of `fragment`, if it has one.
    pub fn of(fragment: &str) -> Option<LastChar> {
        fragment.chars().next_back().map(LastChar::Char)
    }
}

impl fmt::Display for LastChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastChar::StartOfStream => write!(f, "<start>"),
            LastChar::Char(c) => write!(f, "{c:?}"),
        }
    }
}

/// A shared, single-threaded handle to an output target.
///
/// The identity of the `Rc` is what scopes restore on exit, so compare
/// handles with [`Rc::ptr_eq`].
pub type SharedTarget = Rc<RefCell<dyn OutputTarget>>;

/// Wrap a target into a [`SharedTarget`] handle.
pub fn shared<T: OutputTarget + 'static>(target: T) -> SharedTarget {
    Rc::new(RefCell::new(target))
}

/// Trait for text output targets.
///
/// Implementors accept single text fragments and ordered batches of
/// fragments, and may optionally report the character immediately before
/// their write position.
pub trait OutputTarget: Debug {
    /// Returns an identifier for this output target.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Write a single fragment, returning the number of bytes written.
    fn write_str(&mut self, fragment: &str) -> io::Result<usize>;

    /// Write a sequence of fragments in order.
    fn write_batch(&mut self, fragments: &[&str]) -> io::Result<usize> {
        let mut written = 0;
        for fragment in fragments {
            written += self.write_str(fragment)?;
        }
        Ok(written)
    }

    /// Flush buffered output, if any.
    fn flush(&mut self) -> io::Result<()>;

    /// Read the character immediately before the current write position.
    ///
    /// Targets that cannot read back what they hold return
    /// [`io::ErrorKind::Unsupported`].
    fn probe_last_char(&mut self) -> io::Result<LastChar> {
        Err(io::Error::from(io::ErrorKind::Unsupported))
    }

    /// The tracked last character, for targets that track it.
    ///
    /// `None` means this target does not track its cursor and must be wrapped
    /// in a [`CursorTracker`](crate::CursorTracker) before indentation can be
    /// layered on top of it.
    fn last_char(&self) -> Option<LastChar> {
        None
    }
}
