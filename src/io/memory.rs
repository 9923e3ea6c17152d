//! In-memory output target, mostly for tests and capturing.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use super::{LastChar, OutputTarget};

/// In-memory output sink.
///
/// Clones share the same buffer, so a test can install one clone as the
/// current target and read the captured text back through another.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    buf: Rc<RefCell<String>>,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_contents(id, String::new())
    }

    /// Create a sink that already holds some text.
    pub fn with_contents(id: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Rc::new(RefCell::new(contents.into())),
        }
    }

    /// Get the contents of the sink.
    pub fn contents(&self) -> String {
        self.buf.borrow().clone()
    }

    /// Number of bytes held.
    pub fn len(&self) -> usize {
        self.buf.borrow().len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.borrow().is_empty()
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        self.buf.borrow_mut().clear();
    }
}

impl OutputTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn write_str(&mut self, fragment: &str) -> io::Result<usize> {
        self.buf.borrow_mut().push_str(fragment);
        Ok(fragment.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn probe_last_char(&mut self) -> io::Result<LastChar> {
        Ok(LastChar::of(&self.buf.borrow()).unwrap_or_default())
    }
}
