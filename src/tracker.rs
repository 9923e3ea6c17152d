//! Cursor tracking wrapper for output targets.

use std::io;

use tracing::debug;

use crate::io::{LastChar, OutputTarget, SharedTarget};

/// Wraps an output target and remembers the last character written to it.
///
/// Writes and batches are forwarded unchanged. Only non-empty fragments move
/// the cursor, so empty writes are invisible to anything deciding whether the
/// next write starts a line.
#[derive(Debug)]
pub struct CursorTracker {
    id: String,
    inner: SharedTarget,
    last_char: LastChar,
}

impl CursorTracker {
    /// Wrap `inner`, probing it for content that was written before.
    ///
    /// A target that cannot be probed is treated as sitting at the start of
    /// the stream.
    pub fn new(inner: SharedTarget) -> Self {
        let (id, probed) = {
            let mut target = inner.borrow_mut();
            (target.id().to_owned(), target.probe_last_char())
        };
        let last_char = probed.unwrap_or_else(|err| {
            debug!(target_id = %id, error = %err, "cursor probe failed, assuming start of stream");
            LastChar::StartOfStream
        });
        Self {
            id,
            inner,
            last_char,
        }
    }

    /// The wrapped target.
    pub fn inner(&self) -> &SharedTarget {
        &self.inner
    }

    /// The tracked last character.
    pub fn cursor(&self) -> LastChar {
        self.last_char
    }
}

impl OutputTarget for CursorTracker {
    fn id(&self) -> &str {
        &self.id
    }

    fn write_str(&mut self, fragment: &str) -> io::Result<usize> {
        let written = self.inner.borrow_mut().write_str(fragment)?;
        if let Some(last) = LastChar::of(fragment) {
            self.last_char = last;
        }
        Ok(written)
    }

    fn write_batch(&mut self, fragments: &[&str]) -> io::Result<usize> {
        let written = self.inner.borrow_mut().write_batch(fragments)?;
        if let Some(last) = fragments.iter().rev().find_map(|f| LastChar::of(f)) {
            self.last_char = last;
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.borrow_mut().flush()
    }

    fn probe_last_char(&mut self) -> io::Result<LastChar> {
        Ok(self.last_char)
    }

    fn last_char(&self) -> Option<LastChar> {
        Some(self.last_char)
    }
}
