//! The interception target that inserts the prefix into written text.

use std::io;

use crate::config::IndentPrefix;
use crate::io::{LastChar, OutputTarget, SharedTarget};

/// Copy `fragment`, inserting `prefix` after its newlines.
///
/// A newline at the very end only gets the prefix when `indent_trailing` is
/// set, i.e. when the caller knows more text follows it.
pub(crate) fn indent_after_newlines(fragment: &str, prefix: &str, indent_trailing: bool) -> String {
    let mut out = String::with_capacity(fragment.len() + prefix.len());
    let mut start = 0;
    for (i, _) in fragment.match_indices('\n') {
        out.push_str(&fragment[start..=i]);
        start = i + 1;
        if indent_trailing || start < fragment.len() {
            out.push_str(prefix);
        }
    }
    out.push_str(&fragment[start..]);
    out
}

/// Rewrites writes so every line starts with the prefix, then forwards them
/// to the tracked target that was current when the scope was entered.
#[derive(Debug)]
pub struct IndentingTarget {
    id: String,
    prefix: IndentPrefix,
    tracked: SharedTarget,
}

impl IndentingTarget {
    /// Indent writes into `tracked`, which must track its cursor.
    pub(crate) fn new(prefix: IndentPrefix, tracked: SharedTarget) -> Self {
        let id = tracked.borrow().id().to_owned();
        Self {
            id,
            prefix,
            tracked,
        }
    }

    /// The prefix this target inserts.
    pub fn prefix(&self) -> &IndentPrefix {
        &self.prefix
    }

    fn at_line_start(&self) -> bool {
        self.tracked
            .borrow()
            .last_char()
            .unwrap_or_default()
            .is_line_start()
    }
}

impl OutputTarget for IndentingTarget {
    fn id(&self) -> &str {
        &self.id
    }

    fn write_str(&mut self, fragment: &str) -> io::Result<usize> {
        let prefix = self.prefix.as_str();
        let mut rewritten = String::new();
        if !fragment.is_empty() && self.at_line_start() {
            rewritten.push_str(prefix);
        }
        rewritten.push_str(&indent_after_newlines(fragment, prefix, false));
        self.tracked.borrow_mut().write_str(&rewritten)
    }

    fn write_batch(&mut self, fragments: &[&str]) -> io::Result<usize> {
        let prefix = self.prefix.as_str();
        let last_content = fragments.iter().rposition(|f| !f.is_empty());
        let mut rewritten: Vec<String> = fragments
            .iter()
            .enumerate()
            .map(|(i, fragment)| {
                let more_follows = last_content.is_some_and(|last| i < last);
                indent_after_newlines(fragment, prefix, more_follows)
            })
            .collect();
        if self.at_line_start() {
            if let Some(first) = rewritten.iter_mut().find(|f| !f.is_empty()) {
                first.insert_str(0, prefix);
            }
        }
        let pieces: Vec<&str> = rewritten.iter().map(String::as_str).collect();
        self.tracked.borrow_mut().write_batch(&pieces)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.tracked.borrow_mut().flush()
    }

    fn probe_last_char(&mut self) -> io::Result<LastChar> {
        self.tracked.borrow_mut().probe_last_char()
    }
}
