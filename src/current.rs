//! The current output target and the functions that write through it.
//!
//! Every thread has one current target, initially stdout wrapped in a
//! [`CursorTracker`]. Indent scopes swap it out on entry and put the previous
//! one back on exit. Code that prints through [`write_str`], [`print`] or the
//! [`iprint!`](crate::iprint) family is indented without knowing it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::io;
use std::rc::Rc;

use crate::io::{SharedTarget, StdoutTarget, shared};
use crate::tracker::CursorTracker;

thread_local! {
    static STDOUT: SharedTarget = shared(StdoutTarget::new());
    static CURRENT: RefCell<SharedTarget> = RefCell::new(default_target());
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

fn default_target() -> SharedTarget {
    shared(CursorTracker::new(stdout_target()))
}

/// The untracked stdout target underneath this thread's default target.
///
/// Writing here bypasses every indent scope and the default tracker, so the
/// default tracker will not see what was written.
pub fn stdout_target() -> SharedTarget {
    STDOUT.with(Rc::clone)
}

/// Handle to the current output target of this thread.
pub fn current_target() -> SharedTarget {
    CURRENT.with(|current| Rc::clone(&current.borrow()))
}

/// Install `target` as the current output target, returning the previous one.
pub fn set_target(target: SharedTarget) -> SharedTarget {
    CURRENT.with(|current| current.replace(target))
}

/// Number of [`IndentGuard`](crate::IndentGuard)s alive on this thread.
///
/// Redirects do not reset the count: inside [`with_target`] the new target
/// is not indented, yet the depth still includes the enclosing scopes.
pub fn current_depth() -> usize {
    DEPTH.with(Cell::get)
}

pub(crate) fn push_depth() -> usize {
    DEPTH.with(|depth| {
        let next = depth.get() + 1;
        depth.set(next);
        next
    })
}

pub(crate) fn pop_depth() {
    DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
}

/// Write a fragment to the current output target.
pub fn write_str(fragment: &str) -> io::Result<usize> {
    let target = current_target();
    let mut target = target.borrow_mut();
    target.write_str(fragment)
}

/// Write an ordered batch of fragments to the current output target.
pub fn write_batch(fragments: &[&str]) -> io::Result<usize> {
    let target = current_target();
    let mut target = target.borrow_mut();
    target.write_batch(fragments)
}

/// Write formatted text to the current output target.
pub fn write_fmt(args: fmt::Arguments<'_>) -> io::Result<()> {
    match args.as_str() {
        Some(s) => write_str(s)?,
        None => write_str(&args.to_string())?,
    };
    Ok(())
}

/// Flush the current output target.
pub fn flush() -> io::Result<()> {
    let target = current_target();
    let mut target = target.borrow_mut();
    target.flush()
}

/// Print `args` separated by `sep` and followed by `end`.
///
/// Each argument, separator and the end string is delivered as its own
/// write, the way incremental printers emit output.
pub fn print(args: &[&str], sep: &str, end: &str) -> io::Result<()> {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write_str(sep)?;
        }
        write_str(arg)?;
    }
    write_str(end)?;
    Ok(())
}

/// Like [`print`], but delivers all pieces as one batch.
pub fn print_batch(args: &[&str], sep: &str, end: &str) -> io::Result<()> {
    let mut pieces = Vec::with_capacity(args.len() * 2 + 1);
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            pieces.push(sep);
        }
        pieces.push(*arg);
    }
    pieces.push(end);
    write_batch(&pieces)?;
    Ok(())
}

/// A [`fmt::Write`] handle onto the current output target.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentOutput;

impl fmt::Write for CurrentOutput {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_str(s).map(drop).map_err(|_| fmt::Error)
    }
}

/// Get a [`fmt::Write`] handle onto the current output target.
pub fn output() -> CurrentOutput {
    CurrentOutput
}

/// Guard that installs a target and restores the previous one on drop.
///
/// This is the stdout-redirect counterpart of an indent scope: everything
/// printed while the guard lives goes to `target`.
#[must_use = "the previous target is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct Redirect {
    previous: Option<SharedTarget>,
}

impl Redirect {
    /// Install `target` as the current output target.
    pub fn new(target: SharedTarget) -> Self {
        Self {
            previous: Some(set_target(target)),
        }
    }
}

impl Drop for Redirect {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            set_target(previous);
        }
    }
}

/// Run `f` with `target` installed as the current output target.
pub fn with_target<R>(target: SharedTarget, f: impl FnOnce() -> R) -> R {
    let _redirect = Redirect::new(target);
    f()
}

/// Print to the current output target.
///
/// Returns `std::io::Result<()>`.
#[macro_export]
macro_rules! iprint {
    ($($arg:tt)*) => {
        $crate::write_fmt(::std::format_args!($($arg)*))
    };
}

/// Print to the current output target, followed by a newline.
///
/// The text and the newline are written separately. Returns
/// `std::io::Result<()>`.
#[macro_export]
macro_rules! iprintln {
    () => {
        $crate::write_str("\n").map(drop)
    };
    ($($arg:tt)*) => {
        $crate::write_fmt(::std::format_args!($($arg)*))
            .and_then(|()| $crate::write_str("\n").map(drop))
    };
}
