//! Output targets backed by stdout/stderr, files and arbitrary writers.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::{LastChar, OutputTarget};

/// Output target for writing to stdout.
#[derive(Debug, Clone)]
pub struct StdoutTarget {
    id: String,
}

impl StdoutTarget {
    /// Create a new stdout output target.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for StdoutTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputTarget for StdoutTarget {
    fn id(&self) -> &str {
        &self.id
    }

    fn write_str(&mut self, fragment: &str) -> io::Result<usize> {
        io::stdout().lock().write_all(fragment.as_bytes())?;
        Ok(fragment.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Output target for writing to stderr.
#[derive(Debug, Clone)]
pub struct StderrTarget {
    id: String,
}

impl StderrTarget {
    /// Create a new stderr output target.
    pub fn new() -> Self {
        Self {
            id: "stderr".into(),
        }
    }
}

impl Default for StderrTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputTarget for StderrTarget {
    fn id(&self) -> &str {
        &self.id
    }

    fn write_str(&mut self, fragment: &str) -> io::Result<usize> {
        io::stderr().lock().write_all(fragment.as_bytes())?;
        Ok(fragment.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileMode {
    Overwrite,
    Append,
}

/// Output target for writing to files.
///
/// Files are opened readable so the cursor probe can look at the character
/// before the write position.
#[derive(Debug)]
pub struct FileTarget {
    id: String,
    path: PathBuf,
    file: File,
    mode: FileMode,
}

impl FileTarget {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        Ok(Self::from_parts(path, file, FileMode::Overwrite))
    }

    /// Open the file at `path` for appending, creating it if needed.
    pub fn append(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)?;
        Ok(Self::from_parts(path, file, FileMode::Append))
    }

    fn from_parts(path: PathBuf, file: File, mode: FileMode) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self {
            id,
            path,
            file,
            mode,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_tail(&mut self, start: u64, end: u64) -> io::Result<LastChar> {
        self.file.seek(SeekFrom::Start(start))?;
        let mut tail = vec![0u8; (end - start) as usize];
        self.file.read_exact(&mut tail)?;
        decode_last_char(&tail)
    }
}

impl OutputTarget for FileTarget {
    fn id(&self) -> &str {
        &self.id
    }

    fn write_str(&mut self, fragment: &str) -> io::Result<usize> {
        self.file.write_all(fragment.as_bytes())?;
        Ok(fragment.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    fn probe_last_char(&mut self) -> io::Result<LastChar> {
        // Appends land at the end no matter where the cursor was left.
        let end = match self.mode {
            FileMode::Append => self.file.seek(SeekFrom::End(0))?,
            FileMode::Overwrite => self.file.stream_position()?,
        };
        if end == 0 {
            return Ok(LastChar::StartOfStream);
        }
        // A UTF-8 scalar is at most four bytes long.
        let start = end.saturating_sub(4);
        let probed = self.read_tail(start, end);
        self.file.seek(SeekFrom::Start(end))?;
        probed
    }
}

/// Decode the final character of a byte tail that may start mid-sequence.
fn decode_last_char(tail: &[u8]) -> io::Result<LastChar> {
    let invalid = || io::Error::new(io::ErrorKind::InvalidData, "tail is not valid UTF-8");
    let lead = tail
        .iter()
        .rposition(|b| b & 0xC0 != 0x80)
        .ok_or_else(invalid)?;
    let text = std::str::from_utf8(&tail[lead..]).map_err(|_| invalid())?;
    LastChar::of(text).ok_or_else(invalid)
}

/// Output target adapting any [`Write`] implementation.
///
/// Plain writers cannot be read back, so the cursor probe is unsupported and
/// a tracker wrapping this target starts at start-of-stream.
pub struct WriterTarget<W> {
    id: String,
    writer: W,
}

impl<W: Write> WriterTarget<W> {
    /// Wrap `writer` under the given identifier.
    pub fn new(id: impl Into<String>, writer: W) -> Self {
        Self {
            id: id.into(),
            writer,
        }
    }

    /// Get a reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the target and return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> fmt::Debug for WriterTarget<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterTarget").field("id", &self.id).finish()
    }
}

impl<W: Write> OutputTarget for WriterTarget<W> {
    fn id(&self) -> &str {
        &self.id
    }

    fn write_str(&mut self, fragment: &str) -> io::Result<usize> {
        self.writer.write_all(fragment.as_bytes())?;
        Ok(fragment.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
