use super::LineWriter;
use std::io::{Stderr, StderrLock, Stdout, StdoutLock, Write};

/// Writes log lines to stdout or to stderr.
///
/// Each line is written while holding the stream's lock, so that lines from
/// different threads are never mixed.
pub struct ConsoleWriter(StdStream);

// Abstraction over stdout and stderr
enum StdStream {
    Out(Stdout),
    Err(Stderr),
}

enum StdStreamLock<'a> {
    Out(StdoutLock<'a>),
    Err(StderrLock<'a>),
}

impl StdStream {
    fn lock(&self) -> StdStreamLock<'_> {
        match self {
            StdStream::Out(s) => StdStreamLock::Out(s.lock()),
            StdStream::Err(s) => StdStreamLock::Err(s.lock()),
        }
    }
}

impl StdStreamLock<'_> {
    fn as_write(&mut self) -> &mut dyn Write {
        match self {
            StdStreamLock::Out(l) => l as &mut dyn Write,
            StdStreamLock::Err(l) => l as &mut dyn Write,
        }
    }
}

impl ConsoleWriter {
    /// Writes to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self(StdStream::Out(std::io::stdout()))
    }

    /// Writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self(StdStream::Err(std::io::stderr()))
    }
}

impl LineWriter for ConsoleWriter {
    fn write_line(&self, line: &[u8]) -> std::io::Result<()> {
        let mut lock = self.0.lock();
        let w = lock.as_write();
        w.write_all(line)?;
        w.flush()
    }

    fn flush(&self) -> std::io::Result<()> {
        self.0.lock().as_write().flush()
    }
}
