use std::io;

/// Writes complete log lines to a single output.
///
/// Boxed instances of `LineWriter` are the outputs of a [`MultiSink`](crate::writers::MultiSink).
pub trait LineWriter: Sync + Send {
    /// Writes out a log line.
    ///
    /// `line` is complete, including the prefix and the terminating newline,
    /// and must be written as a whole, without being interleaved with lines from other threads.
    ///
    /// # Errors
    ///
    /// `std::io::Error` if the output fails.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;

    /// Flushes the output, if it buffers.
    ///
    /// # Errors
    ///
    /// `std::io::Error` if the output fails.
    fn flush(&self) -> io::Result<()>;
}

impl<W: LineWriter + ?Sized> LineWriter for Box<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<W: LineWriter + ?Sized> LineWriter for std::sync::Arc<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}
