use super::LineWriter;
use crate::LoggerError;
use std::sync::{Arc, Mutex, MutexGuard};

/// Collects log lines in memory.
///
/// Clones share the same buffer, so one clone can be handed to a
/// [`MultiSink`](crate::writers::MultiSink) while another one is used to read what was written.
/// This is how console output is captured in tests.
#[derive(Clone, Debug, Default)]
pub struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl BufferWriter {
    /// Create a new, empty instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_buffer(&self) -> Result<MutexGuard<'_, Vec<u8>>, LoggerError> {
        self.buffer.lock().map_err(|_| LoggerError::Poison)
    }

    /// Everything written so far.
    ///
    /// # Errors
    ///
    /// `LoggerError::Poison` if the mutex is poisoned.
    pub fn contents(&self) -> Result<String, LoggerError> {
        Ok(String::from_utf8_lossy(&self.lock_buffer()?).into_owned())
    }

    /// Everything written so far, split into lines, without line terminators.
    ///
    /// # Errors
    ///
    /// `LoggerError::Poison` if the mutex is poisoned.
    pub fn lines(&self) -> Result<Vec<String>, LoggerError> {
        Ok(self.contents()?.lines().map(ToString::to_string).collect())
    }

    /// Discards everything written so far.
    ///
    /// # Errors
    ///
    /// `LoggerError::Poison` if the mutex is poisoned.
    pub fn clear(&self) -> Result<(), LoggerError> {
        self.lock_buffer()?.clear();
        Ok(())
    }
}

impl LineWriter for BufferWriter {
    fn write_line(&self, line: &[u8]) -> std::io::Result<()> {
        self.lock_buffer()
            .map_err(std::io::Error::other)?
            .extend_from_slice(line);
        Ok(())
    }

    fn flush(&self) -> std::io::Result<()> {
        Ok(())
    }
}
