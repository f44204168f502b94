use super::LineWriter;
use crate::{
    util::io_err,
    LoggerError,
};
use std::{
    fs::{DirBuilder, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Appends log lines to a file.
///
/// The file is opened once, write-only, in append mode, and is created if it does not exist.
/// Existing content is preserved. The file is kept open as long as the writer lives;
/// it is neither rotated nor reopened.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileWriter {
    /// Opens the file at `path`, after creating the missing parts of its directory.
    ///
    /// On unix, new directories get the permissions `rwxr-xr-x`,
    /// and a new file gets the permissions `rw-r--r--` (both subject to the umask).
    ///
    /// # Errors
    ///
    /// [`LoggerError::Filesystem`] if the directory cannot be created,
    /// or if the file cannot be opened.
    pub fn try_new<P: Into<PathBuf>>(path: P) -> Result<Self, LoggerError> {
        let path = path.into();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            create_dir(dir).map_err(|e| LoggerError::filesystem(dir, e))?;
        }
        let file = open_for_append(&path).map_err(|e| LoggerError::filesystem(&path, e))?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// The path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn create_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir)
}

fn open_for_append(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}

impl LineWriter for FileWriter {
    fn write_line(&self, line: &[u8]) -> std::io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io_err("log file mutex is poisoned"))?;
        file.write_all(line)
    }

    fn flush(&self) -> std::io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io_err("log file mutex is poisoned"))?;
        file.flush()
    }
}
