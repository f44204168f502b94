#![allow(dead_code)]
use fanout_logger::{writers::BufferWriter, Logger, LoggerConfig};
use std::path::{Path, PathBuf};
use temp_dir::TempDir;

// Creates a logger whose working directory is a fresh temp dir,
// and whose console output is captured in memory.
#[track_caller]
pub fn logger_in_temp_dir(config: LoggerConfig) -> (Logger, BufferWriter, TempDir) {
    let dir = TempDir::new().unwrap();
    let console = BufferWriter::new();
    let logger = Logger::try_new_with_console(Some(config), dir.path(), console.clone())
        .unwrap_or_else(|e| panic!("Logger initialization failed with {e}"));
    (logger, console, dir)
}

pub fn file_path(dir: &Path, relative: &str) -> PathBuf {
    dir.join(relative)
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("cannot read {path:?}: {e}"))
}
