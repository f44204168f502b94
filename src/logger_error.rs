use std::path::PathBuf;
use thiserror::Error;

/// Describes errors in the initialization of `fanout_logger`.
///
/// Construction is all-or-nothing: if one of these errors is returned, no logger exists.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoggerError {
    /// The configuration is incomplete or contains an invalid value,
    /// e.g. the filename is missing or a format option is unknown.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A directory could not be created, or a file could not be opened or read.
    #[error("filesystem operation on {} failed: {source}", .path.display())]
    Filesystem {
        /// The path that was accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Installing the logger as the global logger failed,
    /// because some other logger is already installed.
    #[error("installing the global logger failed: {0}")]
    Log(#[from] log::SetLoggerError),

    /// The configuration file cannot be parsed.
    #[cfg(feature = "config_file")]
    #[cfg_attr(docsrs, doc(cfg(feature = "config_file")))]
    #[error("parsing the configuration file failed: {0}")]
    Toml(#[from] toml::de::Error),

    /// Some mutex was poisoned.
    #[error("some mutex is poisoned")]
    Poison,
}

impl LoggerError {
    pub(crate) fn filesystem<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
