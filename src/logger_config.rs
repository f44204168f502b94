use crate::FormatOptions;
#[cfg(feature = "config_file")]
use {crate::LoggerError, std::path::Path};
use std::path::PathBuf;

/// Decides when the line prefix is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrefixMode {
    /// The prefix is computed for every log line, with the current time
    /// and the source location of the log call.
    #[default]
    PerLine,
    /// The prefix of each severity is computed once, when the logger is created,
    /// and then reused for every line.
    ///
    /// The timestamp is then the creation time of the logger, and the source location is
    /// the place where the logger was created.
    Frozen,
}

/// Configuration for a [`Logger`](crate::Logger) that writes into a file.
///
/// The log file is `<working directory>/<directory>/<filename>`.
/// The filename is mandatory; creating a logger with an empty filename fails.
///
/// ```rust
/// use fanout_logger::{FormatOptions, LoggerConfig};
///
/// let config = LoggerConfig::new("app.log")
///     .directory("logs")
///     .stdout(true)
///     .include(FormatOptions::DATE_TIME | FormatOptions::LEVEL);
/// ```
///
/// A configuration is consumed by the logger construction; the logger does not keep it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    pub(crate) directory: PathBuf,
    pub(crate) filename: String,
    pub(crate) stdout: bool,
    pub(crate) include: FormatOptions,
    pub(crate) prefix_mode: PrefixMode,
}

impl LoggerConfig {
    /// Describes the log file `filename` in the working directory,
    /// without console output and with an empty prefix.
    #[must_use]
    pub fn new<S: Into<String>>(filename: S) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Specifies a folder for the log file, relative to the working directory.
    ///
    /// Missing folders are created when the logger is created.
    /// An absolute path replaces the working directory.
    #[must_use]
    pub fn directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.directory = directory.into();
        self
    }

    /// Specifies the name of the log file.
    #[must_use]
    pub fn filename<S: Into<String>>(mut self, filename: S) -> Self {
        self.filename = filename.into();
        self
    }

    /// Makes the logger write every line additionally to stdout.
    #[must_use]
    pub fn stdout(mut self, stdout: bool) -> Self {
        self.stdout = stdout;
        self
    }

    /// Specifies the segments of the line prefix.
    #[must_use]
    pub fn include(mut self, include: FormatOptions) -> Self {
        self.include = include;
        self
    }

    /// Specifies when the line prefix is computed; the default is [`PrefixMode::PerLine`].
    #[must_use]
    pub fn prefix_mode(mut self, prefix_mode: PrefixMode) -> Self {
        self.prefix_mode = prefix_mode;
        self
    }

    /// The log file's path, relative to the working directory.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    /// Reads the configuration from a TOML document like
    ///
    /// ```toml
    /// directory = "logs"
    /// filename = "app.log"
    /// stdout = true
    /// include = "datetime | level | shortfile"
    /// prefix_mode = "per_line"
    /// ```
    ///
    /// All keys are optional; missing keys keep their default values.
    ///
    /// # Errors
    ///
    /// [`LoggerError::Toml`] if the document cannot be parsed,
    /// [`LoggerError::Config`] if `include` or `prefix_mode` have unknown values.
    #[cfg(feature = "config_file")]
    #[cfg_attr(docsrs, doc(cfg(feature = "config_file")))]
    pub fn from_toml_str(s: &str) -> Result<Self, LoggerError> {
        let file_format: ConfigFileFormat = toml::from_str(s)?;
        let prefix_mode = match file_format.prefix_mode.as_deref().map(str::trim) {
            None | Some("per_line") => PrefixMode::PerLine,
            Some("frozen") => PrefixMode::Frozen,
            Some(other) => {
                return Err(LoggerError::Config(format!(
                    "unknown prefix mode '{other}'"
                )))
            }
        };
        Ok(Self {
            directory: file_format.directory.unwrap_or_default(),
            filename: file_format.filename.unwrap_or_default(),
            stdout: file_format.stdout.unwrap_or_default(),
            include: file_format
                .include
                .as_deref()
                .unwrap_or_default()
                .parse()?,
            prefix_mode,
        })
    }

    /// Reads the configuration from a TOML file.
    ///
    /// See [`LoggerConfig::from_toml_str`] for the format.
    ///
    /// # Errors
    ///
    /// [`LoggerError::Filesystem`] if the file cannot be read,
    /// otherwise as [`LoggerConfig::from_toml_str`].
    #[cfg(feature = "config_file")]
    #[cfg_attr(docsrs, doc(cfg(feature = "config_file")))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoggerError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| LoggerError::filesystem(path, e))?;
        Self::from_toml_str(&s)
    }
}

#[cfg(feature = "config_file")]
#[derive(Clone, Debug, Default, serde_derive::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFileFormat {
    directory: Option<PathBuf>,
    filename: Option<String>,
    stdout: Option<bool>,
    include: Option<String>,
    prefix_mode: Option<String>,
}
