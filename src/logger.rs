use crate::{
    prefix::{write_prefix, CallSite},
    util::{eprint_err, terminate_line, write_buffered, ErrorCode},
    writers::{ConsoleWriter, FileWriter, LineWriter, MultiSink},
    DeferredNow, FormatOptions, LoggerConfig, LoggerError, PrefixMode, Severity,
};
use std::{
    fmt::{self, Display},
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Writes prefixed log lines with five independent severity writers.
///
/// Create a `Logger` with [`Logger::try_new`] (or [`new_logger`](crate::new_logger)),
/// then use its severity writers:
///
/// ```rust
/// use fanout_logger::{logf, FormatOptions, Logger, LoggerConfig};
///
/// let logger = Logger::try_new(Some(
///     LoggerConfig::new("app.log")
///         .directory("log_files")
///         .stdout(true)
///         .include(FormatOptions::DATE_TIME | FormatOptions::LEVEL | FormatOptions::SHORT_FILE),
/// ))
/// .unwrap_or_else(|e| panic!("Logger initialization failed with {e}"));
///
/// logger.info().println("server started");
/// logf!(logger.warn(), "{} of {} workers are busy", 7, 8);
/// ```
///
/// All writers share one [`MultiSink`], so every line goes to all configured outputs.
/// There is no level filter: each writer always writes.
///
/// A `Logger` can also serve as the backend of the [`log`] facade, see [`Logger::install`].
#[derive(Debug)]
pub struct Logger {
    debug: SeverityWriter,
    info: SeverityWriter,
    warn: SeverityWriter,
    error: SeverityWriter,
    trace: SeverityWriter,
    o_file_path: Option<PathBuf>,
}

impl Logger {
    /// Creates a logger.
    ///
    /// Without configuration, the logger writes to stdout only,
    /// with the prefix options [`FormatOptions::DEFAULT`]; this never fails.
    ///
    /// With configuration, the logger appends to the file
    /// `<current directory>/<directory>/<filename>`,
    /// and additionally writes to stdout if [`LoggerConfig::stdout`] was set.
    ///
    /// # Errors
    ///
    /// [`LoggerError::Config`] if the filename is empty,
    /// [`LoggerError::Filesystem`] if the current directory cannot be determined,
    /// if the log file's directory cannot be created, or if the log file cannot be opened.
    #[track_caller]
    pub fn try_new(config: Option<LoggerConfig>) -> Result<Self, LoggerError> {
        match config {
            None => Ok(Self::console_only(ConsoleWriter::stdout())),
            Some(config) => {
                let working_dir =
                    std::env::current_dir().map_err(|e| LoggerError::filesystem(".", e))?;
                Self::with_file(config, &working_dir, ConsoleWriter::stdout())
            }
        }
    }

    /// Like [`Logger::try_new`], but resolves the log file relative to `working_dir`
    /// rather than to the current directory of the process.
    ///
    /// # Errors
    ///
    /// See [`Logger::try_new`].
    #[track_caller]
    pub fn try_new_in(
        config: Option<LoggerConfig>,
        working_dir: &Path,
    ) -> Result<Self, LoggerError> {
        Self::try_new_with_console(config, working_dir, ConsoleWriter::stdout())
    }

    /// Like [`Logger::try_new_in`], but uses `console` rather than stdout for the console output.
    ///
    /// Use e.g. [`ConsoleWriter::stderr`] to write to stderr,
    /// or a [`BufferWriter`](crate::writers::BufferWriter) to capture the console output.
    ///
    /// # Errors
    ///
    /// See [`Logger::try_new`].
    #[track_caller]
    pub fn try_new_with_console<W: LineWriter + 'static>(
        config: Option<LoggerConfig>,
        working_dir: &Path,
        console: W,
    ) -> Result<Self, LoggerError> {
        match config {
            None => Ok(Self::console_only(console)),
            Some(config) => Self::with_file(config, working_dir, console),
        }
    }

    /// Creates a logger that writes into the given sink, with a per-line prefix.
    #[must_use]
    pub fn with_sink(sink: MultiSink, options: FormatOptions) -> Self {
        Self::wire(sink, options, None, None)
    }

    fn console_only<W: LineWriter + 'static>(console: W) -> Self {
        Self::with_sink(MultiSink::new().with(console), FormatOptions::DEFAULT)
    }

    #[track_caller]
    fn with_file<W: LineWriter + 'static>(
        config: LoggerConfig,
        working_dir: &Path,
        console: W,
    ) -> Result<Self, LoggerError> {
        let LoggerConfig {
            directory,
            filename,
            stdout,
            include,
            prefix_mode,
        } = config;
        if filename.is_empty() {
            return Err(LoggerError::Config("filename is required".to_string()));
        }
        let file_writer = FileWriter::try_new(working_dir.join(directory).join(filename))?;
        let file_path = file_writer.path().to_path_buf();

        let mut sink = MultiSink::new();
        if stdout {
            sink.add(Box::new(console));
        }
        sink.add(Box::new(file_writer));

        let o_frozen_site = match prefix_mode {
            PrefixMode::PerLine => None,
            PrefixMode::Frozen => Some(CallSite::caller()),
        };
        Ok(Self::wire(sink, include, o_frozen_site, Some(file_path)))
    }

    // Binds the five severity writers to the shared sink.
    fn wire(
        sink: MultiSink,
        options: FormatOptions,
        o_frozen_site: Option<CallSite>,
        o_file_path: Option<PathBuf>,
    ) -> Self {
        let sink = Arc::new(sink);
        // one timestamp for all frozen prefixes
        let mut now = DeferredNow::new();
        let mut writer = |severity: Severity| {
            let o_frozen_prefix = o_frozen_site.map(|site| {
                let mut prefix = Vec::<u8>::with_capacity(48);
                write_prefix(&mut prefix, options, severity, &mut now, Some(site)).ok();
                Arc::<[u8]>::from(prefix)
            });
            SeverityWriter {
                severity,
                options,
                o_frozen_prefix,
                sink: Arc::clone(&sink),
            }
        };
        Self {
            debug: writer(Severity::Debug),
            info: writer(Severity::Info),
            warn: writer(Severity::Warn),
            error: writer(Severity::Error),
            trace: writer(Severity::Trace),
            o_file_path,
        }
    }

    /// The writer for [`Severity::Debug`].
    #[must_use]
    pub fn debug(&self) -> &SeverityWriter {
        &self.debug
    }

    /// The writer for [`Severity::Info`].
    #[must_use]
    pub fn info(&self) -> &SeverityWriter {
        &self.info
    }

    /// The writer for [`Severity::Warn`].
    #[must_use]
    pub fn warn(&self) -> &SeverityWriter {
        &self.warn
    }

    /// The writer for [`Severity::Error`].
    #[must_use]
    pub fn error(&self) -> &SeverityWriter {
        &self.error
    }

    /// The writer for [`Severity::Trace`].
    #[must_use]
    pub fn trace(&self) -> &SeverityWriter {
        &self.trace
    }

    /// The writer for the given severity.
    #[must_use]
    pub fn writer(&self, severity: Severity) -> &SeverityWriter {
        match severity {
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Warn => &self.warn,
            Severity::Error => &self.error,
            Severity::Trace => &self.trace,
        }
    }

    /// The path of the log file, if the logger writes to a file.
    #[must_use]
    pub fn log_file_path(&self) -> Option<&Path> {
        self.o_file_path.as_deref()
    }

    /// Flushes all outputs.
    ///
    /// Errors are not returned, but printed to stderr.
    pub fn flush(&self) {
        self.info
            .sink
            .flush()
            .unwrap_or_else(|e| eprint_err(ErrorCode::Flush, "flushing failed", &e));
    }

    /// Makes this logger the backend of the [`log`] facade.
    ///
    /// The maximum level of the facade is set to `Trace`, so that every `log` macro call
    /// reaches the severity writer that corresponds to its level.
    /// The record's source location is used for the `file:line` segment.
    ///
    /// # Errors
    ///
    /// [`LoggerError::Log`] if a global logger was already installed.
    pub fn install(self) -> Result<(), LoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.writer(record.level().into())
            .print_at(CallSite::from_record(record), *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

/// Writes lines with the label of one severity into the logger's sink.
///
/// The line prefix is computed for each line, unless the logger was created with
/// [`PrefixMode::Frozen`]. Write errors are not returned; they are printed to stderr.
#[derive(Clone, Debug)]
pub struct SeverityWriter {
    severity: Severity,
    options: FormatOptions,
    o_frozen_prefix: Option<Arc<[u8]>>,
    sink: Arc<MultiSink>,
}

impl SeverityWriter {
    /// The severity of this writer.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The prefix options of this writer.
    #[must_use]
    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Writes a formatted line.
    ///
    /// A newline is appended, unless the formatted text already ends with one.
    /// Usually called via the [`logf!`](crate::logf) macro.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.print_at(Some(CallSite::caller()), args);
    }

    /// Writes `msg` as a line.
    ///
    /// Like [`SeverityWriter::printf`], a newline is appended only if `msg` does not
    /// already end with one.
    #[track_caller]
    pub fn print<T: Display + ?Sized>(&self, msg: &T) {
        self.emit(Some(CallSite::caller()), |buf| {
            write!(buf, "{msg}")?;
            terminate_line(buf)
        });
    }

    /// Writes `msg` followed by a newline.
    #[track_caller]
    pub fn println<T: Display + ?Sized>(&self, msg: &T) {
        self.emit(Some(CallSite::caller()), |buf| {
            write!(buf, "{msg}")?;
            buf.write_all(b"\n")
        });
    }

    /// Writes a formatted line with an explicitly given call site.
    ///
    /// Behaves like [`SeverityWriter::printf`] otherwise.
    pub fn print_at(&self, call_site: Option<CallSite>, args: fmt::Arguments<'_>) {
        self.emit(call_site, |buf| {
            buf.write_fmt(args)?;
            terminate_line(buf)
        });
    }

    fn emit<F>(&self, call_site: Option<CallSite>, message: F)
    where
        F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    {
        write_buffered(
            |buf| {
                match self.o_frozen_prefix {
                    Some(ref prefix) => buf.write_all(prefix)?,
                    None => write_prefix(
                        buf,
                        self.options,
                        self.severity,
                        &mut DeferredNow::new(),
                        call_site,
                    )?,
                }
                message(buf)
            },
            |line| self.sink.write_line(line),
        )
        .unwrap_or_else(|e| eprint_err(ErrorCode::Write, "writing log line failed", &e));
    }
}

/// Writes a formatted line with the given [`SeverityWriter`].
///
/// ```rust
/// # use fanout_logger::{logf, Logger};
/// let logger = Logger::try_new(None).unwrap();
/// logf!(logger.error(), "connection to {} lost after {} retries", "db-1", 3);
/// ```
#[macro_export]
macro_rules! logf {
    ($writer:expr, $($arg:tt)+) => {
        $writer.printf(::std::format_args!($($arg)+))
    };
}

/// Creates a logger; same as [`Logger::try_new`].
///
/// # Errors
///
/// See [`Logger::try_new`].
#[track_caller]
pub fn new_logger(config: Option<LoggerConfig>) -> Result<Logger, LoggerError> {
    Logger::try_new(config)
}

#[cfg(test)]
mod test {
    use super::Logger;
    use crate::{
        writers::{BufferWriter, MultiSink},
        FormatOptions, LoggerConfig, PrefixMode, Severity, TS_FORMAT,
    };
    use std::{
        fmt,
        panic::{catch_unwind, AssertUnwindSafe},
        path::Path,
        time::Duration,
    };

    fn buffered(options: FormatOptions) -> (Logger, BufferWriter) {
        let buffer = BufferWriter::new();
        let logger = Logger::with_sink(MultiSink::new().with(buffer.clone()), options);
        (logger, buffer)
    }

    #[test]
    fn test_printf_and_println() {
        let (logger, buffer) = buffered(FormatOptions::LEVEL);
        logger.info().println("started");
        logf!(logger.warn(), "{} of {} workers busy", 7, 8);
        logf!(logger.error(), "already terminated\n");
        logger.debug().println("verbatim\n");

        assert_eq!(
            buffer.contents().unwrap(),
            "INFO started\n\
             WARN 7 of 8 workers busy\n\
             ERROR already terminated\n\
             DEBUG verbatim\n\n"
        );
    }

    #[test]
    fn test_print_terminates_line_once() {
        let (logger, buffer) = buffered(FormatOptions::LEVEL);
        logger.info().print("ready");
        logger.info().print("done\n");
        logger.info().print(&42);
        assert_eq!(buffer.contents().unwrap(), "INFO ready\nINFO done\nINFO 42\n");
    }

    struct PanickingDisplay;
    impl fmt::Display for PanickingDisplay {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("partial")?;
            panic!("Display implementation fails");
        }
    }

    #[test]
    fn test_panic_while_formatting_leaves_no_partial_line() {
        let (logger, buffer) = buffered(FormatOptions::LEVEL);
        catch_unwind(AssertUnwindSafe(|| logger.info().println(&PanickingDisplay))).unwrap_err();
        assert_eq!(buffer.contents().unwrap(), "");

        // same thread, so the same thread-local line buffer
        logger.warn().println("next");
        assert_eq!(buffer.contents().unwrap(), "WARN next\n");
    }

    #[test]
    fn test_writers_carry_their_labels() {
        let (logger, buffer) = buffered(FormatOptions::LEVEL);
        for severity in Severity::ALL {
            let writer = logger.writer(severity);
            assert_eq!(writer.severity(), severity);
            writer.println("x");
        }
        assert_eq!(
            buffer.lines().unwrap(),
            vec!["DEBUG x", "INFO x", "WARN x", "ERROR x", "TRACE x"]
        );
    }

    #[test]
    fn test_call_site_of_log_call() {
        let (logger, buffer) = buffered(FormatOptions::SHORT_FILE);
        let line = line!() + 1;
        logger.trace().println("here");
        logf!(logger.trace(), "and {}", "there");
        assert_eq!(
            buffer.lines().unwrap(),
            vec![
                format!("logger.rs:{line} here"),
                format!("logger.rs:{} and there", line + 1)
            ]
        );
    }

    #[test]
    fn test_frozen_prefix() {
        let dir = temp_dir::TempDir::new().unwrap();
        let console = BufferWriter::new();
        let line = line!() + 1;
        let logger = Logger::try_new_with_console(
            Some(
                LoggerConfig::new("frozen.log")
                    .stdout(true)
                    .include(FormatOptions::LEVEL | FormatOptions::SHORT_FILE)
                    .prefix_mode(PrefixMode::Frozen),
            ),
            dir.path(),
            console.clone(),
        )
        .unwrap();

        logger.info().println("one");
        logger.info().println("two");
        assert_eq!(
            console.lines().unwrap(),
            vec![
                format!("INFO logger.rs:{line} one"),
                format!("INFO logger.rs:{line} two")
            ]
        );
    }

    fn timestamp_logger(
        working_dir: &Path,
        prefix_mode: PrefixMode,
    ) -> (Logger, BufferWriter) {
        let console = BufferWriter::new();
        let logger = Logger::try_new_with_console(
            Some(
                LoggerConfig::new("ts.log")
                    .stdout(true)
                    .include(FormatOptions::DATE_TIME | FormatOptions::LEVEL)
                    .prefix_mode(prefix_mode),
            ),
            working_dir,
            console.clone(),
        )
        .unwrap();
        (logger, console)
    }

    fn now_formatted() -> String {
        chrono::Local::now().format(TS_FORMAT).to_string()
    }

    fn wait_for_next_second() {
        let start = now_formatted();
        while now_formatted() == start {
            std::thread::sleep(Duration::from_millis(20));
        }
    }

    #[test]
    fn test_frozen_timestamp_vs_per_line_timestamp() {
        let frozen_dir = temp_dir::TempDir::new().unwrap();
        let per_line_dir = temp_dir::TempDir::new().unwrap();

        let before = now_formatted();
        let (frozen, frozen_console) = timestamp_logger(frozen_dir.path(), PrefixMode::Frozen);
        let (per_line, per_line_console) =
            timestamp_logger(per_line_dir.path(), PrefixMode::PerLine);
        let after = now_formatted();

        wait_for_next_second();
        frozen.info().println("one");
        per_line.info().println("one");
        wait_for_next_second();
        frozen.info().println("two");
        per_line.info().println("two");

        let ts_len = before.len();
        let frozen_lines = frozen_console.lines().unwrap();
        let frozen_ts: Vec<&str> = frozen_lines.iter().map(|l| &l[..ts_len]).collect();
        assert_eq!(frozen_ts[0], frozen_ts[1]);
        assert!(
            frozen_ts[0] == before || frozen_ts[0] == after,
            "{} is not the creation time",
            frozen_ts[0]
        );
        assert!(frozen_lines[0].ends_with(" INFO one"));
        assert!(frozen_lines[1].ends_with(" INFO two"));

        let per_line_lines = per_line_console.lines().unwrap();
        let per_line_ts: Vec<&str> = per_line_lines.iter().map(|l| &l[..ts_len]).collect();
        assert_ne!(per_line_ts[0], per_line_ts[1]);
        assert!(per_line_ts[0] > after.as_str());
        assert!(per_line_lines[1].ends_with(" INFO two"));
    }

    #[test]
    fn test_no_config_writes_only_to_console() {
        let dir = temp_dir::TempDir::new().unwrap();
        let console = BufferWriter::new();
        let logger = Logger::try_new_with_console(None, dir.path(), console.clone()).unwrap();
        assert!(logger.log_file_path().is_none());
        assert_eq!(logger.info().options(), FormatOptions::DEFAULT);

        logger.info().println("hello");
        let lines = console.lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" INFO logger.rs:"), "{}", lines[0]);
        assert!(lines[0].ends_with(" hello"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
