use chrono::{DateTime, Local};

/// Format of the timestamp segment of the line prefix, e.g. `2024-03-17 09:05:42`.
pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Deferred timestamp creation.
///
/// Is used to ensure that a log line that is sent to multiple outputs
/// always uses the same timestamp, and that the clock is not read at all
/// if the configured prefix has no timestamp.
#[derive(Debug)]
pub struct DeferredNow(Option<DateTime<Local>>);
impl Default for DeferredNow {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DeferredNow {
    /// Constructs a new instance, but does not generate the timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self(None)
    }

    /// Constructs an instance with a fixed timestamp.
    ///
    /// Useful in tests, and when a line should carry a timestamp that was taken earlier.
    #[must_use]
    pub fn new_from_datetime(dt: DateTime<Local>) -> Self {
        Self(Some(dt))
    }

    /// Retrieve the timestamp.
    ///
    /// Requires mutability because the first caller will generate the timestamp.
    pub fn now(&'a mut self) -> &'a DateTime<Local> {
        self.0.get_or_insert_with(Local::now)
    }

    /// Convert into a formatted String.
    ///
    /// See [`chrono::format::strftime`] for the syntax of `fmt`.
    pub fn format(&'a mut self, fmt: &str) -> String {
        self.now().format(fmt).to_string()
    }

    /// The timestamp in the format that is used in the line prefix.
    pub fn format_for_prefix(&'a mut self) -> String {
        self.format(TS_FORMAT)
    }
}
