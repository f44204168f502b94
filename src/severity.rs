/// The five severities a [`Logger`](crate::Logger) writes with.
///
/// A severity carries only its label. There is no ordering and no filtering:
/// every severity writer always emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Information for debugging.
    Debug,
    /// General informational messages.
    Info,
    /// Warnings that are not critical.
    Warn,
    /// Errors that require attention.
    Error,
    /// Detailed trace information.
    Trace,
}

impl Severity {
    /// All severities, in the order in which the logger wires its writers.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Trace,
    ];

    /// The label that is written into the line prefix.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Trace => "TRACE",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info => Severity::Info,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Trace,
        }
    }
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => log::Level::Error,
            Severity::Warn => log::Level::Warn,
            Severity::Info => log::Level::Info,
            Severity::Debug => log::Level::Debug,
            Severity::Trace => log::Level::Trace,
        }
    }
}
