//! Error codes of `fanout_logger`.
//!
//! Problems that occur while a log line is written cannot be returned to the code that
//! issued the log call, and they cannot be logged with the failing logger either.
//! `fanout_logger` therefore prints them to `stderr`, tagged with one of the following
//! error codes.
//!
//! ## `Write`
//!
//! Writing the log line to one of the outputs failed.
//!
//! Example:
//!
//! ```text
//! [fanout_logger][ERRCODE::Write] writing log line failed, caused by Os { code: 28, kind: StorageFull, .. }
//! ```
//!
//! The log line was still offered to all other outputs of the logger; only the failing
//! output misses it. Typical root causes are a full disk, or a closed `stdout`.
//!
//! The error is also reported when the `Mutex` that guards the log file is "poisoned",
//! i.e. when a thread panicked while it was writing to the file:
//!
//! ```text
//! [fanout_logger][ERRCODE::Write] writing log line failed, caused by Custom { kind: Other, error: "log file mutex is poisoned" }
//! ```
//!
//! ## `Flush`
//!
//! Explicitly flushing the outputs failed, e.g. with [`log::logger().flush()`](log::Log::flush)
//! after the logger was installed as the global logger.
