// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
//! A small logger that writes leveled, prefixed text lines to stdout and/or to a file.
//!
//! Create a [`Logger`] with an optional [`LoggerConfig`], and write with one of its
//! five severity writers:
//!
//! ```rust
//! use fanout_logger::{logf, FormatOptions, Logger, LoggerConfig};
//!
//! let logger = Logger::try_new(Some(
//!     LoggerConfig::new("app.log")
//!         .directory("logs")
//!         .stdout(true)
//!         .include(FormatOptions::LEVEL),
//! ))
//! .unwrap_or_else(|e| panic!("Logger initialization failed with {e}"));
//!
//! logger.info().println("started");
//! logf!(logger.debug(), "listening on port {}", 8080);
//! ```
//!
//! writes
//!
//! ```text
//! INFO started
//! DEBUG listening on port 8080
//! ```
//!
//! to stdout and to `./logs/app.log`.
//!
//! See
//!
//! * [`FormatOptions`] for the segments of the line prefix
//!   (timestamp, level, and the source location of the log call),
//! * [`PrefixMode`] for when the prefix is computed,
//! * the module [`writers`] for the outputs and for how each line is fanned out to all of them,
//! * [`Logger::install`] for using the logger as backend of the [`log`] facade,
//! * the module [`error_info`] for the error messages that `fanout_logger` prints to stderr
//!   when writing a line fails.
//!
//! The logger does not filter by level and does not rotate its file:
//! every call of a severity writer results in one synchronous write to each output.

mod deferred_now;
mod format_options;
mod logger;
mod logger_config;
mod logger_error;
mod severity;
mod util;

pub mod error_info;
pub mod prefix;
pub mod writers;

pub use crate::deferred_now::{DeferredNow, TS_FORMAT};
pub use crate::format_options::FormatOptions;
pub use crate::logger::{new_logger, Logger, SeverityWriter};
pub use crate::logger_config::{LoggerConfig, PrefixMode};
pub use crate::logger_error::LoggerError;
pub use crate::prefix::CallSite;
pub use crate::severity::Severity;
