//! Contains the trait [`LineWriter`] for the outputs of a [`Logger`](crate::Logger),
//! the concrete outputs for the console ([`ConsoleWriter`]), for files ([`FileWriter`])
//! and for memory ([`BufferWriter`]),
//! and the [`MultiSink`] that duplicates each line to any number of outputs.
//!
//! A `Logger` always writes into one `MultiSink`. Which outputs it contains is derived
//! from the [`LoggerConfig`](crate::LoggerConfig):
//!
//! * without configuration, only the console,
//! * with configuration, the log file, and additionally the console if
//!   [`LoggerConfig::stdout`](crate::LoggerConfig::stdout) is set.
//!
//! You can also assemble a `MultiSink` yourself, with your own implementations of
//! `LineWriter`, and hand it to [`Logger::with_sink`](crate::Logger::with_sink).
//!
//! ```rust
//! use fanout_logger::{
//!     writers::{BufferWriter, ConsoleWriter, MultiSink},
//!     FormatOptions, Logger,
//! };
//!
//! let memory = BufferWriter::new();
//! let sink = MultiSink::new()
//!     .with(ConsoleWriter::stderr())
//!     .with(memory.clone());
//! let logger = Logger::with_sink(sink, FormatOptions::LEVEL);
//!
//! logger.warn().println("disk usage above 90%");
//! assert_eq!(memory.contents().unwrap(), "WARN disk usage above 90%\n");
//! ```
mod buffer_writer;
mod console_writer;
mod file_writer;
mod line_writer;
mod multi_sink;

pub use self::buffer_writer::BufferWriter;
pub use self::console_writer::ConsoleWriter;
pub use self::file_writer::FileWriter;
pub use self::line_writer::LineWriter;
pub use self::multi_sink::MultiSink;
