//! Assembly of the line prefix.
//!
//! The prefix is built by conditionally concatenating, in this order,
//!
//! 1. the timestamp (`YYYY-MM-DD HH:MM:SS`) and a space, if [`FormatOptions::DATE_TIME`] is set,
//! 2. the severity label and a space, if [`FormatOptions::LEVEL`] is set,
//! 3. `file:line` and a space, if [`FormatOptions::SHORT_FILE`] or [`FormatOptions::LONG_FILE`]
//!    is set; the file is reduced to its base name if `SHORT_FILE` is set.
//!
//! With no flag set, the prefix is empty.
use crate::{DeferredNow, FormatOptions, Severity};
use std::{io::Write, panic::Location, path::Path};

/// The source location of a log call.
///
/// Is usually captured with `#[track_caller]` at the log call expression,
/// see [`CallSite::caller`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Creates a call site explicitly.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The location of the caller of the function this is invoked in,
    /// following the chain of `#[track_caller]` functions.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// The source file, as given by the compiler.
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The line number.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The base name of the source file.
    #[must_use]
    pub fn short_file(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or(self.file)
    }

    /// Builds the call site from a `log::Record`, if the record carries a static location.
    #[must_use]
    pub fn from_record(record: &log::Record<'_>) -> Option<Self> {
        match (record.file_static(), record.line()) {
            (Some(file), Some(line)) => Some(Self { file, line }),
            _ => None,
        }
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Writes the prefix for a log line into `w`.
///
/// The clock is only read if `options` contains [`FormatOptions::DATE_TIME`].
/// If `call_site` is `None`, the `file:line` segment is silently left out.
///
/// # Errors
///
/// Only the errors of `w`.
pub fn write_prefix(
    w: &mut dyn Write,
    options: FormatOptions,
    severity: Severity,
    now: &mut DeferredNow,
    call_site: Option<CallSite>,
) -> std::io::Result<()> {
    if options.contains(FormatOptions::DATE_TIME) {
        write!(w, "{} ", now.format_for_prefix())?;
    }
    if options.contains(FormatOptions::LEVEL) {
        write!(w, "{} ", severity.label())?;
    }
    if options.wants_call_site() {
        if let Some(call_site) = call_site {
            let file = if options.contains(FormatOptions::SHORT_FILE) {
                call_site.short_file()
            } else {
                call_site.file()
            };
            write!(w, "{file}:{} ", call_site.line())?;
        }
    }
    Ok(())
}

/// Returns the prefix for a log line as String.
///
/// See [`write_prefix`].
#[must_use]
pub fn build_prefix(
    options: FormatOptions,
    severity: Severity,
    now: &mut DeferredNow,
    call_site: Option<CallSite>,
) -> String {
    let mut buf = Vec::<u8>::with_capacity(48);
    // writing into a Vec does not fail
    write_prefix(&mut buf, options, severity, now, call_site).ok();
    String::from_utf8_lossy(&buf).into_owned()
}
