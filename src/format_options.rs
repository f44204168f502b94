use crate::LoggerError;
use std::{
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign},
    str::FromStr,
};

/// Set of independently combinable flags that decide which segments
/// the line prefix contains.
///
/// The segments are always written in the same order: timestamp, level, call site.
/// If both [`SHORT_FILE`](Self::SHORT_FILE) and [`LONG_FILE`](Self::LONG_FILE) are set,
/// the short form wins.
///
/// ```rust
/// use fanout_logger::FormatOptions;
///
/// let options = FormatOptions::DATE_TIME | FormatOptions::LEVEL;
/// assert!(options.contains(FormatOptions::LEVEL));
/// assert!(!options.contains(FormatOptions::SHORT_FILE));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FormatOptions(u32);

impl FormatOptions {
    /// Include date and time, as `YYYY-MM-DD HH:MM:SS`.
    pub const DATE_TIME: Self = Self(1);
    /// Include the severity label.
    pub const LEVEL: Self = Self(1 << 1);
    /// Include the base name of the caller's source file, and the line number.
    pub const SHORT_FILE: Self = Self(1 << 2);
    /// Include the full path of the caller's source file, and the line number.
    pub const LONG_FILE: Self = Self(1 << 3);

    /// The options used by a logger that is created without configuration.
    pub const DEFAULT: Self = Self(Self::DATE_TIME.0 | Self::LEVEL.0 | Self::SHORT_FILE.0);

    const ALL_BITS: u32 = 0b1111;

    /// No flag set; the prefix is empty and lines are written raw.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates the set from its bit representation; unknown bits are dropped.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    /// The bit representation.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if all flags of `other` are set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if at least one flag of `other` is set in `self`.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub(crate) fn wants_call_site(self) -> bool {
        self.intersects(Self::SHORT_FILE | Self::LONG_FILE)
    }

    fn names(self) -> impl Iterator<Item = &'static str> {
        [
            (Self::DATE_TIME, "datetime"),
            (Self::LEVEL, "level"),
            (Self::SHORT_FILE, "shortfile"),
            (Self::LONG_FILE, "longfile"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
    }
}

impl BitOr for FormatOptions {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
impl BitOrAssign for FormatOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
impl BitAnd for FormatOptions {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for FormatOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// Parses a list of flag names, separated by `|` or `,`.
///
/// Accepted names (case-insensitive): `datetime` or `timestamp`, `level` or `loglevel`,
/// `shortfile`, `longfile`, and `none` for the empty set.
impl FromStr for FormatOptions {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Self::empty();
        for name in s
            .split(['|', ','])
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            options |= match name.to_ascii_lowercase().as_str() {
                "datetime" | "timestamp" => Self::DATE_TIME,
                "level" | "loglevel" => Self::LEVEL,
                "shortfile" => Self::SHORT_FILE,
                "longfile" => Self::LONG_FILE,
                "none" => Self::empty(),
                _ => {
                    return Err(LoggerError::Config(format!(
                        "unknown format option '{name}'"
                    )))
                }
            };
        }
        Ok(options)
    }
}
