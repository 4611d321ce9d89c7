//! Severity levels recognized by the logging façade.

use std::{fmt, str::FromStr};

use crate::LoggerError;

/// Severity of a log record.
///
/// Ordered from least to most severe; a [`Logger`][crate::Logger] emits a
/// record when its level is at or above the configured threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Diagnostic detail, usually only of interest during development.
    Debug,

    /// Routine operational messages.
    Info,

    /// Something unexpected that the application can recover from.
    Warning,

    /// A failure of some operation.
    Error,

    /// A failure severe enough to question the viability of the process.
    Critical,
}

impl Level {
    /// The canonical upper-case name of the level, as rendered in log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("DEBUG") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("INFO") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("WARNING") {
            Ok(Self::Warning)
        } else if s.eq_ignore_ascii_case("ERROR") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("CRITICAL") {
            Ok(Self::Critical)
        } else {
            Err(LoggerError::UnrecognizedLevel(s.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_level_names() {
        assert_eq!("DEBUG".parse::<Level>().ok(), Some(Level::Debug));
        assert_eq!("info".parse::<Level>().ok(), Some(Level::Info));
        assert_eq!("Warning".parse::<Level>().ok(), Some(Level::Warning));
        assert_eq!("ERROR".parse::<Level>().ok(), Some(Level::Error));
        assert_eq!("critical".parse::<Level>().ok(), Some(Level::Critical));
    }

    #[test]
    fn rejects_unknown_level_names() {
        let result = "VERBOSE".parse::<Level>();
        assert!(matches!(
            result,
            Err(LoggerError::UnrecognizedLevel(name)) if name == "VERBOSE"
        ));
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn display_matches_canonical_names() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Critical.to_string(), "CRITICAL");
    }
}
