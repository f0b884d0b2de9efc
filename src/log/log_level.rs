use std::{fmt, str::FromStr};

use thiserror::Error;

/// Defines the severity levels for log events.
///
/// Levels are ordered by severity, so `LogLevel::Warning > LogLevel::Info`
/// and minimum-level filters can compare them directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Designates the most fine-grained, chatty events.
    Verbose,
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    Info,
    /// Designates potentially harmful situations.
    Warning,
    /// Designates error events that might still allow the application to continue running.
    Error,
    /// Designates conditions that should never happen ("what a terrible failure").
    Assert,
}

impl LogLevel {
    /// All levels, least severe first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Assert,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Assert => "ASSERT",
        }
    }

    /// Single-letter priority used by compact formats (`I/tag: msg`).
    #[must_use]
    pub const fn priority_char(self) -> char {
        match self {
            LogLevel::Verbose => 'V',
            LogLevel::Debug => 'D',
            LogLevel::Info => 'I',
            LogLevel::Warning => 'W',
            LogLevel::Error => 'E',
            LogLevel::Assert => 'A',
        }
    }

    /// `Warning` and above go to stderr on console-style destinations.
    #[must_use]
    pub const fn is_problem(self) -> bool {
        matches!(self, LogLevel::Warning | LogLevel::Error | LogLevel::Assert)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a textual level (e.g. from a config file) is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" | "v" | "trace" => Ok(LogLevel::Verbose),
            "debug" | "d" => Ok(LogLevel::Debug),
            "info" | "i" => Ok(LogLevel::Info),
            "warning" | "warn" | "w" => Ok(LogLevel::Warning),
            "error" | "e" => Ok(LogLevel::Error),
            "assert" | "a" | "wtf" => Ok(LogLevel::Assert),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Verbose < LogLevel::Debug);
        assert!(LogLevel::Error < LogLevel::Assert);
        let mut shuffled = vec![LogLevel::Error, LogLevel::Verbose, LogLevel::Assert, LogLevel::Info];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![LogLevel::Verbose, LogLevel::Info, LogLevel::Error, LogLevel::Assert]
        );
    }

    #[test]
    fn parses_names_and_aliases_case_insensitively() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!(" warn ".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
        assert_eq!("wtf".parse::<LogLevel>().unwrap(), LogLevel::Assert);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "loud".parse::<LogLevel>().expect_err("should not parse");
        assert_eq!(err, ParseLevelError("loud".into()));
        assert_eq!(err.to_string(), "unknown log level `loud`");
    }

    #[test]
    fn display_matches_as_str() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string(), level.as_str());
        }
        assert_eq!(LogLevel::Warning.priority_char(), 'W');
    }
}
