use std::io::{self, Write};

use crate::{
    antilog::{Antilog, AntilogError, formatter},
    log::{LogEvent, LogLevel},
};

/// Writes `LEVEL/tag: message` lines to the process console.
///
/// `Warning` and above go to stderr, everything else to stdout. Each line is
/// written while holding the stream lock so concurrent callers never
/// interleave within a line.
#[derive(Debug, Clone)]
pub struct ConsoleAntilog {
    min_level: LogLevel,
}

impl Default for ConsoleAntilog {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Verbose,
        }
    }
}

impl ConsoleAntilog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style minimum level.
    #[must_use]
    pub fn with_min_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Antilog for ConsoleAntilog {
    #[inline]
    fn is_enabled_for(&self, level: LogLevel, _tag: Option<&str>) -> bool {
        level >= self.min_level
    }

    fn perform_log(&self, event: &LogEvent) -> Result<(), AntilogError> {
        let line = formatter::format_compact(event);
        if event.level().is_problem() {
            writeln!(io::stderr().lock(), "{line}")?;
        } else {
            writeln!(io::stdout().lock(), "{line}")?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
