use std::io::{self, Write};

use crate::{
    antilog::{Antilog, AntilogError, formatter},
    log::{LogEvent, LogLevel},
};

/// Development-time debug channel.
///
/// Writes timestamped lines with the call site to stderr:
///
/// `2025-11-02 02:30:45.120 INFO/peer: connected (src/net/peer.rs:42)`
///
/// When an event has no tag, the call site's file stem is used, and if that
/// is unavailable too, the configured default tag (`"app"` unless changed).
#[derive(Debug, Clone)]
pub struct DebugAntilog {
    default_tag: String,
    min_level: LogLevel,
}

impl Default for DebugAntilog {
    fn default() -> Self {
        Self::new("app")
    }
}

impl DebugAntilog {
    pub fn new(default_tag: impl Into<String>) -> Self {
        Self {
            default_tag: default_tag.into(),
            min_level: LogLevel::Verbose,
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    #[must_use]
    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    /// The exact text `perform_log` writes, without the trailing newline.
    #[must_use]
    pub fn format(&self, event: &LogEvent) -> String {
        formatter::format_detailed(event, &self.default_tag)
    }
}

impl Antilog for DebugAntilog {
    #[inline]
    fn is_enabled_for(&self, level: LogLevel, _tag: Option<&str>) -> bool {
        level >= self.min_level
    }

    fn perform_log(&self, event: &LogEvent) -> Result<(), AntilogError> {
        let line = self.format(event);
        writeln!(io::stderr().lock(), "{line}")?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "debug"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::panic::Location;

    #[test]
    fn explicit_tag_is_used() {
        let dbg = DebugAntilog::default();
        let ev = LogEvent::new(LogLevel::Info, Some("peer"), "connected", None, Location::caller());
        assert!(dbg.format(&ev).contains(" INFO/peer: connected ("));
    }

    #[test]
    fn untagged_event_uses_call_site_file() {
        let dbg = DebugAntilog::new("fallback");
        let ev = LogEvent::new(LogLevel::Debug, None, "tick", None, Location::caller());
        let line = dbg.format(&ev);
        assert!(line.contains(" DEBUG/debug_antilog: tick ("), "got: {line}");
        assert!(!line.contains("fallback"));
    }

    #[test]
    fn min_level_is_honoured() {
        let dbg = DebugAntilog::default().with_min_level(LogLevel::Error);
        assert!(!dbg.is_enabled_for(LogLevel::Warning, None));
        assert!(dbg.is_enabled_for(LogLevel::Error, None));
        assert_eq!(dbg.default_tag(), "app");
    }
}
