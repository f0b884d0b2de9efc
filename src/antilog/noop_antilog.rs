use crate::{
    antilog::{Antilog, AntilogError},
    log::{LogEvent, LogLevel},
};

/// Discards everything. Disabled for every level, so planting it never
/// causes a message to be formatted.
#[derive(Debug, Clone, Default)]
pub struct NoopAntilog;

impl Antilog for NoopAntilog {
    #[inline]
    fn is_enabled_for(&self, _level: LogLevel, _tag: Option<&str>) -> bool {
        false
    }

    #[inline]
    fn perform_log(&self, _event: &LogEvent) -> Result<(), AntilogError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
