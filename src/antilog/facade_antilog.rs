use crate::{
    antilog::{Antilog, AntilogError},
    log::{LogEvent, LogLevel, error_chain},
};

/// Target used when an event carries no tag.
pub const DEFAULT_TARGET: &str = "antilog";

/// Bridges antilog events into the `log` crate facade, so whatever logger
/// the host application installed (`env_logger`, ...) receives them.
///
/// The tag becomes the `log` target.
#[derive(Debug, Clone)]
pub struct FacadeAntilog {
    min_level: LogLevel,
}

impl Default for FacadeAntilog {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Verbose,
        }
    }
}

impl FacadeAntilog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }
}

/// `Assert` has no `log` counterpart and maps to `Error`.
#[must_use]
pub fn to_facade_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Verbose => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warning => log::Level::Warn,
        LogLevel::Error | LogLevel::Assert => log::Level::Error,
    }
}

impl Antilog for FacadeAntilog {
    fn is_enabled_for(&self, level: LogLevel, tag: Option<&str>) -> bool {
        level >= self.min_level
            && log::log_enabled!(target: tag.unwrap_or(DEFAULT_TARGET), to_facade_level(level))
    }

    fn perform_log(&self, event: &LogEvent) -> Result<(), AntilogError> {
        let target = event.tag().unwrap_or(DEFAULT_TARGET);
        let lvl = to_facade_level(event.level());
        match event.throwable() {
            Some(err) => {
                let chain = error_chain(err.as_ref()).join(": ");
                log::log!(target: target, lvl, "{}: {}", event.message(), chain);
            }
            None => log::log!(target: target, lvl, "{}", event.message()),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "facade"
    }
}
