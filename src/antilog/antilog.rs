use crate::{
    antilog::antilog_error::AntilogError,
    log::{LogEvent, LogLevel},
};

/// A pluggable log destination.
///
/// The dispatcher asks [`is_enabled_for`](Self::is_enabled_for) first and only
/// builds the event when at least one planted antilog says yes, then lends
/// that one event to every enabled antilog's [`perform_log`](Self::perform_log).
///
/// ### Implementation requirements
/// - `is_enabled_for` must be cheap and free of side effects.
/// - `perform_log` reports ordinary failures through `Err`. A panic is caught
///   by the dispatcher and reported as [`AntilogError::Panicked`]; neither
///   reaches the caller nor stops delivery to other antilogs.
/// - Blocking inside `perform_log` only delays the calling thread.
pub trait Antilog: Send + Sync {
    /// Fast filter. Default: accept everything.
    fn is_enabled_for(&self, _level: LogLevel, _tag: Option<&str>) -> bool {
        true
    }

    /// Emits one event.
    fn perform_log(&self, event: &LogEvent) -> Result<(), AntilogError>;

    /// Name used in failure reports.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
