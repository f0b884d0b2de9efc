use std::{panic::Location, path::Path, time::SystemTime};

use crate::log::{log_level::LogLevel, throwable::Throwable};

/// Represents a single log call.
///
/// Built once per dispatch, after at least one destination accepted the
/// level, and then lent to every destination by shared reference. An event
/// never changes after construction.
#[derive(Debug, Clone)]
pub struct LogEvent {
    level: LogLevel,
    tag: Option<String>,
    message: String,
    throwable: Option<Throwable>,
    timestamp: SystemTime,
    location: &'static Location<'static>,
}

impl LogEvent {
    /// Creates a new `LogEvent` stamped with the current time.
    ///
    /// # Arguments
    ///
    /// * `level` - The severity `LogLevel` of the event.
    /// * `tag` - Optional tag; destinations derive one from `location` when absent.
    /// * `message` - The message content. Accepts any type that implements `Into<String>`.
    /// * `throwable` - Optional error attached to the call.
    /// * `location` - Call site, usually captured with `#[track_caller]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::panic::Location;
    /// use antilog::{LogEvent, LogLevel};
    ///
    /// let ev = LogEvent::new(
    ///     LogLevel::Info,
    ///     Some("net"),
    ///     "connection established",
    ///     None,
    ///     Location::caller(),
    /// );
    /// assert_eq!(ev.tag(), Some("net"));
    /// ```
    pub fn new(
        level: LogLevel,
        tag: Option<&str>,
        message: impl Into<String>,
        throwable: Option<Throwable>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            level,
            tag: tag.map(str::to_owned),
            message: message.into(),
            throwable,
            timestamp: SystemTime::now(),
            location,
        }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn throwable(&self) -> Option<&Throwable> {
        self.throwable.as_ref()
    }

    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// The explicit tag, or else the file stem of the call site
    /// (`src/net/peer.rs` -> `peer`).
    #[must_use]
    pub fn tag_or_caller(&self) -> Option<&str> {
        self.tag().or_else(|| {
            Path::new(self.location.file())
                .file_stem()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty())
        })
    }
}
