use std::io;

use thiserror::Error;

/// Failures raised by an antilog while emitting an event.
///
/// None of these ever reach the code that logged; the dispatcher routes them
/// to its fallback channel.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AntilogError {
    /// Writing to the underlying stream or file failed.
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    /// A bounded queue was full and the event was dropped.
    #[error("queue full, event dropped")]
    QueueFull,

    /// The background worker is gone.
    #[error("worker closed")]
    Closed,

    /// A lock guarding the destination was poisoned by an earlier panic.
    #[error("lock poisoned")]
    Poisoned,

    /// The antilog panicked; the panic was caught by the dispatcher.
    #[error("antilog `{antilog}` panicked: {info}")]
    Panicked {
        /// Name of the antilog that panicked.
        antilog: &'static str,
        /// Panic payload rendered as text.
        info: String,
    },

    /// Any other destination-specific failure.
    #[error("{0}")]
    Other(String),
}

impl AntilogError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use antilog::AntilogError;
    ///
    /// assert_eq!(AntilogError::QueueFull.as_label(), "antilog_queue_full");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            AntilogError::Io(_) => "antilog_io",
            AntilogError::QueueFull => "antilog_queue_full",
            AntilogError::Closed => "antilog_closed",
            AntilogError::Poisoned => "antilog_poisoned",
            AntilogError::Panicked { .. } => "antilog_panicked",
            AntilogError::Other(_) => "antilog_other",
        }
    }
}
