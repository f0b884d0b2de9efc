//! Line formats shared by the built-in antilogs.
//!
//! - compact: `INFO/net: connected`
//! - detailed: `2025-11-02 02:30:45.120 INFO/net: connected (src/net/peer.rs:42)`
//!
//! An attached throwable adds one indented line per element of its error
//! chain, each prefixed `caused by:`.

use std::{fmt::Write as _, time::SystemTime};

use chrono::{DateTime, Local};

use crate::log::{LogEvent, error_chain};

/// `yyyy-mm-dd HH:MM:SS.mmm` in local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[must_use]
pub fn format_timestamp(ts: SystemTime) -> String {
    DateTime::<Local>::from(ts).format(TIMESTAMP_FORMAT).to_string()
}

/// `LEVEL/tag: message`, or `LEVEL: message` when no tag can be derived.
#[must_use]
pub fn format_compact(event: &LogEvent) -> String {
    let mut out = head(event, event.tag_or_caller());
    push_throwable(&mut out, event);
    out
}

/// Timestamped line with call site; `default_tag` is used when the event has
/// neither a tag nor a usable call-site file name.
#[must_use]
pub fn format_detailed(event: &LogEvent, default_tag: &str) -> String {
    let tag = event.tag_or_caller().unwrap_or(default_tag);
    let loc = event.location();
    let mut out = format!(
        "{} {} ({}:{})",
        format_timestamp(event.timestamp()),
        head(event, Some(tag)),
        loc.file(),
        loc.line()
    );
    push_throwable(&mut out, event);
    out
}

fn head(event: &LogEvent, tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("{}/{}: {}", event.level(), tag, event.message()),
        None => format!("{}: {}", event.level(), event.message()),
    }
}

fn push_throwable(out: &mut String, event: &LogEvent) {
    let Some(err) = event.throwable() else {
        return;
    };
    for line in error_chain(err.as_ref()) {
        // Writing into a String cannot fail.
        let _ = write!(out, "\n    caused by: {line}");
    }
}
