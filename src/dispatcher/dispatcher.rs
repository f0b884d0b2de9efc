//! # Synchronous fan-out of log calls to planted antilogs.
//!
//! ## Architecture
//! ```text
//! log(level, tag, message_fn, throwable)
//!     │
//!     ├─► registry.snapshot()            (one atomic load)
//!     ├─► keep antilogs with is_enabled_for(level, tag)
//!     │       └─ none enabled ─► return (message_fn never runs)
//!     ├─► message_fn() once ─► LogEvent
//!     │
//!     ├──► antilog1.perform_log(&event) ──► Err / panic ─► fallback
//!     ├──► antilog2.perform_log(&event)
//!     └──► antilogN.perform_log(&event)
//! ```
//!
//! ## Rules
//! - **Caller's thread**: delivery is synchronous; nothing is queued here.
//! - **Exactly once**: each enabled antilog in the snapshot gets the event once.
//! - **Isolation**: a failing or panicking antilog doesn't affect the others
//!   and never reaches the caller.
//!
//! ## Panic handling
//! Each `is_enabled_for` / `perform_log` call runs under `catch_unwind`. A panic
//! in `is_enabled_for` counts as "disabled"; either way the panic is reported as
//! [`AntilogError::Panicked`].
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if an antilog uses `Arc<Mutex<T>>` and panics while holding the lock.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe, Location},
    sync::Arc,
};

use crate::{
    antilog::{Antilog, AntilogError},
    log::{LogEvent, LogLevel, Throwable},
    logging_config::LoggingConfig,
    registry::AntilogRegistry,
};

/// Tag on events the dispatcher sends to its fallback antilog.
pub const FALLBACK_TAG: &str = "antilog";

/// Entry point for log calls.
///
/// Owns an [`AntilogRegistry`] and an optional fallback antilog that receives
/// reports about failing antilogs.
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: AntilogRegistry,
    fallback: Option<FallbackSlot>,
}

struct FallbackSlot(Arc<dyn Antilog>);

impl std::fmt::Debug for FallbackSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.name())
    }
}

impl Dispatcher {
    /// Creates a dispatcher with nothing planted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes reports about failing antilogs to `fallback` instead of the
    /// `log` facade.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Arc<dyn Antilog>) -> Self {
        self.fallback = Some(FallbackSlot(fallback));
        self
    }

    #[must_use]
    pub fn registry(&self) -> &AntilogRegistry {
        &self.registry
    }

    /// See [`AntilogRegistry::plant`].
    pub fn plant(&self, antilog: Arc<dyn Antilog>) -> bool {
        self.registry.plant(antilog)
    }

    /// See [`AntilogRegistry::uproot`].
    pub fn uproot<A: Antilog + ?Sized>(&self, antilog: &Arc<A>) -> bool {
        self.registry.uproot(antilog)
    }

    /// See [`AntilogRegistry::uproot_all`].
    pub fn uproot_all(&self) {
        self.registry.uproot_all();
    }

    /// Plants every antilog `config` enables and returns them, so callers can
    /// uproot them later.
    pub fn plant_from_config(&self, config: &LoggingConfig) -> Vec<Arc<dyn Antilog>> {
        let antilogs = config.build_antilogs();
        for antilog in &antilogs {
            self.plant(Arc::clone(antilog));
        }
        antilogs
    }

    /// True when at least one planted antilog accepts `level`/`tag`.
    #[must_use]
    #[track_caller]
    pub fn is_enabled(&self, level: LogLevel, tag: Option<&str>) -> bool {
        let location = Location::caller();
        self.registry
            .snapshot()
            .iter()
            .any(|a| self.accepts(a, level, tag, location))
    }

    /// Builds one event and hands it to every planted antilog that accepts
    /// `level`/`tag`.
    ///
    /// `message` runs at most once, and only if some antilog is enabled.
    #[track_caller]
    pub fn log<F, S>(&self, level: LogLevel, tag: Option<&str>, message: F, throwable: Option<Throwable>)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let location = Location::caller();
        let snapshot = self.registry.snapshot();
        if snapshot.is_empty() {
            return;
        }

        let enabled: Vec<&Arc<dyn Antilog>> = snapshot
            .iter()
            .filter(|a| self.accepts(a, level, tag, location))
            .collect();
        if enabled.is_empty() {
            return;
        }

        let event = LogEvent::new(level, tag, message(), throwable, location);
        for antilog in enabled {
            self.deliver(antilog, &event);
        }
    }

    #[track_caller]
    pub fn verbose<F: FnOnce() -> S, S: Into<String>>(&self, tag: Option<&str>, message: F) {
        self.log(LogLevel::Verbose, tag, message, None);
    }

    #[track_caller]
    pub fn debug<F: FnOnce() -> S, S: Into<String>>(&self, tag: Option<&str>, message: F) {
        self.log(LogLevel::Debug, tag, message, None);
    }

    #[track_caller]
    pub fn info<F: FnOnce() -> S, S: Into<String>>(&self, tag: Option<&str>, message: F) {
        self.log(LogLevel::Info, tag, message, None);
    }

    #[track_caller]
    pub fn warning<F: FnOnce() -> S, S: Into<String>>(&self, tag: Option<&str>, message: F) {
        self.log(LogLevel::Warning, tag, message, None);
    }

    #[track_caller]
    pub fn error<F: FnOnce() -> S, S: Into<String>>(&self, tag: Option<&str>, message: F) {
        self.log(LogLevel::Error, tag, message, None);
    }

    #[track_caller]
    pub fn assert<F: FnOnce() -> S, S: Into<String>>(&self, tag: Option<&str>, message: F) {
        self.log(LogLevel::Assert, tag, message, None);
    }

    // `*_with` forms attach the error that caused the event.

    #[track_caller]
    pub fn verbose_with<F: FnOnce() -> S, S: Into<String>>(
        &self,
        tag: Option<&str>,
        message: F,
        throwable: Throwable,
    ) {
        self.log(LogLevel::Verbose, tag, message, Some(throwable));
    }

    #[track_caller]
    pub fn debug_with<F: FnOnce() -> S, S: Into<String>>(
        &self,
        tag: Option<&str>,
        message: F,
        throwable: Throwable,
    ) {
        self.log(LogLevel::Debug, tag, message, Some(throwable));
    }

    #[track_caller]
    pub fn info_with<F: FnOnce() -> S, S: Into<String>>(
        &self,
        tag: Option<&str>,
        message: F,
        throwable: Throwable,
    ) {
        self.log(LogLevel::Info, tag, message, Some(throwable));
    }

    #[track_caller]
    pub fn warning_with<F: FnOnce() -> S, S: Into<String>>(
        &self,
        tag: Option<&str>,
        message: F,
        throwable: Throwable,
    ) {
        self.log(LogLevel::Warning, tag, message, Some(throwable));
    }

    #[track_caller]
    pub fn error_with<F: FnOnce() -> S, S: Into<String>>(
        &self,
        tag: Option<&str>,
        message: F,
        throwable: Throwable,
    ) {
        self.log(LogLevel::Error, tag, message, Some(throwable));
    }

    #[track_caller]
    pub fn assert_with<F: FnOnce() -> S, S: Into<String>>(
        &self,
        tag: Option<&str>,
        message: F,
        throwable: Throwable,
    ) {
        self.log(LogLevel::Assert, tag, message, Some(throwable));
    }

    fn accepts(
        &self,
        antilog: &Arc<dyn Antilog>,
        level: LogLevel,
        tag: Option<&str>,
        location: &'static Location<'static>,
    ) -> bool {
        match panic::catch_unwind(AssertUnwindSafe(|| antilog.is_enabled_for(level, tag))) {
            Ok(enabled) => enabled,
            Err(payload) => {
                let err = panicked(antilog.name(), payload.as_ref());
                self.report(antilog.name(), err, location);
                false
            }
        }
    }

    fn deliver(&self, antilog: &Arc<dyn Antilog>, event: &LogEvent) {
        match panic::catch_unwind(AssertUnwindSafe(|| antilog.perform_log(event))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => self.report(antilog.name(), err, event.location()),
            Err(payload) => {
                let err = panicked(antilog.name(), payload.as_ref());
                self.report(antilog.name(), err, event.location());
            }
        }
    }

    /// Sends a failure to the fallback antilog, or to the `log` facade when
    /// there is none or it fails as well. Never recurses into the registry.
    ///
    /// The report carries `location`, the call site of the failing log call.
    fn report(&self, name: &'static str, err: AntilogError, location: &'static Location<'static>) {
        let Some(FallbackSlot(fallback)) = &self.fallback else {
            log::warn!(target: FALLBACK_TAG, "antilog `{name}` failed [{}]: {err}", err.as_label());
            return;
        };

        let label = err.as_label();
        let event = LogEvent::new(
            LogLevel::Error,
            Some(FALLBACK_TAG),
            format!("antilog `{name}` failed [{label}]"),
            Some(Arc::new(err)),
            location,
        );
        match panic::catch_unwind(AssertUnwindSafe(|| fallback.perform_log(&event))) {
            Ok(Ok(())) => {}
            Ok(Err(fallback_err)) => log::error!(
                target: FALLBACK_TAG,
                "fallback `{}` failed while reporting `{name}` [{label}]: {fallback_err}",
                fallback.name()
            ),
            Err(_) => log::error!(
                target: FALLBACK_TAG,
                "fallback `{}` panicked while reporting `{name}` [{label}]",
                fallback.name()
            ),
        }
    }
}

fn panicked(antilog: &'static str, payload: &(dyn Any + Send)) -> AntilogError {
    let info = if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    };
    AntilogError::Panicked { antilog, info }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::antilog::NoopAntilog;
    use crate::log::throwable;
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<LogEvent>>,
        min_level: Option<LogLevel>,
    }

    impl Recorder {
        fn at_least(level: LogLevel) -> Self {
            Self {
                min_level: Some(level),
                ..Self::default()
            }
        }

        fn take(&self) -> Vec<LogEvent> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl Antilog for Recorder {
        fn is_enabled_for(&self, level: LogLevel, _tag: Option<&str>) -> bool {
            self.min_level.is_none_or(|min| level >= min)
        }
        fn perform_log(&self, event: &LogEvent) -> Result<(), AntilogError> {
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }
        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    struct Failing;

    impl Antilog for Failing {
        fn perform_log(&self, _event: &LogEvent) -> Result<(), AntilogError> {
            Err(AntilogError::Other("refused".into()))
        }
        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct Panicking;

    impl Antilog for Panicking {
        fn perform_log(&self, _event: &LogEvent) -> Result<(), AntilogError> {
            panic!("antilog blew up");
        }
        fn name(&self) -> &'static str {
            "panicking"
        }
    }

    struct PanicsOnFilter;

    impl Antilog for PanicsOnFilter {
        fn is_enabled_for(&self, _level: LogLevel, _tag: Option<&str>) -> bool {
            panic!("filter blew up");
        }
        fn perform_log(&self, _event: &LogEvent) -> Result<(), AntilogError> {
            Ok(())
        }
    }

    #[test]
    fn empty_dispatcher_never_evaluates_message() {
        let d = Dispatcher::new();
        let calls = AtomicUsize::new(0);
        d.log(
            LogLevel::Assert,
            Some("t"),
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                "m"
            },
            None,
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn disabled_antilogs_do_not_evaluate_message() {
        let d = Dispatcher::new();
        d.plant(Arc::new(NoopAntilog));
        let rec = Arc::new(Recorder::at_least(LogLevel::Error));
        d.plant(rec.clone());

        let calls = AtomicUsize::new(0);
        d.info(Some("t"), || {
            calls.fetch_add(1, Ordering::SeqCst);
            "m"
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(rec.take().is_empty());
        assert!(!d.is_enabled(LogLevel::Info, None));
        assert!(d.is_enabled(LogLevel::Error, None));
    }

    #[test]
    fn enabled_antilog_receives_matching_event_once() {
        let d = Dispatcher::new();
        let rec = Arc::new(Recorder::default());
        d.plant(rec.clone());

        let err = throwable("cause");
        d.log(LogLevel::Warning, Some("net"), || "slow", Some(err.clone()));

        let events = rec.take();
        assert_eq!(events.len(), 1);
        let ev = &events[0];
        assert_eq!(ev.level(), LogLevel::Warning);
        assert_eq!(ev.tag(), Some("net"));
        assert_eq!(ev.message(), "slow");
        assert!(Arc::ptr_eq(ev.throwable().unwrap(), &err));
        assert_eq!(ev.location().file(), file!());
    }

    #[test]
    fn message_is_evaluated_once_for_many_antilogs() {
        let d = Dispatcher::new();
        let a = Arc::new(Recorder::default());
        let b = Arc::new(Recorder::default());
        d.plant(a.clone());
        d.plant(b.clone());

        let calls = AtomicUsize::new(0);
        d.debug(None, || {
            calls.fetch_add(1, Ordering::SeqCst);
            format!("n={}", 3)
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.take().len(), 1);
        assert_eq!(b.take().len(), 1);
    }

    #[test]
    fn failing_antilog_is_isolated_and_reported_to_fallback() {
        let fallback = Arc::new(Recorder::default());
        let d = Dispatcher::new().with_fallback(fallback.clone());
        let rec = Arc::new(Recorder::default());
        d.plant(Arc::new(Failing));
        d.plant(rec.clone());

        d.info(Some("t"), || "m");

        assert_eq!(rec.take().len(), 1);
        let reports = fallback.take();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].level(), LogLevel::Error);
        assert_eq!(reports[0].tag(), Some(FALLBACK_TAG));
        assert_eq!(reports[0].message(), "antilog `failing` failed [antilog_other]");
        assert_eq!(reports[0].throwable().unwrap().to_string(), "refused");
    }

    #[test]
    fn panicking_antilog_is_isolated() {
        let fallback = Arc::new(Recorder::default());
        let d = Dispatcher::new().with_fallback(fallback.clone());
        let rec = Arc::new(Recorder::default());
        d.plant(Arc::new(Panicking));
        d.plant(rec.clone());

        d.error(None, || "still delivered");

        assert_eq!(rec.take().len(), 1);
        let reports = fallback.take();
        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0].throwable().unwrap().to_string(),
            "antilog `panicking` panicked: antilog blew up"
        );
    }

    #[test]
    fn panicking_filter_counts_as_disabled_and_is_reported() {
        let fallback = Arc::new(Recorder::default());
        let d = Dispatcher::new().with_fallback(fallback.clone());
        let rec = Arc::new(Recorder::default());
        d.plant(Arc::new(PanicsOnFilter));
        d.plant(rec.clone());

        d.verbose(Some("t"), || "m");
        assert_eq!(rec.take().len(), 1);

        let reports = fallback.take();
        assert_eq!(reports.len(), 1);
        let message = reports[0].message();
        assert!(message.ends_with("failed [antilog_panicked]"), "got: {message}");
        assert!(
            reports[0]
                .throwable()
                .unwrap()
                .to_string()
                .ends_with("panicked: filter blew up")
        );
    }

    #[test]
    fn fallback_report_points_at_the_failing_call() {
        let fallback = Arc::new(Recorder::default());
        let d = Dispatcher::new().with_fallback(fallback.clone());
        d.plant(Arc::new(Failing));

        let line = line!() + 1;
        d.warning(Some("t"), || "m");

        let reports = fallback.take();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].location().file(), file!());
        assert_eq!(reports[0].location().line(), line);
    }

    #[test]
    fn failures_without_fallback_do_not_reach_caller() {
        let d = Dispatcher::new();
        d.plant(Arc::new(Failing));
        d.plant(Arc::new(Panicking));
        d.assert(Some("t"), || "m");
    }

    #[test]
    fn uprooted_antilog_stops_receiving() {
        let d = Dispatcher::new();
        let rec = Arc::new(Recorder::default());
        d.plant(rec.clone());
        d.info(None, || "one");
        assert!(d.uproot(&rec));
        d.info(None, || "two");

        let events = rec.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message(), "one");
    }
}
