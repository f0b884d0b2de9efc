//! Process-wide dispatcher.
//!
//! Created empty on first use and never torn down. Libraries log through the
//! free functions here; applications decide what gets planted. Tests that need
//! isolation should build their own [`Dispatcher`] instead.

use std::sync::{Arc, LazyLock};

use crate::{
    antilog::Antilog,
    dispatcher::Dispatcher,
    log::{LogLevel, Throwable},
};

static GLOBAL: LazyLock<Dispatcher> = LazyLock::new(Dispatcher::new);

/// The process-wide dispatcher used by the free functions and `antilog_*!` macros.
pub fn global() -> &'static Dispatcher {
    &GLOBAL
}

pub fn plant(antilog: Arc<dyn Antilog>) -> bool {
    GLOBAL.plant(antilog)
}

pub fn uproot<A: Antilog + ?Sized>(antilog: &Arc<A>) -> bool {
    GLOBAL.uproot(antilog)
}

pub fn uproot_all() {
    GLOBAL.uproot_all();
}

#[track_caller]
pub fn log<F, S>(level: LogLevel, tag: Option<&str>, message: F, throwable: Option<Throwable>)
where
    F: FnOnce() -> S,
    S: Into<String>,
{
    GLOBAL.log(level, tag, message, throwable);
}

#[track_caller]
pub fn verbose<F: FnOnce() -> S, S: Into<String>>(tag: Option<&str>, message: F) {
    GLOBAL.verbose(tag, message);
}

#[track_caller]
pub fn debug<F: FnOnce() -> S, S: Into<String>>(tag: Option<&str>, message: F) {
    GLOBAL.debug(tag, message);
}

#[track_caller]
pub fn info<F: FnOnce() -> S, S: Into<String>>(tag: Option<&str>, message: F) {
    GLOBAL.info(tag, message);
}

#[track_caller]
pub fn warning<F: FnOnce() -> S, S: Into<String>>(tag: Option<&str>, message: F) {
    GLOBAL.warning(tag, message);
}

#[track_caller]
pub fn error<F: FnOnce() -> S, S: Into<String>>(tag: Option<&str>, message: F) {
    GLOBAL.error(tag, message);
}

#[track_caller]
pub fn assert<F: FnOnce() -> S, S: Into<String>>(tag: Option<&str>, message: F) {
    GLOBAL.assert(tag, message);
}

#[track_caller]
pub fn verbose_with<F: FnOnce() -> S, S: Into<String>>(
    tag: Option<&str>,
    message: F,
    throwable: Throwable,
) {
    GLOBAL.verbose_with(tag, message, throwable);
}

#[track_caller]
pub fn debug_with<F: FnOnce() -> S, S: Into<String>>(
    tag: Option<&str>,
    message: F,
    throwable: Throwable,
) {
    GLOBAL.debug_with(tag, message, throwable);
}

#[track_caller]
pub fn info_with<F: FnOnce() -> S, S: Into<String>>(
    tag: Option<&str>,
    message: F,
    throwable: Throwable,
) {
    GLOBAL.info_with(tag, message, throwable);
}

#[track_caller]
pub fn warning_with<F: FnOnce() -> S, S: Into<String>>(
    tag: Option<&str>,
    message: F,
    throwable: Throwable,
) {
    GLOBAL.warning_with(tag, message, throwable);
}

#[track_caller]
pub fn error_with<F: FnOnce() -> S, S: Into<String>>(
    tag: Option<&str>,
    message: F,
    throwable: Throwable,
) {
    GLOBAL.error_with(tag, message, throwable);
}

#[track_caller]
pub fn assert_with<F: FnOnce() -> S, S: Into<String>>(
    tag: Option<&str>,
    message: F,
    throwable: Throwable,
) {
    GLOBAL.assert_with(tag, message, throwable);
}
