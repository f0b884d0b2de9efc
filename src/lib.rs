//! Antilog is a thread-safe, multi-destination log dispatcher.
//!
//! Log calls go through a [`Dispatcher`], which hands each event to every
//! planted [`Antilog`] that accepts its level and tag. Destinations are
//! pluggable: console, debug channel, the `log` facade, a background file
//! writer, or anything implementing the trait.
//!
//! ```rust
//! use std::sync::Arc;
//! use antilog::{ConsoleAntilog, Dispatcher, LogLevel};
//!
//! let dispatcher = Dispatcher::new();
//! dispatcher.plant(Arc::new(ConsoleAntilog::new().with_min_level(LogLevel::Info)));
//!
//! dispatcher.info(Some("startup"), || "listening on :8080");
//! // Below the console's minimum: the closure never runs.
//! dispatcher.debug(Some("startup"), || format!("{:?}", (1, 2, 3)));
//! ```
//!
//! The crate is structured into several modules:

/// Pluggable destinations and the built-in implementations.
pub mod antilog;
/// INI configuration loading.
pub mod config;
/// Fan-out of log calls and the process-wide dispatcher.
pub mod dispatcher;
/// Levels, events, throwables and the logging macros.
pub mod log;
/// Typed `[Logging]` section selecting which built-ins to plant.
pub mod logging_config;
/// Concurrency-safe set of planted antilogs.
pub mod registry;

pub use crate::antilog::{
    Antilog, AntilogError, ConsoleAntilog, DebugAntilog, FacadeAntilog, FileAntilog, NoopAntilog,
};
pub use crate::config::{Config, ConfigError};
pub use crate::dispatcher::Dispatcher;
pub use crate::dispatcher::global::{
    assert, assert_with, debug, debug_with, error, error_with, global, info, info_with, log,
    plant, uproot, uproot_all, verbose, verbose_with, warning, warning_with,
};
pub use crate::log::{LogEvent, LogLevel, ParseLevelError, Throwable, throwable};
pub use crate::logging_config::LoggingConfig;
pub use crate::registry::AntilogRegistry;
