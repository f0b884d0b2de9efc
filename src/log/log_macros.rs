//! Leveled logging macros for an explicit [`Dispatcher`](crate::Dispatcher)
//! and for the process-wide one.
//!
//! ```rust
//! use antilog::Dispatcher;
//!
//! let dispatcher = Dispatcher::new();
//! antilog::dispatch_info!(dispatcher, "plain {}", 1);
//! antilog::dispatch_warning!(dispatcher, tag: "net", "retrying in {}ms", 250);
//! antilog::dispatch_error!(dispatcher, tag: "db", err: std::io::Error::other("eof"), "query failed");
//! antilog::antilog_debug!("goes to the global dispatcher");
//! ```
//!
//! Formatting runs inside the lazy message closure, so a call whose level no
//! planted antilog accepts never allocates.
//!
//! # Feature Flags
//! Specific log levels are controlled by cargo features:
//! `log-verbose`, `log-debug`, `log-info`, `log-warning`, `log-error`, `log-assert`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting and allocation overhead at compile time.

// ============================================================================
// 1. GENERIC INTERNAL MACROS (The "Workers")
// ============================================================================
// Always available; the level macros below delegate here.

#[macro_export]
macro_rules! dispatch_log {
    ($d:expr, $lvl:expr, tag: $tag:expr, err: $err:expr, $($arg:tt)+) => {{
        $d.log(
            $lvl,
            ::core::option::Option::Some(&*$tag),
            || format!($($arg)+),
            ::core::option::Option::Some($crate::log::throwable($err)),
        );
    }};
    ($d:expr, $lvl:expr, tag: $tag:expr, $($arg:tt)+) => {{
        $d.log(
            $lvl,
            ::core::option::Option::Some(&*$tag),
            || format!($($arg)+),
            ::core::option::Option::None,
        );
    }};
    ($d:expr, $lvl:expr, err: $err:expr, $($arg:tt)+) => {{
        $d.log(
            $lvl,
            ::core::option::Option::None,
            || format!($($arg)+),
            ::core::option::Option::Some($crate::log::throwable($err)),
        );
    }};
    ($d:expr, $lvl:expr, $($arg:tt)+) => {{
        $d.log(
            $lvl,
            ::core::option::Option::None,
            || format!($($arg)+),
            ::core::option::Option::None,
        );
    }};
}

#[macro_export]
macro_rules! antilog_log {
    ($lvl:expr, $($arg:tt)+) => {
        $crate::dispatch_log!($crate::global(), $lvl, $($arg)+)
    };
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- VERBOSE ----------------------
#[cfg(feature = "log-verbose")]
#[macro_export]
macro_rules! dispatch_verbose { ($d:expr, $($arg:tt)+) => { $crate::dispatch_log!($d, $crate::log::LogLevel::Verbose, $($arg)+) } }
#[cfg(feature = "log-verbose")]
#[macro_export]
macro_rules! antilog_verbose  { ($($arg:tt)+)          => { $crate::antilog_log!($crate::log::LogLevel::Verbose, $($arg)+) } }

#[cfg(not(feature = "log-verbose"))]
#[macro_export]
macro_rules! dispatch_verbose {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-verbose"))]
#[macro_export]
macro_rules! antilog_verbose {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! dispatch_debug { ($d:expr, $($arg:tt)+) => { $crate::dispatch_log!($d, $crate::log::LogLevel::Debug, $($arg)+) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! antilog_debug  { ($($arg:tt)+)          => { $crate::antilog_log!($crate::log::LogLevel::Debug, $($arg)+) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! dispatch_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! antilog_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! dispatch_info { ($d:expr, $($arg:tt)+) => { $crate::dispatch_log!($d, $crate::log::LogLevel::Info, $($arg)+) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! antilog_info  { ($($arg:tt)+)          => { $crate::antilog_log!($crate::log::LogLevel::Info, $($arg)+) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! dispatch_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! antilog_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! dispatch_warning { ($d:expr, $($arg:tt)+) => { $crate::dispatch_log!($d, $crate::log::LogLevel::Warning, $($arg)+) } }
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! antilog_warning  { ($($arg:tt)+)          => { $crate::antilog_log!($crate::log::LogLevel::Warning, $($arg)+) } }

#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! dispatch_warning {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! antilog_warning {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! dispatch_error { ($d:expr, $($arg:tt)+) => { $crate::dispatch_log!($d, $crate::log::LogLevel::Error, $($arg)+) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! antilog_error  { ($($arg:tt)+)          => { $crate::antilog_log!($crate::log::LogLevel::Error, $($arg)+) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! dispatch_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! antilog_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ASSERT ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-assert")]
#[macro_export]
macro_rules! dispatch_assert { ($d:expr, $($arg:tt)+) => { $crate::dispatch_log!($d, $crate::log::LogLevel::Assert, $($arg)+) } }
#[cfg(feature = "log-assert")]
#[macro_export]
macro_rules! antilog_assert  { ($($arg:tt)+)          => { $crate::antilog_log!($crate::log::LogLevel::Assert, $($arg)+) } }

#[cfg(not(feature = "log-assert"))]
#[macro_export]
macro_rules! dispatch_assert {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-assert"))]
#[macro_export]
macro_rules! antilog_assert {
    ($($arg:tt)*) => {
        ()
    };
}
