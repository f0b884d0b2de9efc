pub mod antilog;
pub mod antilog_error;
pub mod console_antilog;
pub mod debug_antilog;
pub mod facade_antilog;
pub mod file_antilog;
pub mod formatter;
pub mod noop_antilog;
pub use antilog::Antilog;
pub use antilog_error::AntilogError;
pub use console_antilog::ConsoleAntilog;
pub use debug_antilog::DebugAntilog;
pub use facade_antilog::FacadeAntilog;
pub use file_antilog::FileAntilog;
pub use noop_antilog::NoopAntilog;
