pub mod log_event;
pub mod log_level;
pub mod log_macros;
pub mod throwable;
pub use log_event::LogEvent;
pub use log_level::{LogLevel, ParseLevelError};
pub use throwable::{Throwable, error_chain, throwable};
