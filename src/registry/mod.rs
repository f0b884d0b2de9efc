//! Concurrency-safe set of planted antilogs.
pub mod antilog_registry;
pub use antilog_registry::{AntilogRegistry, Snapshot};
