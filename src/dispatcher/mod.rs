pub mod dispatcher;
pub mod global;
pub use dispatcher::{Dispatcher, FALLBACK_TAG};
