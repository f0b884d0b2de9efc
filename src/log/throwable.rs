use std::{error::Error, sync::Arc};

/// Error value attached to a log event.
///
/// Shared behind an `Arc` so one event can be handed to every destination
/// (and cloned into worker queues) without copying the error.
pub type Throwable = Arc<dyn Error + Send + Sync + 'static>;

/// Converts anything that can become a boxed error (`io::Error`, a custom
/// error type, `&str`, `String`) into a [`Throwable`].
pub fn throwable<E>(err: E) -> Throwable
where
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    Arc::from(err.into())
}

/// Renders an error and each of its `source()`s, outermost first.
#[must_use]
pub fn error_chain(err: &(dyn Error + 'static)) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut cur = err.source();
    while let Some(inner) = cur {
        chain.push(inner.to_string());
        cur = inner.source();
    }
    chain
}
