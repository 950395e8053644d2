//! Action handlers: pure functions from an old sub-state to a new one.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors a fallible handler can report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HandlerError {
    #[error("Handler failed: {0}")]
    Failed(String),

    #[error("Handler rejected update at '{cursor}': {reason}")]
    Rejected { cursor: String, reason: String },
}

/// Result of applying a handler.
pub type HandlerResult<T> = Result<Arc<T>, HandlerError>;

type Apply<T, P> = Arc<dyn Fn(&Arc<T>, &P) -> HandlerResult<T> + Send + Sync>;

/// Pure function computing a new sub-state from the old one and call params.
///
/// Returning the same `Arc` that was passed in means "no change": the engine
/// skips the store write and does not count the call toward a render.
///
/// # Example
///
/// ```rust
/// use cursorflux::core::Handler;
/// use std::sync::Arc;
///
/// let add = Handler::new(|n: &Arc<i64>, by: &i64| Arc::new(**n + by));
/// let keep = Handler::<i64, i64>::identity();
///
/// let start = Arc::new(1);
/// assert_eq!(*add.apply(&start, &2).unwrap(), 3);
/// assert!(Arc::ptr_eq(&keep.apply(&start, &2).unwrap(), &start));
/// ```
pub struct Handler<T, P> {
    apply: Apply<T, P>,
}

impl<T: 'static, P: 'static> Handler<T, P> {
    /// Wrap an infallible handler.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Arc<T>, &P) -> Arc<T> + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(move |state: &Arc<T>, params: &P| Ok(handler(state, params))),
        }
    }

    /// Wrap a handler that may fail.
    ///
    /// A failure aborts the drain that is executing it and reaches the
    /// caller that owns that drain.
    pub fn fallible<F>(handler: F) -> Self
    where
        F: Fn(&Arc<T>, &P) -> HandlerResult<T> + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(handler),
        }
    }

    /// Handler that never changes anything.
    pub fn identity() -> Self {
        Self {
            apply: Arc::new(|state: &Arc<T>, _: &P| Ok(Arc::clone(state))),
        }
    }

    /// Apply the handler.
    pub fn apply(&self, state: &Arc<T>, params: &P) -> HandlerResult<T> {
        (self.apply)(state, params)
    }
}

impl<T, P> Clone for Handler<T, P> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
        }
    }
}

impl<T, P> fmt::Debug for Handler<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}
