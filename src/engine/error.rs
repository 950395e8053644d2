//! Errors raised while dispatching actions.

use crate::core::HandlerError;
use thiserror::Error;

/// Errors that can occur when an action is dispatched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    /// The engine has no render trigger. Call `Engine::bootstrap` first.
    #[error("Render callback must be set through Engine::bootstrap before the first dispatch")]
    NotBootstrapped,

    /// A handler failed while the queue was being drained.
    #[error(transparent)]
    Handler(#[from] HandlerError),

    /// One drain executed more items than the configured limit allows.
    #[error("Drain stopped after {limit} items with {pending} still queued")]
    DrainLimitExceeded { limit: usize, pending: usize },
}
