//! The action engine: queue, drain protocol, actions and rendering.
//!
//! This module is the "imperative shell" around the pure core. It owns the
//! store and serializes every state change through one FIFO work queue.
//!
//! # Key Concepts
//!
//! - **Engine**: one state tree with its queue and render trigger
//! - **Action**: a cursor (or cursor factory) bound to a handler
//! - **Composite action**: several cursor/handler pairs behind one call
//! - **Drain**: executing queued work to exhaustion, owned by one call
//!
//! # Reentrancy
//!
//! Handlers and render callbacks may dispatch actions synchronously. A
//! dispatch made while a drain is running only enqueues; the running drain
//! executes it after the current handler returns and before the outermost
//! call renders. The outermost call renders at most once.

mod action;
mod composite;
mod context;
mod error;
mod queue;

pub use action::Action;
pub use composite::{ActionPair, CompositeAction};
pub use context::{Engine, RenderCallback};
pub use error::ActionError;
