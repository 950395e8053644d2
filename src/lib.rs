//! Cursorflux: a cursor-addressed state core with a reentrant action queue
//!
//! One immutable state tree, read and written through cursors, changed only
//! by actions. Every change goes through a single FIFO work queue that is
//! drained by exactly one call at a time, and each external dispatch renders
//! at most once, however many actions its handlers triggered along the way.
//!
//! # Core Concepts
//!
//! - **Cursor**: typed address of a sub-value inside the state tree
//! - **Handler**: pure function from the old sub-value to a new one
//! - **Action**: a cursor (or cursor factory) bound to a handler
//! - **Engine**: the store, queue and render trigger for one state tree
//!
//! Change detection is by identity: a handler that returns the `Arc` it was
//! given changed nothing.
//!
//! # Example
//!
//! ```rust
//! use cursorflux::core::Handler;
//! use cursorflux::{cursor, Engine};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug)]
//! struct AppState {
//!     n: Arc<u32>,
//! }
//!
//! let renders = Arc::new(AtomicUsize::new(0));
//! let engine = Engine::new(AppState { n: Arc::new(0) });
//!
//! let hits = Arc::clone(&renders);
//! engine.bootstrap(move || {
//!     hits.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! let increment = engine.create_action(
//!     cursor!(AppState => n),
//!     Handler::new(|n: &Arc<u32>, _: &()| Arc::new(**n + 1)),
//! );
//! let noop = engine.create_action(cursor!(AppState => n), Handler::<u32, ()>::identity());
//!
//! increment.call().unwrap();
//! noop.call().unwrap();
//!
//! assert_eq!(*engine.state().n, 1);
//! assert_eq!(renders.load(Ordering::SeqCst), 1);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod journal;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder, EngineConfig};
pub use crate::core::{Cursor, CursorSource, Handler, HandlerError, Store};
pub use engine::{Action, ActionError, ActionPair, CompositeAction, Engine};
