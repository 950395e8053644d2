//! Core state types.
//!
//! This module contains the pure pieces the engine is built from:
//! - Cursors addressing sub-values of the state tree
//! - Handlers computing new sub-values
//! - The store holding the current root
//!
//! Nothing here knows about queues or rendering.

mod cursor;
mod handler;
mod store;

pub use cursor::{Cursor, CursorSource};
pub use handler::{Handler, HandlerError, HandlerResult};
pub use store::Store;
