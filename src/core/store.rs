//! The state store: one immutable root value, replaced wholesale on write.

use super::cursor::Cursor;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Holds the current root state.
///
/// Reads hand out the stored `Arc`s, so callers can detect "nothing changed"
/// with [`Arc::ptr_eq`]. Writes rebuild the root through the cursor and swap
/// it in; the previous root is never mutated.
///
/// # Example
///
/// ```rust
/// use cursorflux::core::{Cursor, Store};
/// use std::sync::Arc;
///
/// let store = Store::new(10_u32);
/// let root = Cursor::<u32, u32>::root();
///
/// let before = store.get(&root);
/// store.set(&root, Arc::new(11));
///
/// assert_eq!(*before, 10);
/// assert_eq!(*store.get(&root), 11);
/// ```
pub struct Store<S> {
    root: RwLock<Arc<S>>,
}

impl<S> Store<S> {
    /// Create a store holding `initial`.
    pub fn new(initial: S) -> Self {
        Self::from_arc(Arc::new(initial))
    }

    /// Create a store around an existing root.
    pub fn from_arc(initial: Arc<S>) -> Self {
        Self {
            root: RwLock::new(initial),
        }
    }

    /// Current root.
    pub fn snapshot(&self) -> Arc<S> {
        self.root.read().clone()
    }

    /// Replace the whole root.
    pub fn replace(&self, root: Arc<S>) {
        *self.root.write() = root;
    }

    /// Read the sub-value at `cursor`.
    pub fn get<T>(&self, cursor: &Cursor<S, T>) -> Arc<T> {
        cursor.read(&self.snapshot())
    }

    /// Write `value` at `cursor`.
    pub fn set<T>(&self, cursor: &Cursor<S, T>, value: Arc<T>) {
        let mut root = self.root.write();
        *root = cursor.write(&root, value);
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("root", &self.snapshot())
            .finish()
    }
}
