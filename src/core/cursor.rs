//! Cursors: typed addresses into the state tree.
//!
//! A cursor is a lens from the root state `S` to a sub-value `T`. Sub-values
//! are held behind `Arc` so that reading through a cursor preserves identity,
//! which is what the engine uses to decide whether a handler changed anything.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type Getter<S, T> = Arc<dyn Fn(&Arc<S>) -> Arc<T> + Send + Sync>;
type Setter<S, T> = Arc<dyn Fn(&Arc<S>, Arc<T>) -> Arc<S> + Send + Sync>;
type Factory<S, T, P> = Arc<dyn Fn(&P) -> Cursor<S, T> + Send + Sync>;

/// Typed address of a sub-value `T` inside the root state `S`.
///
/// Reading must return the stored `Arc` (not a fresh copy) and writing must
/// rebuild the root around the new value without touching siblings.
///
/// # Example
///
/// ```rust
/// use cursorflux::core::Cursor;
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug)]
/// struct App {
///     title: Arc<String>,
///     hits: Arc<u32>,
/// }
///
/// let hits = Cursor::new(
///     "hits",
///     |app: &Arc<App>| Arc::clone(&app.hits),
///     |app: &Arc<App>, hits| Arc::new(App { hits, ..(**app).clone() }),
/// );
///
/// let app = Arc::new(App { title: Arc::new("home".into()), hits: Arc::new(0) });
/// let next = hits.write(&app, Arc::new(7));
///
/// assert_eq!(*hits.read(&next), 7);
/// assert!(Arc::ptr_eq(&app.title, &next.title));
/// ```
pub struct Cursor<S, T> {
    key: Cow<'static, str>,
    get: Getter<S, T>,
    set: Setter<S, T>,
}

impl<S, T> Cursor<S, T> {
    /// Create a cursor from a key and a pair of pure accessors.
    pub fn new<K, G, W>(key: K, get: G, set: W) -> Self
    where
        K: Into<Cow<'static, str>>,
        G: Fn(&Arc<S>) -> Arc<T> + Send + Sync + 'static,
        W: Fn(&Arc<S>, Arc<T>) -> Arc<S> + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Dotted path of this cursor, used in logs and the change journal.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the sub-value addressed by this cursor.
    pub fn read(&self, state: &Arc<S>) -> Arc<T> {
        (self.get)(state)
    }

    /// Build a new root with `value` placed at this cursor.
    pub fn write(&self, state: &Arc<S>, value: Arc<T>) -> Arc<S> {
        (self.set)(state, value)
    }
}

impl<S: 'static> Cursor<S, S> {
    /// Cursor addressing the whole state.
    pub fn root() -> Self {
        Self::new("", |state: &Arc<S>| Arc::clone(state), |_, value| value)
    }
}

impl<S: 'static, T: 'static> Cursor<S, T> {
    /// Compose with a cursor into `T`, producing a cursor one level deeper.
    ///
    /// Keys are joined with `.`; the empty root key is dropped.
    pub fn then<U: 'static>(&self, inner: &Cursor<T, U>) -> Cursor<S, U> {
        let key = match (self.key(), inner.key()) {
            ("", inner) => inner.to_string(),
            (outer, "") => outer.to_string(),
            (outer, inner) => format!("{outer}.{inner}"),
        };

        let (outer_get, inner_get) = (Arc::clone(&self.get), Arc::clone(&inner.get));
        let (outer_set_get, outer_set, inner_set) = (
            Arc::clone(&self.get),
            Arc::clone(&self.set),
            Arc::clone(&inner.set),
        );

        Cursor::new(
            key,
            move |state: &Arc<S>| inner_get(&outer_get(state)),
            move |state: &Arc<S>, value| {
                let parent = outer_set_get(state);
                outer_set(state, inner_set(&parent, value))
            },
        )
    }
}

impl<S, T> Clone for Cursor<S, T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<S, T> fmt::Debug for Cursor<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("key", &self.key).finish()
    }
}

/// Where an action reads and writes: a fixed cursor, or one derived from the
/// parameters of each call.
///
/// A source is resolved to exactly one [`Cursor`] per enqueued work item.
pub enum CursorSource<S, T, P> {
    /// Same cursor for every call.
    Static(Cursor<S, T>),
    /// Cursor computed from the call parameters.
    Factory(Factory<S, T, P>),
}

impl<S, T, P> CursorSource<S, T, P> {
    /// Wrap a function deriving a cursor from call parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cursorflux::core::{Cursor, CursorSource};
    /// use std::sync::Arc;
    ///
    /// let slot = CursorSource::factory(|index: &usize| {
    ///     let index = *index;
    ///     Cursor::new(
    ///         format!("slots.{index}"),
    ///         move |slots: &Arc<Vec<Arc<u8>>>| Arc::clone(&slots[index]),
    ///         move |slots: &Arc<Vec<Arc<u8>>>, value| {
    ///             let mut next = (**slots).clone();
    ///             next[index] = value;
    ///             Arc::new(next)
    ///         },
    ///     )
    /// });
    ///
    /// assert_eq!(slot.resolve(&3).key(), "slots.3");
    /// ```
    pub fn factory<F>(create: F) -> Self
    where
        F: Fn(&P) -> Cursor<S, T> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(create))
    }

    /// Resolve to the concrete cursor for one call.
    pub fn resolve(&self, params: &P) -> Cursor<S, T> {
        match self {
            Self::Static(cursor) => cursor.clone(),
            Self::Factory(create) => create(params),
        }
    }
}

impl<S, T, P> From<Cursor<S, T>> for CursorSource<S, T, P> {
    fn from(cursor: Cursor<S, T>) -> Self {
        Self::Static(cursor)
    }
}

impl<S, T, P> Clone for CursorSource<S, T, P> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(cursor) => Self::Static(cursor.clone()),
            Self::Factory(create) => Self::Factory(Arc::clone(create)),
        }
    }
}

impl<S, T, P> fmt::Debug for CursorSource<S, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(cursor) => f.debug_tuple("Static").field(cursor).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}
