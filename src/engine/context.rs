//! Engine context: the store, work queue and render trigger of one state tree.

use crate::builder::{EngineBuilder, EngineConfig};
use crate::core::{Cursor, CursorSource, Handler, Store};
use crate::engine::action::Action;
use crate::engine::composite::{ActionPair, CompositeAction};
use crate::engine::error::ActionError;
use crate::engine::queue::WorkQueue;
use crate::journal::ChangeJournal;
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Callback notified once per external dispatch that changed state.
pub type RenderCallback = Arc<dyn Fn() + Send + Sync>;

pub(crate) struct Shared<S> {
    pub(crate) id: Uuid,
    pub(crate) store: Store<S>,
    pub(crate) queue: Mutex<WorkQueue<S>>,
    pub(crate) config: EngineConfig,
    render: RwLock<Option<RenderCallback>>,
    journal: Option<Mutex<ChangeJournal>>,
}

/// Handle to one state tree and its action queue.
///
/// Cloning the handle is cheap; all clones share the same store, queue and
/// render trigger. Actions created from an engine keep a clone of it, so they
/// can be captured by handlers and render callbacks and dispatched
/// reentrantly.
///
/// The drain protocol assumes one logical caller at a time. Dispatching from
/// several threads at once is memory-safe, but the later caller returns
/// without draining and its work is executed and rendered by whichever call
/// owns the drain.
pub struct Engine<S> {
    pub(crate) shared: Arc<Shared<S>>,
}

impl<S: 'static> Engine<S> {
    /// Create an engine with the default configuration.
    ///
    /// The engine is not bootstrapped: dispatching any action fails with
    /// [`ActionError::NotBootstrapped`] until [`Engine::bootstrap`] is called.
    pub fn new(initial: S) -> Self {
        Self::from_parts(Arc::new(initial), EngineConfig::default())
    }

    /// Start building an engine.
    pub fn builder() -> EngineBuilder<S> {
        EngineBuilder::new()
    }

    pub(crate) fn from_parts(initial: Arc<S>, config: EngineConfig) -> Self {
        let journal = config
            .journal_capacity
            .map(|capacity| Mutex::new(ChangeJournal::new(capacity)));

        Self {
            shared: Arc::new(Shared {
                id: Uuid::new_v4(),
                store: Store::from_arc(initial),
                queue: Mutex::new(WorkQueue::default()),
                config,
                render: RwLock::new(None),
                journal,
            }),
        }
    }

    /// Unique id of this engine, attached to its log events.
    pub fn id(&self) -> Uuid {
        self.shared.id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.shared.config
    }

    /// Arm the engine with a render callback and empty the work queue.
    ///
    /// Calling it again re-arms the engine with the new callback. A re-arm
    /// from inside a handler leaves the running drain as owner; it executes
    /// whatever is queued after the re-arm.
    pub fn bootstrap<F>(&self, render: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.rearm(Some(Arc::new(render)));
        tracing::info!(engine = %self.shared.id, "Action engine has been initialized");
    }

    /// Remove the render callback and empty the work queue.
    ///
    /// Dispatches fail with [`ActionError::NotBootstrapped`] afterwards.
    pub fn teardown(&self) {
        self.rearm(None);
        tracing::info!(engine = %self.shared.id, "Action engine has been torn down");
    }

    fn rearm(&self, render: Option<RenderCallback>) {
        *self.shared.render.write() = render;

        let dropped = {
            let mut queue = self.shared.queue.lock();
            std::mem::take(&mut queue.items)
        };
        if !dropped.is_empty() {
            tracing::debug!(
                engine = %self.shared.id,
                dropped = dropped.len(),
                "Discarded queued work on re-arm"
            );
        }
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.shared.render.read().is_some()
    }

    /// Bind a cursor (or cursor factory) and a handler into an action.
    pub fn create_action<T, P>(
        &self,
        cursor: impl Into<CursorSource<S, T, P>>,
        handler: Handler<T, P>,
    ) -> Action<S, P>
    where
        T: 'static,
        P: Send + Sync + 'static,
    {
        Action::bind(self.clone(), cursor.into(), handler)
    }

    /// Bind several cursor/handler pairs into one action sharing its params.
    pub fn create_actions<P, I>(&self, pairs: I) -> CompositeAction<S, P>
    where
        P: Send + Sync + 'static,
        I: IntoIterator<Item = ActionPair<S, P>>,
    {
        CompositeAction::bind(self.clone(), pairs.into_iter().collect())
    }

    /// Current root state.
    pub fn state(&self) -> Arc<S> {
        self.shared.store.snapshot()
    }

    /// Read the sub-value at `cursor`.
    pub fn get<T>(&self, cursor: &Cursor<S, T>) -> Arc<T> {
        self.shared.store.get(cursor)
    }

    pub fn store(&self) -> &Store<S> {
        &self.shared.store
    }

    /// Number of work items waiting in the queue.
    pub fn pending(&self) -> usize {
        self.shared.queue.lock().items.len()
    }

    /// Whether some call currently owns the drain loop.
    pub fn is_draining(&self) -> bool {
        self.shared.queue.lock().draining
    }

    /// Copy of the change journal, if one is configured.
    pub fn journal(&self) -> Option<ChangeJournal> {
        self.shared
            .journal
            .as_ref()
            .map(|journal| journal.lock().clone())
    }

    pub(crate) fn ensure_bootstrapped(&self) -> Result<(), ActionError> {
        if self.is_bootstrapped() {
            Ok(())
        } else {
            tracing::warn!(engine = %self.shared.id, "Action dispatched before bootstrap");
            Err(ActionError::NotBootstrapped)
        }
    }

    pub(crate) fn fire_render(&self) {
        let render = self.shared.render.read().clone();
        if let Some(render) = render {
            render();
            tracing::debug!(engine = %self.shared.id, "Rendering invoked");
        }
    }

    pub(crate) fn record_change(&self, cursor: &str) {
        if let Some(journal) = &self.shared.journal {
            let mut journal = journal.lock();
            *journal = journal.record(cursor, Utc::now());
        }
    }
}

impl<S> Clone for Engine<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S> fmt::Debug for Engine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.shared.queue.lock();
        f.debug_struct("Engine")
            .field("id", &self.shared.id)
            .field("bootstrapped", &self.shared.render.read().is_some())
            .field("pending", &queue.items.len())
            .field("draining", &queue.draining)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        n: Arc<u32>,
    }

    fn counter() -> Engine<Counter> {
        Engine::new(Counter { n: Arc::new(0) })
    }

    #[test]
    fn new_engine_is_not_bootstrapped() {
        let engine = counter();

        assert!(!engine.is_bootstrapped());
        assert_eq!(engine.pending(), 0);
        assert!(!engine.is_draining());
        assert!(engine.journal().is_none());
    }

    #[test]
    fn bootstrap_arms_and_teardown_disarms() {
        let engine = counter();

        engine.bootstrap(|| {});
        assert!(engine.is_bootstrapped());

        engine.teardown();
        assert!(!engine.is_bootstrapped());
        assert_eq!(
            engine.ensure_bootstrapped(),
            Err(ActionError::NotBootstrapped)
        );
    }

    #[test]
    fn rebootstrap_replaces_render_callback() {
        let engine = counter();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let hits = Arc::clone(&first);
        engine.bootstrap(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        });
        engine.fire_render();

        let hits = Arc::clone(&second);
        engine.bootstrap(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        });
        engine.fire_render();

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rearm_discards_work_but_keeps_drain_owner() {
        let engine = counter();
        engine.shared.queue.lock().draining = true;

        engine.bootstrap(|| {});

        assert!(engine.is_draining());
        assert_eq!(engine.pending(), 0);
    }

    #[test]
    fn clones_share_state() {
        let engine = counter();
        let other = engine.clone();

        engine.bootstrap(|| {});
        assert!(other.is_bootstrapped());
        assert_eq!(engine.id(), other.id());
    }

    #[test]
    fn separate_engines_are_independent() {
        let a = counter();
        let b = counter();

        a.bootstrap(|| {});
        assert!(a.is_bootstrapped());
        assert!(!b.is_bootstrapped());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn journal_is_created_from_config() {
        let engine = Engine::from_parts(
            Arc::new(Counter { n: Arc::new(0) }),
            EngineConfig {
                max_drain_items: None,
                journal_capacity: Some(8),
            },
        );

        engine.record_change("n");
        let journal = engine.journal().unwrap();
        assert_eq!(journal.capacity(), 8);
        assert_eq!(journal.cursors(), vec!["n"]);
    }
}
