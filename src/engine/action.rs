//! Single-cursor actions.

use crate::core::{CursorSource, Handler};
use crate::engine::context::Engine;
use crate::engine::error::ActionError;
use crate::engine::queue::WorkItem;
use std::fmt;
use std::sync::Arc;

/// Resolves the cursor for one call and packages the work item.
pub(crate) type Bind<S, P> = Arc<dyn Fn(&Arc<P>) -> WorkItem<S> + Send + Sync>;

/// A callable bound to one cursor (or cursor factory) and one handler.
///
/// Created with [`Engine::create_action`]. Binding does no work; each
/// [`dispatch`](Action::dispatch) resolves the cursor against the call's
/// params, runs the handler through the engine's queue and renders once if
/// anything changed.
pub struct Action<S, P> {
    engine: Engine<S>,
    bind: Bind<S, P>,
}

impl<S: 'static, P: Send + Sync + 'static> Action<S, P> {
    pub(crate) fn bind<T: 'static>(
        engine: Engine<S>,
        cursor: CursorSource<S, T, P>,
        handler: Handler<T, P>,
    ) -> Self {
        Self {
            engine,
            bind: Arc::new(move |params: &Arc<P>| {
                WorkItem::new(cursor.resolve(params), handler.clone(), Arc::clone(params))
            }),
        }
    }

    /// Run the action with `params`.
    ///
    /// Returns `Ok(true)` if this call changed state and rendered. A call
    /// made while another call is draining the queue returns `Ok(false)`
    /// immediately; its work runs, and is rendered, as part of that drain.
    pub fn dispatch(&self, params: P) -> Result<bool, ActionError> {
        self.engine.ensure_bootstrapped()?;

        let params = Arc::new(params);
        let changed = self.engine.submit((self.bind)(&params))?;
        if changed {
            self.engine.fire_render();
        }
        Ok(changed)
    }

    pub fn engine(&self) -> &Engine<S> {
        &self.engine
    }
}

impl<S: 'static> Action<S, ()> {
    /// Dispatch an action that takes no params.
    pub fn call(&self) -> Result<bool, ActionError> {
        self.dispatch(())
    }
}

impl<S, P> Clone for Action<S, P> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            bind: Arc::clone(&self.bind),
        }
    }
}

impl<S, P> fmt::Debug for Action<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("engine", &self.engine.shared.id)
            .finish_non_exhaustive()
    }
}
