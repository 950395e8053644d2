//! Composite actions: several cursor/handler pairs behind one dispatch.

use crate::core::{Cursor, Handler};
use crate::engine::action::Bind;
use crate::engine::context::Engine;
use crate::engine::error::ActionError;
use crate::engine::queue::WorkItem;
use std::fmt;
use std::sync::Arc;

/// A static cursor with the handler to run at it.
pub struct ActionPair<S, P> {
    cursor: String,
    bind: Bind<S, P>,
}

impl<S: 'static, P: Send + Sync + 'static> ActionPair<S, P> {
    pub fn new<T: 'static>(cursor: Cursor<S, T>, handler: Handler<T, P>) -> Self {
        Self {
            cursor: cursor.key().to_string(),
            bind: Arc::new(move |params: &Arc<P>| {
                WorkItem::new(cursor.clone(), handler.clone(), Arc::clone(params))
            }),
        }
    }
}

impl<S, P> ActionPair<S, P> {
    /// Key of the pair's cursor.
    pub fn cursor(&self) -> &str {
        &self.cursor
    }
}

impl<S, P> fmt::Debug for ActionPair<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionPair")
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

/// A callable applying several pairs, in order, with shared params and a
/// single render.
///
/// Created with [`Engine::create_actions`].
pub struct CompositeAction<S, P> {
    engine: Engine<S>,
    pairs: Arc<[ActionPair<S, P>]>,
}

impl<S: 'static, P: Send + Sync + 'static> CompositeAction<S, P> {
    pub(crate) fn bind(engine: Engine<S>, pairs: Vec<ActionPair<S, P>>) -> Self {
        Self {
            engine,
            pairs: pairs.into(),
        }
    }

    /// Run every pair with `params`, then render once if any pair changed
    /// state.
    ///
    /// A failing pair stops the dispatch: earlier pairs stay applied and
    /// later pairs are not submitted.
    pub fn dispatch(&self, params: P) -> Result<bool, ActionError> {
        self.engine.ensure_bootstrapped()?;

        let params = Arc::new(params);
        let mut changed = false;
        for pair in self.pairs.iter() {
            changed |= self.engine.submit((pair.bind)(&params))?;
        }

        if changed {
            self.engine.fire_render();
        }
        Ok(changed)
    }

    /// Cursor keys of the pairs, in dispatch order.
    pub fn cursors(&self) -> Vec<&str> {
        self.pairs.iter().map(ActionPair::cursor).collect()
    }
}

impl<S: 'static> CompositeAction<S, ()> {
    /// Dispatch a composite action that takes no params.
    pub fn call(&self) -> Result<bool, ActionError> {
        self.dispatch(())
    }
}

impl<S, P> Clone for CompositeAction<S, P> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            pairs: Arc::clone(&self.pairs),
        }
    }
}

impl<S, P> fmt::Debug for CompositeAction<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeAction")
            .field("engine", &self.engine.shared.id)
            .field("pairs", &self.pairs)
            .finish()
    }
}
