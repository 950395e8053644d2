//! The work queue and its single-owner drain loop.
//!
//! Every dispatch appends one resolved work item. The call that finds nobody
//! draining becomes the owner and executes items front to back until the
//! queue is empty, including items appended while it runs. Any other call
//! (a handler dispatching another action, say) only appends and returns.

use crate::core::{Cursor, Handler, HandlerError, Store};
use crate::engine::context::Engine;
use crate::engine::error::ActionError;
use std::collections::VecDeque;
use std::sync::Arc;

type Execute<S> = Box<dyn FnOnce(&Store<S>) -> Result<bool, HandlerError> + Send>;

/// A resolved `{cursor, handler, params}` triple, ready to run.
///
/// The sub-state type is erased so items for different cursors share one
/// queue.
pub(crate) struct WorkItem<S> {
    cursor: String,
    execute: Execute<S>,
}

impl<S: 'static> WorkItem<S> {
    pub(crate) fn new<T, P>(cursor: Cursor<S, T>, handler: Handler<T, P>, params: Arc<P>) -> Self
    where
        T: 'static,
        P: Send + Sync + 'static,
    {
        Self {
            cursor: cursor.key().to_string(),
            execute: Box::new(move |store: &Store<S>| {
                change_state(store, &cursor, &handler, &params)
            }),
        }
    }
}

/// Pending work plus the drain-ownership flag, guarded by one mutex so that
/// "append, then check for an owner" is a single step.
pub(crate) struct WorkQueue<S> {
    pub(crate) items: VecDeque<WorkItem<S>>,
    pub(crate) draining: bool,
}

impl<S> Default for WorkQueue<S> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
            draining: false,
        }
    }
}

/// Apply one handler at one cursor; `true` if it produced a new value.
pub(crate) fn change_state<S, T: 'static, P: 'static>(
    store: &Store<S>,
    cursor: &Cursor<S, T>,
    handler: &Handler<T, P>,
    params: &P,
) -> Result<bool, HandlerError> {
    let old = store.get(cursor);
    let new = handler.apply(&old, params)?;
    if Arc::ptr_eq(&old, &new) {
        return Ok(false);
    }
    store.set(cursor, new);
    Ok(true)
}

impl<S: 'static> Engine<S> {
    /// Queue `item` and, unless another call is already draining, drain the
    /// queue to exhaustion.
    ///
    /// Returns whether any executed item changed state. A reentrant call
    /// returns `Ok(false)` right away; its item runs in the owner's loop.
    ///
    /// On error, items already executed stay committed and items not yet
    /// reached stay queued for the next owner.
    pub(crate) fn submit(&self, item: WorkItem<S>) -> Result<bool, ActionError> {
        let shared = &self.shared;

        {
            let mut queue = shared.queue.lock();
            queue.items.push_back(item);
            if queue.draining {
                tracing::trace!(
                    engine = %shared.id,
                    pending = queue.items.len(),
                    "Work queued behind active drain"
                );
                return Ok(false);
            }
            queue.draining = true;
        }

        // Early return or panic. The normal exit clears the flag under the
        // lock that observes the empty queue.
        let release = scopeguard::guard((), |_| {
            shared.queue.lock().draining = false;
        });

        let limit = shared.config.max_drain_items;
        let mut executed = 0usize;
        let mut changed = false;

        loop {
            let next = {
                let mut queue = shared.queue.lock();
                if limit.is_some_and(|limit| executed >= limit) && !queue.items.is_empty() {
                    Err(queue.items.len())
                } else {
                    let item = queue.items.pop_front();
                    if item.is_none() {
                        queue.draining = false;
                    }
                    Ok(item)
                }
            };

            let item = match next {
                Ok(Some(item)) => item,
                Ok(None) => {
                    scopeguard::ScopeGuard::into_inner(release);
                    break;
                }
                Err(pending) => {
                    let limit = limit.unwrap_or(executed);
                    tracing::warn!(engine = %shared.id, limit, pending, "Drain limit exceeded");
                    return Err(ActionError::DrainLimitExceeded { limit, pending });
                }
            };

            let WorkItem { cursor, execute } = item;
            tracing::trace!(engine = %shared.id, cursor = %cursor, "Executing queued action");
            executed += 1;

            let item_changed = execute(&shared.store).map_err(|err| {
                tracing::warn!(
                    engine = %shared.id,
                    cursor = %cursor,
                    error = %err,
                    "Handler failed; remaining work stays queued"
                );
                err
            })?;

            if item_changed {
                self.record_change(&cursor);
                changed = true;
            }
        }

        if changed {
            tracing::debug!(engine = %shared.id, executed, "Global state has been changed");
        }
        Ok(changed)
    }
}
