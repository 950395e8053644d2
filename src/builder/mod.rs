//! Builder API for ergonomic engine construction.
//!
//! This module provides the fluent engine builder, its configuration, the
//! `cursor!` macro and a few ready-made handlers.

pub mod config;
pub mod engine;
pub mod error;
pub mod macros;

pub use config::EngineConfig;
pub use engine::EngineBuilder;
pub use error::{BuildError, ConfigError};

use crate::core::Handler;
use std::sync::Arc;

/// Handler that stores the call params as the new value.
///
/// Equal values keep the current `Arc`, so assigning what is already there
/// neither writes nor renders.
///
/// # Example
///
/// ```
/// use cursorflux::builder::assign;
/// use std::sync::Arc;
///
/// let set_name = assign::<String>();
/// let current = Arc::new("ada".to_string());
///
/// assert!(Arc::ptr_eq(&set_name.apply(&current, &"ada".to_string()).unwrap(), &current));
/// assert_eq!(set_name.apply(&current, &"grace".to_string()).unwrap().as_str(), "grace");
/// ```
pub fn assign<T>() -> Handler<T, T>
where
    T: Clone + PartialEq + 'static,
{
    Handler::new(|current: &Arc<T>, value: &T| {
        if **current == *value {
            Arc::clone(current)
        } else {
            Arc::new(value.clone())
        }
    })
}

/// Handler that applies `update` only when `guard` accepts the current value
/// and params; otherwise the value is left untouched.
///
/// # Example
///
/// ```
/// use cursorflux::builder::update_if;
/// use std::sync::Arc;
///
/// let decrement = update_if(|n: &u32, _: &()| *n > 0, |n: &u32, _: &()| n - 1);
///
/// assert_eq!(*decrement.apply(&Arc::new(3), &()).unwrap(), 2);
///
/// let zero = Arc::new(0);
/// assert!(Arc::ptr_eq(&decrement.apply(&zero, &()).unwrap(), &zero));
/// ```
pub fn update_if<T, P, G, F>(guard: G, update: F) -> Handler<T, P>
where
    T: 'static,
    P: 'static,
    G: Fn(&T, &P) -> bool + Send + Sync + 'static,
    F: Fn(&T, &P) -> T + Send + Sync + 'static,
{
    Handler::new(move |current: &Arc<T>, params: &P| {
        if guard(&**current, params) {
            Arc::new(update(&**current, params))
        } else {
            Arc::clone(current)
        }
    })
}
