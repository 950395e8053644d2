//! Builder for constructing engines.

use crate::builder::config::EngineConfig;
use crate::builder::error::BuildError;
use crate::engine::{Engine, RenderCallback};
use std::sync::Arc;
use stillwater::validation::Validation;

/// Builder for constructing engines with a fluent API.
///
/// When a render callback is supplied the built engine is already
/// bootstrapped.
pub struct EngineBuilder<S> {
    initial: Option<Arc<S>>,
    render: Option<RenderCallback>,
    config: EngineConfig,
}

impl<S: 'static> EngineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            render: None,
            config: EngineConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(self, state: S) -> Self {
        self.initial_arc(Arc::new(state))
    }

    /// Set the initial state from an existing `Arc`.
    pub fn initial_arc(mut self, state: Arc<S>) -> Self {
        self.initial = Some(state);
        self
    }

    /// Bootstrap the engine with this render callback on build.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Cap the number of items a single drain may execute.
    pub fn max_drain_items(mut self, limit: usize) -> Self {
        self.config.max_drain_items = Some(limit);
        self
    }

    /// Keep a change journal of `capacity` records.
    pub fn journal_capacity(mut self, capacity: usize) -> Self {
        self.config.journal_capacity = Some(capacity);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the engine.
    /// Returns an error if the initial state is missing or the configuration
    /// is invalid.
    pub fn build(self) -> Result<Engine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if let Validation::Failure(errors) = self.config.validate() {
            return Err(BuildError::InvalidConfig(errors.iter().cloned().collect()));
        }

        let engine = Engine::from_parts(initial, self.config);
        if let Some(render) = self.render {
            engine.bootstrap(move || render());
        }

        Ok(engine)
    }
}

impl<S: 'static> Default for EngineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
