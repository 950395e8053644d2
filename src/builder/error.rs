//! Errors for engine configuration and construction.

use thiserror::Error;

/// A single invalid configuration setting.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Drain limit must be at least 1. Omit it to drain without a limit")]
    ZeroDrainLimit,

    #[error("Journal capacity must be at least 1. Omit it to disable the journal")]
    ZeroJournalCapacity,
}

/// Errors that can occur when building an engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Invalid engine configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn summarize(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
