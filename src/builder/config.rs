//! Engine configuration.

use crate::builder::error::ConfigError;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Tunables for an [`Engine`](crate::engine::Engine).
///
/// Every field is optional; the default config has no drain limit and no
/// journal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of work items a single drain may execute.
    pub max_drain_items: Option<usize>,

    /// Keep a change journal of this many records.
    pub journal_capacity: Option<usize>,
}

impl EngineConfig {
    /// Check every setting, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        if self.max_drain_items == Some(0) {
            checks.push(Validation::fail(ConfigError::ZeroDrainLimit));
        }

        if self.journal_capacity == Some(0) {
            checks.push(Validation::fail(ConfigError::ZeroJournalCapacity));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
