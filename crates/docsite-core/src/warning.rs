//! Non-fatal merge diagnostics

use serde::{Deserialize, Serialize};
use std::fmt;

/// A path where two fragments supplied different values
///
/// Resolution still succeeds; the `winner` value is the one kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictWarning {
    /// Fully-qualified key path
    pub path: String,

    /// Fragment whose value was discarded
    pub loser: String,

    /// Fragment whose value was kept
    pub winner: String,
}

impl fmt::Display for ConflictWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: value from `{}` overridden by `{}`",
            self.path, self.loser, self.winner
        )
    }
}

/// Receives warnings from a successful resolution
pub trait WarningSink {
    fn emit(&mut self, warning: &ConflictWarning);
}

impl WarningSink for Vec<ConflictWarning> {
    fn emit(&mut self, warning: &ConflictWarning) {
        self.push(warning.clone());
    }
}

/// Emits each warning as a `tracing` event at WARN level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn emit(&mut self, warning: &ConflictWarning) {
        tracing::warn!(
            path = %warning.path,
            loser = %warning.loser,
            winner = %warning.winner,
            "Conflicting configuration value"
        );
    }
}
