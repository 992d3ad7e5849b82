//! Engine configuration
//!
//! Supplied once by the table feature when the engine is created. The
//! editable field set is immutable for the lifetime of the engine; the
//! visible field set lives on [`EngineState`](crate::model::EngineState)
//! because it changes as columns are shown and hidden.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Interval under which two consecutive advance commands are treated as a
/// row-advance rather than a field-advance.
pub const DEFAULT_ROW_ADVANCE_THRESHOLD: Duration = Duration::from_millis(300);

/// Static configuration for one editing engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Record field that carries the unique row identifier (e.g. "id")
    #[serde(default = "default_row_id_key")]
    pub row_id_key: String,
    /// Fields eligible for inline editing, in navigation order
    pub editable_fields: Vec<String>,
    /// Threshold for the row-advance timing heuristic
    #[serde(default = "default_row_advance_threshold")]
    pub row_advance_threshold: Duration,
}

fn default_row_id_key() -> String {
    "id".to_string()
}

fn default_row_advance_threshold() -> Duration {
    DEFAULT_ROW_ADVANCE_THRESHOLD
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            row_id_key: default_row_id_key(),
            editable_fields: Vec::new(),
            row_advance_threshold: DEFAULT_ROW_ADVANCE_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Config with the default id key and advance threshold
    pub fn new(editable_fields: Vec<String>) -> Self {
        Self {
            editable_fields,
            ..Self::default()
        }
    }

    /// Override the row identifier field
    pub fn with_row_id_key(mut self, key: impl Into<String>) -> Self {
        self.row_id_key = key.into();
        self
    }

    /// Override the row-advance threshold
    pub fn with_row_advance_threshold(mut self, threshold: Duration) -> Self {
        self.row_advance_threshold = threshold;
        self
    }
}
