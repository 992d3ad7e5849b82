//! Error types for the persistence boundary
//!
//! The engine never talks to a backend itself; the host executes
//! [`Cmd::PersistRow`](crate::commands::Cmd) and reports the outcome back.
//! A failed save is carried as a [`SaveError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced by the host's persistence callback.
///
/// Constructed by the host from whatever its transport/validation layer
/// returned, and delivered to the engine via
/// [`SessionMsg::SaveResolved`](crate::messages::SessionMsg). The engine
/// keeps the most recent one on state so renderers can surface a
/// notification.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("save rejected: {message}")]
pub struct SaveError {
    /// Human-readable reason, suitable for a UI notification
    pub message: String,
}

impl SaveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_error_display() {
        let err = SaveError::new("stage must not be empty");
        assert_eq!(err.to_string(), "save rejected: stage must not be empty");
    }
}
