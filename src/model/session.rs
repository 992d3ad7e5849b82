//! Edit session store
//!
//! Holds the single active (row, field) being edited, its in-progress
//! value, and the uncommitted changes for that row. The lifecycle
//! operations live here as [`EngineState`] methods; the `update` layer
//! wraps them in thin message handlers and turns the returned
//! [`SaveRequest`]s into commands.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::SaveError;

use super::record::RowId;
use super::EngineState;

/// The single active (row, field) pair currently being edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    pub row_id: RowId,
    pub field: String,
    /// In-progress edit value shown by the active editor
    pub value: Value,
}

/// Uncommitted field edits, scoped to the row of the active session.
///
/// Invariant: non-empty only while a session is open; emptied by commit
/// resolution, cancel, and the implicit flush on row switch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingChanges(Map<String, Value>);

impl PendingChanges {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Record an edit, overwriting any prior pending value for the field
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drain all changes, leaving the set empty
    pub fn take(&mut self) -> Self {
        Self(std::mem::take(&mut self.0))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// A persistence request produced by commit or an implicit flush.
///
/// The host serializes `changes` however its backend expects and reports
/// the outcome via `SessionMsg::SaveResolved`.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub row_id: RowId,
    pub changes: PendingChanges,
}

impl EngineState {
    /// Open an edit session on `(row_id, field)`.
    ///
    /// If a session is already open on a different row with uncommitted
    /// changes, those changes are flushed for persistence first (fire and
    /// forget: the returned [`SaveRequest`] is handed to the host and the
    /// new session opens without waiting). Opening on the same row only
    /// repoints the field; pending changes for the row are kept.
    ///
    /// The initial edit value is the mirror's value for the cell when the
    /// row is known, else `fallback`.
    pub fn start_editing(
        &mut self,
        row_id: RowId,
        field: impl Into<String>,
        fallback: Value,
    ) -> Option<SaveRequest> {
        let field = field.into();
        self.last_save_error = None;

        let flush = match &self.session {
            Some(open) if open.row_id != row_id && !self.pending.is_empty() => {
                debug!(
                    old_row = %open.row_id,
                    new_row = %row_id,
                    changes = self.pending.len(),
                    "flushing pending changes on row switch"
                );
                Some(SaveRequest {
                    row_id: open.row_id.clone(),
                    changes: self.pending.take(),
                })
            }
            _ => None,
        };

        let value = self
            .mirror
            .value(&row_id, &field)
            .cloned()
            .unwrap_or(fallback);

        debug!(row = %row_id, field = %field, "session opened");
        self.session = Some(EditSession {
            row_id,
            field,
            value,
        });
        // The listener for the previous session is gone the moment the
        // session changes; re-arming waits for the host's next tick.
        self.canceller.disarm();

        flush
    }

    /// Record a new value for the active cell.
    ///
    /// Writes through to the mirror immediately (visible on next render)
    /// and into the pending change set. Never contacts persistence.
    pub fn update_value(&mut self, value: Value) {
        let Some(session) = self.session.as_mut() else {
            warn!("update_value ignored: no active session");
            return;
        };
        session.value = value.clone();
        let row_id = session.row_id.clone();
        let field = session.field.clone();

        if !self.mirror.set_value(&row_id, &field, value.clone()) {
            debug!(row = %row_id, "optimistic write skipped: row not in mirror");
        }
        self.pending.insert(field, value);
    }

    /// Request persistence of the pending changes.
    ///
    /// No-op without a session or with nothing pending. The session stays
    /// open and the pending set is retained until the host resolves the
    /// save; a snapshot travels with the request.
    pub fn commit(&mut self) -> Option<SaveRequest> {
        let session = self.session.as_ref()?;
        if self.pending.is_empty() {
            return None;
        }
        debug!(row = %session.row_id, changes = self.pending.len(), "commit requested");
        Some(SaveRequest {
            row_id: session.row_id.clone(),
            changes: self.pending.clone(),
        })
    }

    /// Drain the pending changes for fire-and-forget persistence paths
    /// (row switch, row-advance), where the session is about to close or
    /// move and nobody waits for the outcome.
    pub(crate) fn flush_pending(&mut self) -> Option<SaveRequest> {
        let session = self.session.as_ref()?;
        if self.pending.is_empty() {
            return None;
        }
        Some(SaveRequest {
            row_id: session.row_id.clone(),
            changes: self.pending.take(),
        })
    }

    /// Abort the active session: revert the mirror to source data, drop the
    /// pending changes, close the session. Never contacts persistence.
    ///
    /// Returns false (and changes nothing) when no session is open.
    pub fn cancel(&mut self) -> bool {
        if self.session.is_none() {
            return false;
        }
        debug!("session cancelled");
        self.mirror.reset_to_source();
        self.pending.clear();
        self.close_session();
        true
    }

    /// Apply the outcome of a persistence request.
    ///
    /// Success closes the session when it still targets the saved row; a
    /// stale resolution (the session moved on or already closed) changes
    /// nothing. Failure reverts the entire mirror to source data -- also
    /// discarding optimistic edits of rows that were never rejected -- and
    /// records the error for the host to surface.
    ///
    /// Returns true when the active session was closed by this resolution.
    pub fn resolve_save(&mut self, row_id: &RowId, result: Result<(), SaveError>) -> bool {
        let targets_session = self
            .session
            .as_ref()
            .is_some_and(|s| s.row_id == *row_id);

        match result {
            Ok(()) => {
                if !targets_session {
                    debug!(row = %row_id, "stale save resolution ignored");
                    return false;
                }
                debug!(row = %row_id, "save succeeded, session closed");
                self.pending.clear();
                self.close_session();
                true
            }
            Err(err) => {
                tracing::error!(row = %row_id, error = %err, "save failed, reverting mirror");
                self.mirror.reset_to_source();
                self.last_save_error = Some(err);
                if targets_session {
                    self.pending.clear();
                    self.close_session();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Close the session and apply a source refresh that was deferred while
    /// the user was editing.
    pub(crate) fn close_session(&mut self) {
        self.session = None;
        self.canceller.disarm();
        if self.refresh_deferred {
            debug!("applying deferred source refresh");
            self.mirror.reset_to_source();
            self.refresh_deferred = false;
        }
    }
}
