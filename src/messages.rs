//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. The host translates
//! its input events (pointer, keyboard, data refreshes, save completions)
//! into messages and feeds them to [`update`](crate::update::update).

use std::time::Instant;

use serde_json::Value;

use crate::error::SaveError;
use crate::model::{Record, RowId, SurfaceId};

/// Edit session lifecycle messages
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMsg {
    /// Open a session on a cell (pointer action on a display cell).
    /// `fallback` seeds the editor when the row or field is not in the
    /// mirror.
    Start {
        row_id: RowId,
        field: String,
        fallback: Value,
    },
    /// Record a new value for the active cell (editor input)
    UpdateValue(Value),
    /// Persist the pending changes (structural "confirm" key)
    Commit,
    /// Abort the session and revert (structural "abort" key)
    Cancel,
    /// Outcome of a previously emitted `Cmd::PersistRow`, reported by the
    /// host when its save callback settles
    SaveResolved {
        row_id: RowId,
        result: Result<(), SaveError>,
    },
}

/// Navigation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMsg {
    /// Move to the next editable target (structural "advance" key). The
    /// timestamp drives the row/field-advance classification; carrying it
    /// in the message keeps the heuristic deterministic under test.
    Advance { at: Instant },
}

/// Pointer messages for outside-interaction cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMsg {
    /// Host acknowledgement of `Cmd::ArmOutsideCanceller`, delivered one
    /// cooperative tick after the session opened
    Armed,
    /// Pointer-down somewhere in the document; `hit` names the registered
    /// surface it landed on, if any
    Down { hit: Option<SurfaceId> },
}

/// External data messages
#[derive(Debug, Clone, PartialEq)]
pub enum DataMsg {
    /// The authoritative record collection was refetched
    SourceRefreshed(Vec<Record>),
    /// The set of rendered columns changed
    SetVisibleFields(Vec<String>),
    /// The surfaces making up the active editor, registered after render
    SetEditorRegion(Vec<SurfaceId>),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Session(SessionMsg),
    Nav(NavMsg),
    Pointer(PointerMsg),
    Data(DataMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Open a session on `(row_id, field)`
    pub fn start_editing(
        row_id: impl Into<RowId>,
        field: impl Into<String>,
        fallback: Value,
    ) -> Self {
        Msg::Session(SessionMsg::Start {
            row_id: row_id.into(),
            field: field.into(),
            fallback,
        })
    }

    /// Record a new value for the active cell
    pub fn update_value(value: Value) -> Self {
        Msg::Session(SessionMsg::UpdateValue(value))
    }

    pub fn commit() -> Self {
        Msg::Session(SessionMsg::Commit)
    }

    pub fn cancel() -> Self {
        Msg::Session(SessionMsg::Cancel)
    }

    /// Advance to the next editable target
    pub fn advance(at: Instant) -> Self {
        Msg::Nav(NavMsg::Advance { at })
    }

    /// Report a save outcome
    pub fn save_resolved(row_id: impl Into<RowId>, result: Result<(), SaveError>) -> Self {
        Msg::Session(SessionMsg::SaveResolved {
            row_id: row_id.into(),
            result,
        })
    }
}
