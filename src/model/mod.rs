//! Engine state model
//!
//! [`EngineState`] aggregates the optimistic mirror, the edit session
//! store, and the outside-interaction canceller. All mutation flows
//! through [`update`](crate::update::update); renderers read through the
//! accessors here.
//!
//! ```text
//! EngineState
//! ├── OptimisticMirror (working copy + source snapshot)
//! ├── Option<EditSession> (at most one point of edit focus)
//! ├── PendingChanges (uncommitted edits for the session's row)
//! ├── OutsideCanceller (click-outside detection)
//! └── AdvanceTracker (row/field-advance timing)
//! ```

mod canceller;
mod mirror;
mod record;
mod session;

pub use canceller::{OutsideCanceller, SurfaceId};
pub use mirror::OptimisticMirror;
pub use record::{Record, RowId};
pub use session::{EditSession, PendingChanges, SaveRequest};

use serde_json::Value;

use crate::config::EngineConfig;
use crate::error::SaveError;
use crate::navigation::AdvanceTracker;

/// Complete state of one inline-editing engine
#[derive(Debug, Clone)]
pub struct EngineState {
    pub config: EngineConfig,
    /// Working copy of the displayed records
    pub mirror: OptimisticMirror,
    /// Click-outside listener state
    pub canceller: OutsideCanceller,
    /// Timing state for the advance heuristic
    pub(crate) advance: AdvanceTracker,
    session: Option<EditSession>,
    pending: PendingChanges,
    /// Columns currently rendered; navigation is restricted to the
    /// intersection with the editable field set
    visible_fields: Vec<String>,
    /// A source refresh arrived mid-session and waits for it to close
    pub(crate) refresh_deferred: bool,
    pub(crate) last_save_error: Option<SaveError>,
}

impl EngineState {
    /// Create an engine over the initial record collection.
    ///
    /// All editable fields start out visible; hosts narrow the set via
    /// `DataMsg::SetVisibleFields` as columns are hidden.
    pub fn new(config: EngineConfig, records: Vec<Record>) -> Self {
        let mirror = OptimisticMirror::new(config.row_id_key.clone(), records);
        let visible_fields = config.editable_fields.clone();
        Self {
            config,
            mirror,
            canceller: OutsideCanceller::default(),
            advance: AdvanceTracker::default(),
            session: None,
            pending: PendingChanges::default(),
            visible_fields,
            refresh_deferred: false,
            last_save_error: None,
        }
    }

    /// The active session, if any
    pub fn current_session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Whether a cell is being edited
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// In-progress value of the active editor
    pub fn current_edit_value(&self) -> Option<&Value> {
        self.session.as_ref().map(|s| &s.value)
    }

    /// Whether the session's row carries uncommitted edits
    pub fn has_pending_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_changes(&self) -> &PendingChanges {
        &self.pending
    }

    /// Records the table should render, optimistic edits included
    pub fn records(&self) -> &[Record] {
        self.mirror.records()
    }

    pub fn visible_fields(&self) -> &[String] {
        &self.visible_fields
    }

    pub fn set_visible_fields(&mut self, fields: Vec<String>) {
        self.visible_fields = fields;
    }

    /// Most recent save failure, for UI notification; cleared when the
    /// next session opens
    pub fn last_save_error(&self) -> Option<&SaveError> {
        self.last_save_error.as_ref()
    }
}
