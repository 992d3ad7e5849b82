//! Optimistic working copy of the displayed record collection
//!
//! The mirror is what the table renders from. It equals the source
//! collection whenever no edit session is open and diverges only for the
//! row currently (or most recently) being edited. Reverts are coarse: the
//! whole working copy snaps back to the last known source data.

use serde_json::Value;

use super::record::{Record, RowId};

/// Working copy of the record collection plus the last known source snapshot
#[derive(Debug, Clone, Default)]
pub struct OptimisticMirror {
    /// What the table renders from; carries uncommitted optimistic edits
    records: Vec<Record>,
    /// Last known authoritative data, the target of every revert
    source: Vec<Record>,
    /// Field carrying the row identifier
    row_id_key: String,
}

impl OptimisticMirror {
    pub fn new(row_id_key: impl Into<String>, source: Vec<Record>) -> Self {
        Self {
            records: source.clone(),
            source,
            row_id_key: row_id_key.into(),
        }
    }

    /// The records the table should render
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Find a row in the working copy by id
    pub fn row(&self, id: &RowId) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.id(&self.row_id_key).as_ref() == Some(id))
    }

    fn row_mut(&mut self, id: &RowId) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.id(&self.row_id_key).as_ref() == Some(id))
    }

    /// Current (possibly optimistic) value of one cell
    pub fn value(&self, id: &RowId, field: &str) -> Option<&Value> {
        self.row(id).and_then(|r| r.get(field))
    }

    /// Write an optimistic value into the working copy.
    ///
    /// Returns false when the row is unknown; the mirror never invents rows.
    pub fn set_value(&mut self, id: &RowId, field: &str, value: Value) -> bool {
        match self.row_mut(id) {
            Some(row) => {
                row.set(field, value);
                true
            }
            None => false,
        }
    }

    /// The id of the row immediately following `id` in iteration order
    pub fn row_after(&self, id: &RowId) -> Option<RowId> {
        let index = self
            .records
            .iter()
            .position(|r| r.id(&self.row_id_key).as_ref() == Some(id))?;
        self.records
            .get(index + 1)
            .and_then(|r| r.id(&self.row_id_key))
    }

    /// Discard all optimistic edits; the working copy snaps back to source
    pub fn reset_to_source(&mut self) {
        self.records = self.source.clone();
    }

    /// Replace the source snapshot without touching the working copy.
    ///
    /// Callers decide when the working copy follows; while a session is
    /// open the resync is deferred so in-progress input is not destroyed.
    pub fn replace_source(&mut self, source: Vec<Record>) {
        self.source = source;
    }

    /// Whether the working copy currently matches the source snapshot
    pub fn matches_source(&self) -> bool {
        self.records == self.source
    }
}
