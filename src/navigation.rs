//! Advance classification and field ordering
//!
//! A single "advance" command means two different things depending on how
//! quickly it repeats: slow presses walk across the editable fields of one
//! row, while two presses inside the threshold jump to the same field of
//! the next row -- a spreadsheet-like affordance for repeating one-column
//! edits down the table.
//!
//! Classification is deliberately pure (two timestamps in, answer out) so
//! it can be exercised without real timers.

use std::time::{Duration, Instant};

/// How an advance command was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceKind {
    /// Move to the next navigable field in the same row
    Field,
    /// Commit and move to the same field of the next row
    Row,
}

/// Classify an advance against the previous one.
///
/// A repeat within `threshold` is a row-advance; the first advance, or a
/// slow repeat, is a field-advance.
pub fn classify_advance(
    previous: Option<Instant>,
    now: Instant,
    threshold: Duration,
) -> AdvanceKind {
    match previous {
        Some(prev) if now.duration_since(prev) < threshold => AdvanceKind::Row,
        _ => AdvanceKind::Field,
    }
}

/// Remembers the wall-clock time of the most recent advance command
#[derive(Debug, Clone, Default)]
pub struct AdvanceTracker {
    last_advance: Option<Instant>,
}

impl AdvanceTracker {
    /// Record an advance and classify it against the previous one
    pub fn track(&mut self, now: Instant, threshold: Duration) -> AdvanceKind {
        let kind = classify_advance(self.last_advance, now, threshold);
        self.last_advance = Some(now);
        kind
    }

    pub fn last_advance(&self) -> Option<Instant> {
        self.last_advance
    }
}

/// The next editing target after `current`: the first field that follows it
/// in editable order and is currently visible as a column.
///
/// Returns None past the last navigable field, or when `current` is not an
/// editable field at all.
pub fn next_navigable_field(
    editable_fields: &[String],
    visible_fields: &[String],
    current: &str,
) -> Option<String> {
    let mut past_current = false;
    for field in editable_fields {
        if past_current && visible_fields.contains(field) {
            return Some(field.clone());
        }
        if field == current {
            past_current = true;
        }
    }
    None
}
