//! Navigation update functions
//!
//! Interprets the structural "advance" command: slow presses walk the
//! editable fields of the current row, a rapid repeat jumps to the same
//! field of the next row (committing the row being left, fire and forget).

use serde_json::Value;
use tracing::debug;

use crate::commands::Cmd;
use crate::messages::NavMsg;
use crate::model::{EngineState, RowId};
use crate::navigation::{next_navigable_field, AdvanceKind};

use super::session::persist_cmd;

/// Handle navigation messages
pub fn update_navigation(state: &mut EngineState, msg: NavMsg) -> Option<Cmd> {
    match msg {
        NavMsg::Advance { at } => {
            let session = state.current_session()?.clone();
            let kind = state.advance.track(at, state.config.row_advance_threshold);
            debug!(row = %session.row_id, field = %session.field, ?kind, "advance");
            match kind {
                AdvanceKind::Field => field_advance(state, &session.row_id, &session.field),
                AdvanceKind::Row => row_advance(state, &session.row_id, &session.field),
            }
        }
    }
}

/// Repoint the session to the next navigable field of the same row,
/// without committing the field being left.
fn field_advance(state: &mut EngineState, row_id: &RowId, current_field: &str) -> Option<Cmd> {
    let next = next_navigable_field(
        &state.config.editable_fields,
        state.visible_fields(),
        current_field,
    )?;
    // Same row: never flushes
    state.start_editing(row_id.clone(), next, Value::Null);
    Some(Cmd::batch(vec![Cmd::ArmOutsideCanceller, Cmd::Redraw]))
}

/// Commit the current row (fire and forget) and open the same field on the
/// next row, seeded with that row's own stored value.
fn row_advance(state: &mut EngineState, row_id: &RowId, field: &str) -> Option<Cmd> {
    let mut cmds = vec![persist_cmd(state.flush_pending())];
    state.close_session();
    cmds.push(Cmd::DisarmOutsideCanceller);

    if let Some(next_row) = state.mirror.row_after(row_id) {
        // Same field, next row; no flush possible, pending was drained
        state.start_editing(next_row, field.to_string(), Value::Null);
        cmds.push(Cmd::ArmOutsideCanceller);
    }

    cmds.push(Cmd::Redraw);
    Some(Cmd::batch(cmds))
}
