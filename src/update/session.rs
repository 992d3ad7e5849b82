//! Session lifecycle update functions
//!
//! Thin handlers over the [`EngineState`] session methods; their job is to
//! turn returned [`SaveRequest`]s and session transitions into commands.

use crate::commands::Cmd;
use crate::messages::SessionMsg;
use crate::model::{EngineState, SaveRequest};

/// Handle session lifecycle messages
pub fn update_session(state: &mut EngineState, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::Start {
            row_id,
            field,
            fallback,
        } => {
            let flush = state.start_editing(row_id, field, fallback);
            Some(Cmd::batch(vec![
                persist_cmd(flush),
                Cmd::ArmOutsideCanceller,
                Cmd::Redraw,
            ]))
        }
        SessionMsg::UpdateValue(value) => {
            state.update_value(value);
            Some(Cmd::Redraw)
        }
        SessionMsg::Commit => {
            let request = state.commit()?;
            Some(persist_cmd(Some(request)))
        }
        SessionMsg::Cancel => {
            if state.cancel() {
                Some(Cmd::batch(vec![Cmd::DisarmOutsideCanceller, Cmd::Redraw]))
            } else {
                None
            }
        }
        SessionMsg::SaveResolved { row_id, result } => {
            let failed = result.is_err();
            let closed = state.resolve_save(&row_id, result);
            match (closed, failed) {
                // Stale success: nothing changed
                (false, false) => None,
                // Failure reverted the mirror even when the session
                // belongs to another row
                (false, true) => Some(Cmd::Redraw),
                (true, _) => Some(Cmd::batch(vec![Cmd::DisarmOutsideCanceller, Cmd::Redraw])),
            }
        }
    }
}

/// A flushed or committed save request as a command
pub(super) fn persist_cmd(request: Option<SaveRequest>) -> Cmd {
    match request {
        Some(SaveRequest { row_id, changes }) => Cmd::PersistRow { row_id, changes },
        None => Cmd::None,
    }
}
