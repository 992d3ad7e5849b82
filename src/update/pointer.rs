//! Pointer update functions
//!
//! Outside-interaction cancellation: once armed, any pointer-down that
//! misses the registered editor region cancels the session and reverts the
//! mirror.

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::EngineState;

/// Handle pointer messages
pub fn update_pointer(state: &mut EngineState, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Armed => {
            // The session may have closed between the arm request and the
            // host's tick; arming then would leak a listener.
            if state.is_editing() {
                state.canceller.arm();
            }
            None
        }
        PointerMsg::Down { hit } => {
            if state.is_editing() && state.canceller.should_cancel(hit) {
                debug!(?hit, "pointer-down outside editor, cancelling");
                state.cancel();
                return Some(Cmd::batch(vec![Cmd::DisarmOutsideCanceller, Cmd::Redraw]));
            }
            None
        }
    }
}
