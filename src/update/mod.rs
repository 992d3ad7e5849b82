//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each handler
//! mutates [`EngineState`] synchronously and returns the side effects the
//! host must perform.

mod data;
mod navigation;
mod pointer;
mod session;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EngineState;

pub use data::update_data;
pub use navigation::update_navigation;
pub use pointer::update_pointer;
pub use session::update_session;

/// Main update function - dispatches to sub-handlers
pub fn update(state: &mut EngineState, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Session(m) => session::update_session(state, m),
        Msg::Nav(m) => navigation::update_navigation(state, m),
        Msg::Pointer(m) => pointer::update_pointer(state, m),
        Msg::Data(m) => data::update_data(state, m),
    }
}
