//! gridedit - optimistic inline cell editing for record grids
//!
//! A headless engine implementing the Elm Architecture pattern: the host
//! feeds [`Msg`]s into [`update`], renders from [`EngineState`], and
//! executes the returned [`Cmd`]s (persistence calls, pointer listener
//! registration), reporting their outcomes back as messages.
//!
//! The engine owns the editing state machine: a single active (row, field)
//! session, an optimistic working copy of the records, uncommitted change
//! tracking, field/row navigation with a timing heuristic, and
//! click-outside cancellation. Rendering, transport, and validation stay
//! with the host.

pub mod binding;
pub mod commands;
pub mod config;
pub mod error;
pub mod messages;
pub mod model;
pub mod navigation;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EngineConfig;
pub use error::SaveError;
pub use messages::Msg;
pub use model::{EngineState, Record, RowId};
pub use update::update;
