//! Command types for the Elm-style architecture
//!
//! Commands represent side effects to be performed by the host after an
//! update. `PersistRow` is the engine's only asynchronous boundary: the
//! host runs its save callback and reports the outcome back via
//! [`SessionMsg::SaveResolved`](crate::messages::SessionMsg). Nothing in
//! the engine waits for it, which is what makes the row-switch and
//! row-advance flushes fire-and-forget.

use crate::model::{PendingChanges, RowId};

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Visible state changed; re-render the grid
    Redraw,
    /// Invoke the persistence callback with these changes. The host must
    /// eventually answer with `SessionMsg::SaveResolved` for this row.
    PersistRow {
        row_id: RowId,
        changes: PendingChanges,
    },
    /// Register the global pointer-down listener on the next cooperative
    /// tick, then answer with `PointerMsg::Armed`. Deferral keeps the
    /// pointer-down that opened the session from cancelling it.
    ArmOutsideCanceller,
    /// Remove the global pointer-down listener immediately
    DisarmOutsideCanceller,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Batch commands, collapsing the trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Cmd::None))
            .collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // The grid shows the optimistic value already; resolution
            // triggers its own redraw
            Cmd::PersistRow { .. } => false,
            Cmd::ArmOutsideCanceller | Cmd::DisarmOutsideCanceller => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
        }
    }

    /// Walk this command (batches included) for persistence requests
    pub fn persist_requests(&self) -> Vec<(&RowId, &PendingChanges)> {
        match self {
            Cmd::PersistRow { row_id, changes } => vec![(row_id, changes)],
            Cmd::Batch(cmds) => cmds.iter().flat_map(Cmd::persist_requests).collect(),
            _ => Vec::new(),
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
