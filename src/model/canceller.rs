//! Outside-interaction cancellation state
//!
//! While a session is open, pointer-downs outside the active editor cancel
//! it. The engine is UI-agnostic, so "outside" is decided by identity, not
//! geometry: the host registers the surfaces that make up the active editor
//! and tags every pointer event with the surface it hit.
//!
//! Arming is deferred by one cooperative tick: opening a session emits
//! [`Cmd::ArmOutsideCanceller`](crate::commands::Cmd) and the host answers
//! with [`PointerMsg::Armed`](crate::messages::PointerMsg) on its next
//! tick. This keeps the very pointer-down that opened the session from
//! immediately cancelling it.

use serde::{Deserialize, Serialize};

/// Opaque identity of a rendered surface, assigned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u64);

/// Listener state for click-outside cancellation
#[derive(Debug, Clone, Default)]
pub struct OutsideCanceller {
    armed: bool,
    region: Vec<SurfaceId>,
}

impl OutsideCanceller {
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Activate outside detection (host tick after the session opened)
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Deactivate and forget the registered region
    pub fn disarm(&mut self) {
        self.armed = false;
        self.region.clear();
    }

    /// Register the surfaces that belong to the active editor
    pub fn set_region(&mut self, surfaces: Vec<SurfaceId>) {
        self.region = surfaces;
    }

    /// Whether a hit landed on the active editor
    pub fn contains(&self, hit: Option<SurfaceId>) -> bool {
        hit.is_some_and(|s| self.region.contains(&s))
    }

    /// True when an armed canceller sees a pointer-down outside the editor
    pub fn should_cancel(&self, hit: Option<SurfaceId>) -> bool {
        self.armed && !self.contains(hit)
    }
}
