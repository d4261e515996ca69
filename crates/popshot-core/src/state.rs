//! Frame snapshot: the visible simulation state after a tick.

use serde::{Deserialize, Serialize};

use crate::enums::Action;
use crate::events::SimEvent;
use crate::types::Position;

/// Complete simulation state produced by each orchestrated frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Number of completed ticks, including this one.
    pub tick: u64,
    /// Action classified for this tick.
    pub action: Action,
    /// Projectile anchor after this tick's classification.
    pub anchor: Position,
    /// Live targets in store order.
    pub targets: Vec<TargetView>,
    /// Live projectiles in store order.
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub position: Position,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
}

impl FrameSnapshot {
    pub fn collisions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::Collision { .. }))
            .count()
    }
}
