//! Snapshot system: reads the store and builds a FrameSnapshot.
//!
//! Read-only; never modifies the store.

use popshot_core::enums::Action;
use popshot_core::events::SimEvent;
use popshot_core::state::{FrameSnapshot, ProjectileView, TargetView};
use popshot_core::types::{FrameTime, Position};

use crate::store::EntityStore;

pub fn build_snapshot(
    store: &EntityStore,
    time: &FrameTime,
    action: Action,
    anchor: Position,
    events: Vec<SimEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        tick: time.tick,
        action,
        anchor,
        targets: store
            .targets()
            .into_iter()
            .map(|t| TargetView {
                position: t.position,
                radius: t.radius,
            })
            .collect(),
        projectiles: store
            .projectiles()
            .into_iter()
            .map(|p| ProjectileView {
                position: p.position,
            })
            .collect(),
        events,
    }
}
