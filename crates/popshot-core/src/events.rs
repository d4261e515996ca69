//! Events emitted by the simulation during a frame tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Something that happened to the entity populations this tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    TargetSpawned { position: Position },
    ProjectileSpawned { position: Position },
    /// A spawn was requested by the gesture but refused.
    SpawnSuppressed {
        kind: EntityKind,
        reason: SuppressReason,
    },
    /// Entity left the top of the viewport.
    Despawned { kind: EntityKind, position: Position },
    /// A target/projectile pair collided; both were removed.
    Collision {
        target: Position,
        projectile: Position,
    },
}
