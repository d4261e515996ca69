//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Per-frame user intent derived from the current gesture.
/// Recomputed every frame; never carried over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[default]
    None,
    /// Thumb touching index fingertip.
    SpawnTarget,
    /// Thumb touching middle fingertip.
    SpawnProjectile,
}

/// The two entity populations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Target,
    Projectile,
}

/// Which hand drives classification when several are tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandSelection {
    /// First hand in tracker order.
    #[default]
    First,
    /// Last hand in tracker order (the legacy overwrite behaviour).
    Last,
}

/// Why a requested spawn did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuppressReason {
    /// Population cap reached.
    PopulationCap,
    /// Cooldown since the previous spawn of this kind still running.
    Cooldown,
}
