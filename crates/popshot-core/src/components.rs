//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems.

use serde::{Deserialize, Serialize};

/// A rising target. The radius is fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub radius: f64,
}

/// Marks an entity as a projectile. Size is a render concern and comes
/// from configuration; collision uses the target radius only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile;

/// Monotonic spawn sequence number. Defines store order, which drives
/// collision tie-breaks, render order and snapshot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);
