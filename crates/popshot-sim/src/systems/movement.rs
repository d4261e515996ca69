//! Kinematic update: every entity rises by its kind's fixed speed.

use glam::DVec2;

use popshot_core::components::{Projectile, Target};
use popshot_core::config::SimConfig;
use popshot_core::types::Position;

use crate::store::EntityStore;

/// Per-tick displacement for a kind moving up at `speed`.
/// Origin is top-left, so rising means decreasing y.
fn rise(speed: f64) -> DVec2 {
    DVec2::new(0.0, -speed)
}

/// Move all targets and projectiles up by one tick.
pub fn run(store: &mut EntityStore, config: &SimConfig) {
    let world = store.world_mut();

    let step = rise(config.target.speed);
    for (_entity, (pos, _target)) in world.query_mut::<(&mut Position, &Target)>() {
        *pos = Position::from(pos.as_vec2() + step);
    }

    let step = rise(config.projectile.speed);
    for (_entity, (pos, _projectile)) in world.query_mut::<(&mut Position, &Projectile)>() {
        *pos = Position::from(pos.as_vec2() + step);
    }
}
