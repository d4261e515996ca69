//! Collision resolution between targets and projectiles.
//!
//! Pairs are tested in a fixed order: targets in store order (outer),
//! projectiles in store order (inner). The first projectile within a
//! target's radius consumes that target, and both are out of the pass.
//! Removal happens once, after the scan, from a despawn buffer.

use hecs::Entity;
use tracing::debug;

use popshot_core::events::SimEvent;

use crate::store::EntityStore;

/// Remove colliding (target, projectile) pairs. Returns the number of pairs.
///
/// A pair collides when the distance between positions is strictly less
/// than the target radius. Each entity takes part in at most one collision
/// per call.
pub fn run(
    store: &mut EntityStore,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) -> usize {
    despawn_buffer.clear();

    let targets = store.targets();
    let projectiles = store.projectiles();
    if targets.is_empty() || projectiles.is_empty() {
        return 0;
    }

    let mut consumed = vec![false; projectiles.len()];
    let mut pairs = 0;

    for target in &targets {
        let hit = projectiles.iter().enumerate().find(|(i, projectile)| {
            !consumed[*i] && target.position.distance_to(&projectile.position) < target.radius
        });

        if let Some((i, projectile)) = hit {
            consumed[i] = true;
            pairs += 1;
            despawn_buffer.push(target.entity);
            despawn_buffer.push(projectile.entity);
            events.push(SimEvent::Collision {
                target: target.position,
                projectile: projectile.position,
            });
            debug!(
                target_x = target.position.x,
                target_y = target.position.y,
                projectile_x = projectile.position.x,
                projectile_y = projectile.position.y,
                "target hit"
            );
        }
    }

    for entity in despawn_buffer.drain(..) {
        store.despawn(entity);
    }

    pairs
}
