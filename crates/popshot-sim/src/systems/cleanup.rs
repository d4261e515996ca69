//! Cleanup system: removes entities that have fully left the top edge.

use hecs::Entity;
use tracing::debug;

use popshot_core::config::SimConfig;
use popshot_core::enums::EntityKind;
use popshot_core::events::SimEvent;

use crate::store::EntityStore;

/// Despawn targets with `y < -radius` and projectiles with `y < -height`.
/// Scans a store-order snapshot, then despawns from the buffer.
pub fn run(
    store: &mut EntityStore,
    config: &SimConfig,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    for target in store.targets() {
        if target.position.y < -target.radius {
            despawn_buffer.push(target.entity);
            events.push(SimEvent::Despawned {
                kind: EntityKind::Target,
                position: target.position,
            });
            debug!(x = target.position.x, y = target.position.y, "target left viewport");
        }
    }

    let margin = config.projectile.height;
    for projectile in store.projectiles() {
        if projectile.position.y < -margin {
            despawn_buffer.push(projectile.entity);
            events.push(SimEvent::Despawned {
                kind: EntityKind::Projectile,
                position: projectile.position,
            });
            debug!(
                x = projectile.position.x,
                y = projectile.position.y,
                "projectile left viewport"
            );
        }
    }

    for entity in despawn_buffer.drain(..) {
        store.despawn(entity);
    }
}
