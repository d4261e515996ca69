//! Entity store: the two live populations (targets, projectiles).
//!
//! Backed by a hecs world. hecs does not preserve insertion order across
//! despawns, so every entity carries a [`SpawnOrder`] and all ordered reads
//! go through [`EntityStore::targets`] / [`EntityStore::projectiles`],
//! which return snapshots sorted by spawn order. Systems scan a snapshot
//! and despawn afterwards; the live world is never mutated mid-scan.

use hecs::{Entity, World};

use popshot_core::components::{Projectile, SpawnOrder, Target};
use popshot_core::types::Position;

/// Read-only copy of a live target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRecord {
    pub entity: Entity,
    pub order: SpawnOrder,
    pub position: Position,
    pub radius: f64,
}

/// Read-only copy of a live projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileRecord {
    pub entity: Entity,
    pub order: SpawnOrder,
    pub position: Position,
}

/// Owns every live entity.
#[derive(Default)]
pub struct EntityStore {
    world: World,
    next_order: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_order(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next_order);
        self.next_order += 1;
        order
    }

    /// Append a target. The radius is fixed for the target's lifetime.
    pub fn spawn_target(&mut self, position: Position, radius: f64) -> Entity {
        let order = self.take_order();
        self.world.spawn((Target { radius }, position, order))
    }

    /// Append a projectile.
    pub fn spawn_projectile(&mut self, position: Position) -> Entity {
        let order = self.take_order();
        self.world.spawn((Projectile, position, order))
    }

    /// Remove an entity. Returns false if it was already gone.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn position(&self, entity: Entity) -> Option<Position> {
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }

    pub fn target_count(&self) -> usize {
        self.world.query::<&Target>().iter().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    /// All live targets in store order.
    pub fn targets(&self) -> Vec<TargetRecord> {
        let mut records: Vec<TargetRecord> = self
            .world
            .query::<(&SpawnOrder, &Position, &Target)>()
            .iter()
            .map(|(entity, (order, position, target))| TargetRecord {
                entity,
                order: *order,
                position: *position,
                radius: target.radius,
            })
            .collect();
        records.sort_by_key(|r| r.order);
        records
    }

    /// All live projectiles in store order.
    pub fn projectiles(&self) -> Vec<ProjectileRecord> {
        let mut records: Vec<ProjectileRecord> = self
            .world
            .query::<(&SpawnOrder, &Position, &Projectile)>()
            .iter()
            .map(|(entity, (order, position, _projectile))| ProjectileRecord {
                entity,
                order: *order,
                position: *position,
            })
            .collect();
        records.sort_by_key(|r| r.order);
        records
    }

    /// Remove every entity. Spawn order keeps counting.
    pub fn clear(&mut self) {
        self.world.clear();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
