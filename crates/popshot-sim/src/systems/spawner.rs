//! Entity spawning driven by the classified action.
//!
//! Targets appear at a random x on the bottom edge; projectiles at the
//! current anchor. Each call spawns at most one entity. Optional limits
//! (population cap, per-kind cooldown) refuse a spawn and report why.

use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use popshot_core::config::SimConfig;
use popshot_core::enums::{EntityKind, SuppressReason};
use popshot_core::events::SimEvent;
use popshot_core::types::Position;

use crate::store::EntityStore;

/// Tick of the most recent spawn per kind, for cooldown checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnCooldowns {
    last_target_tick: Option<u64>,
    last_projectile_tick: Option<u64>,
}

impl SpawnCooldowns {
    fn last(&self, kind: EntityKind) -> Option<u64> {
        match kind {
            EntityKind::Target => self.last_target_tick,
            EntityKind::Projectile => self.last_projectile_tick,
        }
    }

    fn record(&mut self, kind: EntityKind, tick: u64) {
        match kind {
            EntityKind::Target => self.last_target_tick = Some(tick),
            EntityKind::Projectile => self.last_projectile_tick = Some(tick),
        }
    }
}

/// Check cooldown and cap for `kind`. `None` means the spawn may proceed.
fn check_limits(
    store: &EntityStore,
    config: &SimConfig,
    cooldowns: &SpawnCooldowns,
    kind: EntityKind,
    tick: u64,
) -> Option<SuppressReason> {
    let cooldown = config.limits.cooldown_frames as u64;
    if cooldown > 0 {
        if let Some(last) = cooldowns.last(kind) {
            if tick.saturating_sub(last) <= cooldown {
                return Some(SuppressReason::Cooldown);
            }
        }
    }

    let (live, cap) = match kind {
        EntityKind::Target => (store.target_count(), config.limits.max_targets),
        EntityKind::Projectile => (store.projectile_count(), config.limits.max_projectiles),
    };
    match cap {
        Some(cap) if live >= cap => Some(SuppressReason::PopulationCap),
        _ => None,
    }
}

fn suppress(kind: EntityKind, reason: SuppressReason, events: &mut Vec<SimEvent>) {
    match reason {
        SuppressReason::PopulationCap => warn!(?kind, "population cap reached, spawn refused"),
        SuppressReason::Cooldown => debug!(?kind, "spawn cooling down"),
    }
    events.push(SimEvent::SpawnSuppressed { kind, reason });
}

/// Append a target at a uniformly random x on the bottom edge.
pub fn spawn_target(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    cooldowns: &mut SpawnCooldowns,
    tick: u64,
    events: &mut Vec<SimEvent>,
) -> Option<Entity> {
    if let Some(reason) = check_limits(store, config, cooldowns, EntityKind::Target, tick) {
        suppress(EntityKind::Target, reason, events);
        return None;
    }

    let x = rng.gen_range(0.0..config.viewport.width);
    let position = Position::new(x, config.viewport.height);
    let entity = store.spawn_target(position, config.target.radius);

    cooldowns.record(EntityKind::Target, tick);
    events.push(SimEvent::TargetSpawned { position });
    debug!(x, tick, "target spawned");
    Some(entity)
}

/// Append a projectile at the anchor.
pub fn spawn_projectile(
    store: &mut EntityStore,
    anchor: Position,
    config: &SimConfig,
    cooldowns: &mut SpawnCooldowns,
    tick: u64,
    events: &mut Vec<SimEvent>,
) -> Option<Entity> {
    if let Some(reason) = check_limits(store, config, cooldowns, EntityKind::Projectile, tick) {
        suppress(EntityKind::Projectile, reason, events);
        return None;
    }

    let entity = store.spawn_projectile(anchor);

    cooldowns.record(EntityKind::Projectile, tick);
    events.push(SimEvent::ProjectileSpawned { position: anchor });
    debug!(x = anchor.x, y = anchor.y, tick, "projectile spawned");
    Some(entity)
}
