//! Frame orchestrator: the core of the simulation.
//!
//! `FrameOrchestrator` owns the entity store, the gesture classifier, the
//! RNG and all per-frame scratch state. Each call to [`FrameOrchestrator::tick`]
//! runs one frame to completion:
//!
//! 1. clear the surface and draw the store as the previous frame left it
//! 2. classify the frame's hands (action + sticky anchor)
//! 3. spawn at most one entity for the action
//! 4. move everything, despawn what left the viewport
//! 5. resolve collisions
//!
//! Spawning precedes movement, so a new entity moves and can collide in the
//! frame it appears, and is first drawn on the next frame. Completely
//! headless, enabling deterministic testing.

use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use popshot_core::config::{ConfigError, SimConfig};
use popshot_core::enums::Action;
use popshot_core::events::SimEvent;
use popshot_core::landmarks::HandFrame;
use popshot_core::render::RenderSurface;
use popshot_core::state::FrameSnapshot;
use popshot_core::types::{FrameTime, Position};

use crate::gesture::{self, Classification, GestureClassifier};
use crate::store::EntityStore;
use crate::systems;
use crate::systems::spawner::SpawnCooldowns;

/// Owns all mutable simulation state for one independent instance.
pub struct FrameOrchestrator {
    config: SimConfig,
    store: EntityStore,
    classifier: GestureClassifier,
    action: Action,
    time: FrameTime,
    rng: ChaCha8Rng,
    cooldowns: SpawnCooldowns,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl FrameOrchestrator {
    /// Create an orchestrator with an empty store. Fails on invalid config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            classifier: GestureClassifier::new(config.gesture, config.viewport),
            store: EntityStore::new(),
            action: Action::None,
            time: FrameTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            cooldowns: SpawnCooldowns::default(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        })
    }

    /// Run one frame, classifying `hands` inline.
    pub fn tick(&mut self, hands: &HandFrame, surface: &mut dyn RenderSurface) -> FrameSnapshot {
        self.render(surface);
        let classification = gesture::classify(hands, self.config.viewport, &self.config.gesture);
        self.advance(classification)
    }

    /// Run one frame with a classification produced off-thread.
    /// Pass [`Classification::none`] when no new result is available.
    pub fn tick_classified(
        &mut self,
        classification: Classification,
        surface: &mut dyn RenderSurface,
    ) -> FrameSnapshot {
        self.render(surface);
        self.advance(classification)
    }

    /// Draw the current store contents without advancing.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        systems::render::run(&self.store, &self.config, surface);
    }

    fn advance(&mut self, classification: Classification) -> FrameSnapshot {
        self.action = self.classifier.apply(classification);
        self.spawn_for_action();
        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.store,
            &self.time,
            self.action,
            self.classifier.anchor(),
            events,
        )
    }

    fn spawn_for_action(&mut self) {
        let tick = self.time.tick;
        match self.action {
            Action::None => {}
            Action::SpawnTarget => {
                systems::spawner::spawn_target(
                    &mut self.store,
                    &mut self.rng,
                    &self.config,
                    &mut self.cooldowns,
                    tick,
                    &mut self.events,
                );
            }
            Action::SpawnProjectile => {
                systems::spawner::spawn_projectile(
                    &mut self.store,
                    self.classifier.anchor(),
                    &self.config,
                    &mut self.cooldowns,
                    tick,
                    &mut self.events,
                );
            }
        }
    }

    /// Run the simulation systems in order.
    fn run_systems(&mut self) {
        // 1. Movement
        systems::movement::run(&mut self.store, &self.config);
        // 2. Cleanup (left the viewport)
        systems::cleanup::run(
            &mut self.store,
            &self.config,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 3. Collisions
        let pairs = systems::collision::run(
            &mut self.store,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        if pairs > 0 {
            debug!(tick = self.time.tick, pairs, "collisions resolved");
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }

    /// Action classified on the most recent tick.
    pub fn action(&self) -> Action {
        self.action
    }

    pub fn anchor(&self) -> Position {
        self.classifier.anchor()
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Direct store access for seeding scenarios.
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }
}
