//! Game loop thread. Drives the frame orchestrator at the render rate.
//!
//! Each frame takes the latest classification from the gesture slot (or
//! none), runs one orchestrated tick against the render surface and stores
//! the snapshot for polling. Commands arrive via `mpsc`.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::info;

use popshot_core::events::SimEvent;
use popshot_core::render::RenderSurface;
use popshot_core::state::FrameSnapshot;
use popshot_sim::gesture::Classification;
use popshot_sim::FrameOrchestrator;

use crate::error::AppError;
use crate::gesture_feed::ClassificationSlot;
use crate::state::GameLoopCommand;

/// Nominal frame duration at `rate` Hz.
pub fn frame_duration(rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / rate.max(1) as u64)
}

/// Totals over one game loop run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopSummary {
    pub frames: u64,
    pub targets_spawned: u64,
    pub projectiles_spawned: u64,
    pub spawns_suppressed: u64,
    pub despawned: u64,
    pub collisions: u64,
    pub final_targets: usize,
    pub final_projectiles: usize,
}

impl LoopSummary {
    fn record(&mut self, snapshot: &FrameSnapshot) {
        self.frames += 1;
        for event in &snapshot.events {
            match event {
                SimEvent::TargetSpawned { .. } => self.targets_spawned += 1,
                SimEvent::ProjectileSpawned { .. } => self.projectiles_spawned += 1,
                SimEvent::SpawnSuppressed { .. } => self.spawns_suppressed += 1,
                SimEvent::Despawned { .. } => self.despawned += 1,
                SimEvent::Collision { .. } => self.collisions += 1,
            }
        }
        self.final_targets = snapshot.targets.len();
        self.final_projectiles = snapshot.projectiles.len();
    }
}

/// Loop parameters.
#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    pub frame_rate: u32,
    /// Stop after this many frames; 0 runs until `Shutdown`.
    pub max_frames: u64,
}

/// Spawn the game loop on its own thread. The orchestrator and surface
/// move into the thread.
///
/// Returns the command sender and a handle yielding the run summary.
pub fn spawn_game_loop<S>(
    engine: FrameOrchestrator,
    surface: S,
    settings: LoopSettings,
    classifications: ClassificationSlot,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>), AppError>
where
    S: RenderSurface + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = thread::Builder::new()
        .name("popshot-game-loop".into())
        .spawn(move || {
            run_game_loop(
                engine,
                surface,
                settings,
                cmd_rx,
                &classifications,
                &latest_snapshot,
            )
        })
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect or `max_frames`.
fn run_game_loop<S: RenderSurface>(
    mut engine: FrameOrchestrator,
    mut surface: S,
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    classifications: &ClassificationSlot,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) -> LoopSummary {
    let tick_duration = frame_duration(settings.frame_rate);
    let mut summary = LoopSummary::default();
    let mut next_tick_time = Instant::now();

    info!(frame_rate = settings.frame_rate, max_frames = settings.max_frames, "game loop started");

    'frames: loop {
        // 1. Drain pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Shutdown) => break 'frames,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'frames,
            }
        }

        if settings.max_frames > 0 && summary.frames >= settings.max_frames {
            break;
        }

        // 2. Apply the latest completed classification, never wait for one
        let classification = classifications.take().unwrap_or_else(Classification::none);

        // 3. Advance one frame
        let snapshot = engine.tick_classified(classification, &mut surface);
        summary.record(&snapshot);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next frame
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }

    info!(
        frames = summary.frames,
        collisions = summary.collisions,
        targets = summary.final_targets,
        projectiles = summary.final_projectiles,
        "game loop stopped"
    );
    summary
}
