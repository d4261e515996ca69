//! Headless driver: scripted hands -> gesture worker -> game loop.

use std::sync::mpsc;

use tracing::{info, warn};

use popshot_core::render::DrawList;
use popshot_sim::FrameOrchestrator;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::game_loop::{self, LoopSettings, LoopSummary};
use crate::gesture_feed;
use crate::scripted::{self, ScriptedHands};
use crate::state::AppState;

/// Run `script` through a full frame pipeline and return the loop totals.
///
/// With `run_frames == 0` the loop runs until the script has been fed and
/// classified. Otherwise it stops after `run_frames` frames and the hand
/// threads are left to finish the script on their own.
pub fn run_headless(config: AppConfig, script: ScriptedHands) -> Result<LoopSummary, AppError> {
    let engine = FrameOrchestrator::new(config.sim.clone())?;
    let state = AppState::new();

    info!(
        seed = config.sim.seed,
        frames = config.run_frames,
        script_frames = script.len(),
        "starting headless run"
    );

    let (hands_tx, hands_rx) = mpsc::channel();
    let worker = gesture_feed::spawn_gesture_worker(
        hands_rx,
        config.sim.viewport,
        config.sim.gesture,
        state.classifications.clone(),
    )?;
    let source = scripted::spawn_scripted_source(script, config.gesture_rate, hands_tx)?;

    let (cmd_tx, game) = game_loop::spawn_game_loop(
        engine,
        DrawList::new(),
        LoopSettings {
            frame_rate: config.frame_rate,
            max_frames: config.run_frames,
        },
        state.classifications.clone(),
        state.latest_snapshot.clone(),
    )?;
    if let Ok(mut tx) = state.command_tx.lock() {
        *tx = Some(cmd_tx);
    }

    if config.run_frames == 0 {
        source
            .join()
            .map_err(|_| AppError::ThreadPanicked("popshot-hands"))?;
        worker
            .join()
            .map_err(|_| AppError::ThreadPanicked("popshot-gesture"))?;
        if !state.shutdown() {
            warn!("game loop exited before shutdown");
        }
    }

    let summary = game
        .join()
        .map_err(|_| AppError::ThreadPanicked("popshot-game-loop"))?;
    if let Some(last) = state.latest_snapshot() {
        info!(tick = last.tick, anchor = ?last.anchor, "final frame");
    }
    Ok(summary)
}
