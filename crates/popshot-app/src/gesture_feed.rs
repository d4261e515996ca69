//! Gesture worker thread and the latest-classification slot.
//!
//! The tracker and the render clock run at different rates. The worker
//! classifies every tracker frame as it arrives and publishes the result
//! into a [`ClassificationSlot`]; the game loop takes whatever is there at
//! the start of its next frame and never waits for the worker.

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use popshot_core::config::GestureConfig;
use popshot_core::landmarks::HandFrame;
use popshot_core::types::Viewport;
use popshot_sim::gesture::{self, Classification};

use crate::error::AppError;

/// Single-entry buffer holding the most recent unconsumed classification.
#[derive(Debug, Clone, Default)]
pub struct ClassificationSlot {
    inner: Arc<Mutex<Option<Classification>>>,
}

impl ClassificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending result. A newer result without an anchor keeps
    /// the pending anchor, so a wrist update is not lost when the hand
    /// drops out before the game loop reads the slot.
    pub fn publish(&self, classification: Classification) {
        if let Ok(mut slot) = self.inner.lock() {
            let anchor = classification
                .anchor
                .or_else(|| slot.and_then(|pending| pending.anchor));
            *slot = Some(Classification {
                action: classification.action,
                anchor,
            });
        }
    }

    /// Take the pending result, leaving the slot empty.
    pub fn take(&self) -> Option<Classification> {
        self.inner.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Spawn the worker. It runs until every sender of `frames` is dropped and
/// returns the number of frames it classified.
pub fn spawn_gesture_worker(
    frames: Receiver<HandFrame>,
    viewport: Viewport,
    config: GestureConfig,
    slot: ClassificationSlot,
) -> Result<JoinHandle<u64>, AppError> {
    thread::Builder::new()
        .name("popshot-gesture".into())
        .spawn(move || {
            let mut classified = 0u64;
            for frame in frames {
                let classification = gesture::classify(&frame, viewport, &config);
                debug!(
                    hands = frame.hands.len(),
                    action = ?classification.action,
                    "frame classified"
                );
                slot.publish(classification);
                classified += 1;
            }
            info!(classified, "gesture worker stopped");
            classified
        })
        .map_err(AppError::Spawn)
}
