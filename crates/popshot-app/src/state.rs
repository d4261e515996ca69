//! Driver state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use popshot_core::state::FrameSnapshot;

use crate::gesture_feed::ClassificationSlot;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopCommand {
    /// Stop requesting frames and exit after the current one.
    Shutdown,
}

/// Handles shared with a running game loop.
///
/// - `command_tx` is `None` until the loop is started
/// - `latest_snapshot` is written by the loop after every frame
/// - `classifications` is written by the gesture worker, drained by the loop
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    pub classifications: ClassificationSlot,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            classifications: ClassificationSlot::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask a running loop to stop. Returns false if none was started or it
    /// already exited.
    pub fn shutdown(&self) -> bool {
        let Ok(tx) = self.command_tx.lock() else {
            return false;
        };
        match tx.as_ref() {
            Some(tx) => tx.send(GameLoopCommand::Shutdown).is_ok(),
            None => false,
        }
    }

    pub fn latest_snapshot(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}
