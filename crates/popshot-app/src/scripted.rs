//! Scripted hand source standing in for the camera + landmark tracker.
//!
//! Produces synthetic 21-point hands for a few poses so the driver runs
//! without hardware. The wrist sweeps across the viewport while a step
//! plays, which moves the projectile anchor.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::info;

use popshot_core::landmarks::*;

use crate::error::AppError;

/// Hand pose for one scripted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    /// No hand in view.
    Absent,
    /// Fingers spread, no pinch.
    Open,
    /// Thumb on index tip.
    IndexPinch,
    /// Thumb on middle tip.
    MiddlePinch,
}

/// Build a tracker frame for `pose` with the wrist at normalized `wrist`.
pub fn pose_frame(pose: Pose, wrist: (f64, f64)) -> HandFrame {
    let (wx, wy) = wrist;
    let at = |dx: f64, dy: f64| Landmark::new(wx + dx, wy + dy);

    // Fingertips sit above the wrist; only the four indexed points matter.
    let thumb = at(-0.08, -0.10);
    let spread_index = at(-0.02, -0.20);
    let spread_middle = at(0.02, -0.22);

    let (index, middle) = match pose {
        Pose::Absent => return HandFrame::empty(),
        Pose::Open => (spread_index, spread_middle),
        Pose::IndexPinch => (thumb, spread_middle),
        Pose::MiddlePinch => (spread_index, thumb),
    };

    let mut points = vec![at(0.0, -0.05); LANDMARK_COUNT];
    points[WRIST] = at(0.0, 0.0);
    points[THUMB_TIP] = thumb;
    points[INDEX_TIP] = index;
    points[MIDDLE_TIP] = middle;
    HandFrame::single(HandLandmarks::new(points))
}

/// A finite sequence of poses, each held for a number of tracker frames.
#[derive(Debug, Clone)]
pub struct ScriptedHands {
    steps: Vec<(Pose, u32)>,
    step: usize,
    frame_in_step: u32,
    wrist_y: f64,
}

impl ScriptedHands {
    pub fn new(steps: Vec<(Pose, u32)>) -> Self {
        Self {
            steps,
            step: 0,
            frame_in_step: 0,
            wrist_y: 0.85,
        }
    }

    /// Short demo: launch a few targets, aim, fire a burst, rest, repeat.
    pub fn demo(cycles: usize) -> Self {
        let pattern = [
            (Pose::Absent, 10),
            (Pose::IndexPinch, 3),
            (Pose::Open, 20),
            (Pose::MiddlePinch, 6),
            (Pose::Open, 20),
        ];
        let steps = pattern.iter().copied().cycle().take(pattern.len() * cycles).collect();
        Self::new(steps)
    }

    /// Total tracker frames the script produces.
    pub fn len(&self) -> u64 {
        self.steps.iter().map(|(_, n)| *n as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for ScriptedHands {
    type Item = HandFrame;

    fn next(&mut self) -> Option<HandFrame> {
        loop {
            let &(pose, frames) = self.steps.get(self.step)?;
            if self.frame_in_step < frames {
                // Sweep the wrist left to right across the step.
                let t = (self.frame_in_step as f64 + 0.5) / frames as f64;
                self.frame_in_step += 1;
                return Some(pose_frame(pose, (0.1 + 0.8 * t, self.wrist_y)));
            }
            self.step += 1;
            self.frame_in_step = 0;
        }
    }
}

/// Feed `script` into `tx` at `rate` Hz on its own thread. Stops when the
/// script ends or the receiver is gone.
pub fn spawn_scripted_source(
    script: ScriptedHands,
    rate: u32,
    tx: Sender<HandFrame>,
) -> Result<JoinHandle<()>, AppError> {
    let interval = Duration::from_nanos(1_000_000_000 / rate.max(1) as u64);
    thread::Builder::new()
        .name("popshot-hands".into())
        .spawn(move || {
            let mut sent = 0u64;
            for frame in script {
                if tx.send(frame).is_err() {
                    break;
                }
                sent += 1;
                thread::sleep(interval);
            }
            info!(sent, "scripted hand source finished");
        })
        .map_err(AppError::Spawn)
}
