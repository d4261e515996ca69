//! Hand landmark input delivered by the external tracker.
//!
//! Each tracked hand carries 21 points in normalized, viewport-independent
//! coordinates. Only four of them matter here: the wrist (palm reference)
//! and the thumb, index and middle fingertips.

use serde::{Deserialize, Serialize};

/// Number of landmarks per tracked hand.
pub const LANDMARK_COUNT: usize = 21;

/// Wrist / palm reference point. Used as the projectile anchor.
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;

/// A single tracked point. `x`/`y` are normalized to `[0, 1]`;
/// `z` is relative depth and is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Planar distance in normalized space (depth ignored).
    pub fn planar_distance(&self, other: &Landmark) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Landmarks for one tracked hand, in tracker order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    pub points: Vec<Landmark>,
}

impl HandLandmarks {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    /// A hand is usable only with exactly [`LANDMARK_COUNT`] finite points.
    /// Coordinates slightly outside `[0, 1]` are accepted; trackers
    /// extrapolate near the frame edge.
    pub fn is_well_formed(&self) -> bool {
        self.points.len() == LANDMARK_COUNT && self.points.iter().all(Landmark::is_finite)
    }

    pub fn wrist(&self) -> Option<&Landmark> {
        self.points.get(WRIST)
    }

    pub fn thumb_tip(&self) -> Option<&Landmark> {
        self.points.get(THUMB_TIP)
    }

    pub fn index_tip(&self) -> Option<&Landmark> {
        self.points.get(INDEX_TIP)
    }

    pub fn middle_tip(&self) -> Option<&Landmark> {
        self.points.get(MIDDLE_TIP)
    }
}

/// Everything the tracker reported for one video frame.
/// `hands` is empty when no hand is in view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    pub hands: Vec<HandLandmarks>,
}

impl HandFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(hand: HandLandmarks) -> Self {
        Self { hands: vec![hand] }
    }
}
