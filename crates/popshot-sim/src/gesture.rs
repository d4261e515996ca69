//! Gesture classification: hand landmarks to a per-frame [`Action`].
//!
//! [`classify`] is a pure function of one tracker frame. The only state is
//! the sticky projectile anchor, held by [`GestureClassifier`]: it starts
//! at the viewport center, follows the selected hand's wrist, and keeps its
//! last value while no usable hand is tracked.

use serde::{Deserialize, Serialize};
use tracing::warn;

use popshot_core::config::GestureConfig;
use popshot_core::enums::{Action, HandSelection};
use popshot_core::landmarks::{HandFrame, HandLandmarks};
use popshot_core::types::{Position, Viewport};

/// Result of classifying one tracker frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub action: Action,
    /// Wrist projected onto the viewport; `None` leaves the anchor as is.
    pub anchor: Option<Position>,
}

impl Classification {
    /// No hand, or no usable hand.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Classify a tracker frame.
///
/// One canonical hand is chosen by `config.hand_selection`; the other
/// hands are ignored. Thumb-index is tested before thumb-middle, so a hand
/// touching both yields [`Action::SpawnTarget`].
pub fn classify(frame: &HandFrame, viewport: Viewport, config: &GestureConfig) -> Classification {
    let hand = match config.hand_selection {
        HandSelection::First => frame.hands.first(),
        HandSelection::Last => frame.hands.last(),
    };
    match hand {
        Some(hand) => classify_hand(hand, viewport, config.pinch_threshold),
        None => Classification::none(),
    }
}

fn classify_hand(hand: &HandLandmarks, viewport: Viewport, threshold: f64) -> Classification {
    if !hand.is_well_formed() {
        warn!(
            landmark_count = hand.points.len(),
            "malformed hand landmarks, ignoring frame"
        );
        return Classification::none();
    }

    let (Some(wrist), Some(thumb), Some(index), Some(middle)) = (
        hand.wrist(),
        hand.thumb_tip(),
        hand.index_tip(),
        hand.middle_tip(),
    ) else {
        return Classification::none();
    };

    let action = if thumb.planar_distance(index) < threshold {
        Action::SpawnTarget
    } else if thumb.planar_distance(middle) < threshold {
        Action::SpawnProjectile
    } else {
        Action::None
    };

    Classification {
        action,
        anchor: Some(viewport.project(wrist.x, wrist.y)),
    }
}

/// Stateful wrapper holding the sticky anchor.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    config: GestureConfig,
    viewport: Viewport,
    anchor: Position,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig, viewport: Viewport) -> Self {
        Self {
            config,
            viewport,
            anchor: viewport.center(),
        }
    }

    /// Classify a frame and update the anchor.
    pub fn classify(&mut self, frame: &HandFrame) -> Action {
        let classification = classify(frame, self.viewport, &self.config);
        self.apply(classification)
    }

    /// Apply a classification computed elsewhere (e.g. on the gesture
    /// worker thread).
    pub fn apply(&mut self, classification: Classification) -> Action {
        if let Some(anchor) = classification.anchor {
            self.anchor = anchor;
        }
        classification.action
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
