//! Simulation constants and tuning defaults.

// --- Frame cadence ---

/// Default render/orchestration rate (Hz).
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Default gesture pipeline rate (Hz). The tracker usually runs slower
/// than the render clock.
pub const DEFAULT_GESTURE_RATE: u32 = 30;

// --- Viewport ---

/// Default viewport width in pixels (matches the capture resolution).
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

// --- Gesture ---

/// Normalized fingertip distance below which two tips count as touching.
pub const DEFAULT_PINCH_THRESHOLD: f64 = 0.02;

// --- Targets ---

/// Target collision and render radius (pixels).
pub const TARGET_RADIUS: f64 = 20.0;

/// Upward target speed (pixels per tick).
pub const TARGET_SPEED: f64 = 2.0;

// --- Projectiles ---

/// Upward projectile speed (pixels per tick).
pub const PROJECTILE_SPEED: f64 = 10.0;

/// Rendered projectile width (pixels). Not used for collision.
pub const PROJECTILE_WIDTH: f64 = 4.0;

/// Rendered projectile height (pixels). Also the despawn margin above the
/// top edge.
pub const PROJECTILE_HEIGHT: f64 = 20.0;

// --- Population limits ---

/// Default cap on live targets.
pub const DEFAULT_MAX_TARGETS: usize = 512;

/// Default cap on live projectiles.
pub const DEFAULT_MAX_PROJECTILES: usize = 512;
