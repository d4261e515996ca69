//! Simulation engine for popshot.
//!
//! Owns the hecs entity store, classifies gestures, runs the per-frame
//! systems and produces FrameSnapshots for the driver.

pub mod engine;
pub mod gesture;
pub mod store;
pub mod systems;

pub use engine::FrameOrchestrator;
pub use popshot_core as core;

#[cfg(test)]
mod tests;
