//! POPSHOT headless driver.
//!
//! Wires a hand-landmark source, the gesture worker and the frame
//! orchestrator together on separate threads, each at its own rate.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod gesture_feed;
pub mod runner;
pub mod scripted;
pub mod state;

pub use popshot_core as core;
pub use runner::run_headless;
