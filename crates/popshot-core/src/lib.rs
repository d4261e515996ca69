//! Core types and definitions for the popshot simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, hand landmark input, components, configuration, events,
//! frame snapshots and the render-surface seam. It has no dependency on
//! the ECS or any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod landmarks;
pub mod render;
pub mod state;
pub mod types;
