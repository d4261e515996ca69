//! Systems that operate on the entity store each frame.
//!
//! Systems are plain functions over `&mut EntityStore` (or `&EntityStore`
//! for read-only ones). They do not own state beyond what the caller
//! passes in.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod render;
pub mod snapshot;
pub mod spawner;
