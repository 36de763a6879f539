//! Headless arena simulation.
//!
//! Owns the hecs ECS world of players and enemies, plays the spawn factory
//! and weapon roles for the encounter director, and produces
//! `ArenaSnapshot`s. No rendering dependency, so runs are deterministic and
//! testable.

pub mod engine;
pub mod error;
pub mod host;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use arena_director::GameMode;
pub use engine::{ArenaEngine, SimConfig};
pub use error::EngineError;

#[cfg(test)]
mod tests;
