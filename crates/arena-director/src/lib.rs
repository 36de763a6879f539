//! Encounter director for the arena.
//!
//! Decides which enemies exist at any moment: runs waves through a
//! `WaveRunner`, scales difficulty per game mode, and owns the boss
//! lifecycle. Everything is driven by explicit notifications and an
//! epoch-guarded logical `Scheduler`; nothing here blocks or owns entities.

pub mod collaborators;
pub mod director;
pub mod error;
pub mod experience;
pub mod scaling;
pub mod scheduler;
pub mod state;
pub mod wave_runner;

pub use arena_core as core;
pub use collaborators::{SpawnFactory, Weapon};
pub use director::{EncounterDirector, GameMode};
pub use error::EncounterError;
pub use state::EncounterState;
