//! Core types and definitions for the arena encounter simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! ids, enemy kinds, health pools, wave data, presentation events,
//! configuration and snapshots. It has no dependency on any runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod health;
pub mod profiles;
pub mod state;
pub mod types;
pub mod waves;

pub use config::{ConfigError, DirectorConfig};
pub use health::{DamageResult, HealthPool};
