//! Errors surfaced by the director.

use thiserror::Error;

use arena_core::ConfigError;

/// Failures of director calls that need state that does not exist.
///
/// Redundant notifications are not errors; they are absorbed silently.
#[derive(Debug, Error)]
pub enum EncounterError {
    #[error("invalid director config: {0}")]
    Config(#[from] ConfigError),

    #[error("no boss encounter is active")]
    NoActiveBoss,
}
