use thiserror::Error;

use arena_core::types::{EnemyId, PlayerId};
use arena_core::ConfigError;
use arena_director::EncounterError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown enemy {0:?}")]
    UnknownEnemy(EnemyId),

    #[error("unknown player {0:?}")]
    UnknownPlayer(PlayerId),

    #[error(transparent)]
    Encounter(#[from] EncounterError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
