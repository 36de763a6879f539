//! Kind-specific enemy defaults.
//!
//! Replaces per-kind subclasses with a small table keyed by `EnemyKind`.

use crate::enums::EnemyKind;

/// Behavior defaults for an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Health when the spawn descriptor leaves it unset.
    pub health: u32,
    /// Chase speed (units/s) when the spawn descriptor leaves it unset.
    pub speed: f32,
    /// Experience granted to the credited player on death.
    pub experience: u32,
    /// Probability (0.0 - 1.0) of dropping a powerup on death.
    pub drop_chance: f64,
    /// Speed used when generators scale this kind.
    pub generated_base_speed: f32,
}

impl EnemyKind {
    /// Get the behavior profile for this kind.
    pub fn profile(self) -> EnemyProfile {
        match self {
            EnemyKind::Walker => EnemyProfile {
                health: 300,
                speed: 75.0,
                experience: 10,
                drop_chance: 0.2,
                generated_base_speed: 100.0,
            },
            EnemyKind::Fast => EnemyProfile {
                health: 200,
                speed: 150.0,
                experience: 10,
                drop_chance: 0.2,
                generated_base_speed: 200.0,
            },
        }
    }
}
