//! Wave and level data model.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// Everything needed to spawn one enemy. Consumed once by spawning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawnDescriptor {
    pub kind: EnemyKind,
    pub position: Vec2,
    /// `None` uses the kind default.
    pub health: Option<u32>,
    /// `None` uses the kind default.
    pub speed: Option<f32>,
}

impl EnemySpawnDescriptor {
    pub fn new(kind: EnemyKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            health: None,
            speed: None,
        }
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Health after falling back to the kind default.
    pub fn resolved_health(&self) -> u32 {
        self.health.unwrap_or_else(|| self.kind.profile().health)
    }

    /// Speed after falling back to the kind default.
    pub fn resolved_speed(&self) -> f32 {
        self.speed.unwrap_or_else(|| self.kind.profile().speed)
    }
}

/// One batch of enemies spawned together. Order only affects spawn order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveDefinition {
    pub enemies: Vec<EnemySpawnDescriptor>,
}

impl WaveDefinition {
    pub fn new(enemies: Vec<EnemySpawnDescriptor>) -> Self {
        Self { enemies }
    }

    /// `count` copies of the same descriptor.
    pub fn uniform(descriptor: EnemySpawnDescriptor, count: usize) -> Self {
        Self {
            enemies: vec![descriptor; count],
        }
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Mean resolved health, 0.0 for an empty wave.
    pub fn average_health(&self) -> f64 {
        if self.enemies.is_empty() {
            return 0.0;
        }
        let total: u64 = self
            .enemies
            .iter()
            .map(|e| e.resolved_health() as u64)
            .sum();
        total as f64 / self.enemies.len() as f64
    }

    /// Number of enemies of the given kind.
    pub fn count_of(&self, kind: EnemyKind) -> usize {
        self.enemies.iter().filter(|e| e.kind == kind).count()
    }
}

/// Ordered waves making up one level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub waves: Vec<WaveDefinition>,
}

impl LevelDefinition {
    pub fn new(waves: Vec<WaveDefinition>) -> Self {
        Self { waves }
    }

    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }

    /// Total enemies across all waves.
    pub fn total_enemies(&self) -> usize {
        self.waves.iter().map(WaveDefinition::len).sum()
    }
}
