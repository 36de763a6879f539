//! Snapshots: the visible director and arena state handed to the host each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::DirectorEvent;
use crate::types::{EnemyId, PlayerId};

/// Complete director state, cheap to serialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub now_ms: u64,
    pub mode: ModeKind,
    pub epoch: u64,
    /// Campaign level number, or survival wave count.
    pub level: u32,
    pub runner: RunnerView,
    /// True once the boss has been triggered for the current level/cycle.
    pub boss_guard: bool,
    pub boss: Option<BossView>,
    pub pending_timers: usize,
}

/// Wave runner progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunnerView {
    pub phase: RunnerPhase,
    pub wave_index: usize,
    pub wave_count: usize,
    pub enemies_remaining: u32,
    pub total_in_wave: u32,
}

/// Boss encounter status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossView {
    pub parts: Vec<PartView>,
    pub head_frame: FacingFrame,
    pub telegraph: TelegraphPhase,
    pub defeated: bool,
}

/// One damageable boss part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartView {
    pub part: BossPartId,
    pub state: PartState,
    pub health: u32,
    pub max_health: u32,
    pub frame: FacingFrame,
}

/// Whole-arena snapshot produced by the headless engine each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub tick: u64,
    pub encounter: EncounterSnapshot,
    pub enemies: Vec<EnemyView>,
    pub players: Vec<PlayerView>,
    /// Projectiles requested since the previous snapshot.
    pub projectiles: Vec<ProjectileView>,
    /// Events drained since the previous snapshot.
    pub events: Vec<DirectorEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub health: u32,
    pub max_health: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub position: Vec2,
    pub experience: u32,
    pub level: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub origin: Vec2,
    pub target: Vec2,
    /// Unit direction scaled by projectile speed.
    pub velocity: Vec2,
}
