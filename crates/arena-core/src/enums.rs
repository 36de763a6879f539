//! Enumeration types used throughout the encounter.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Per-kind defaults live in `profiles`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Slow melee shambler.
    #[default]
    Walker,
    /// Quick, fragile chaser.
    Fast,
}

/// Pickup dropped by a dying enemy. Effects are applied elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    Speed,
    Fireblast,
    GiantMode,
    WreckingBall,
    HealthPack,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 5] = [
        PowerupKind::Speed,
        PowerupKind::Fireblast,
        PowerupKind::GiantMode,
        PowerupKind::WreckingBall,
        PowerupKind::HealthPack,
    ];
}

/// Which scaling policy is driving the director.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeKind {
    /// Nothing loaded yet.
    #[default]
    Idle,
    /// A single hand-authored level.
    Scripted,
    /// Generated levels of increasing difficulty.
    Campaign,
    /// Endless generated waves.
    Survival,
}

/// Wave runner lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerPhase {
    #[default]
    Idle,
    WaveActive,
    WaveComplete,
    AllWavesExhausted,
}

/// Damageable boss sub-part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossPartId {
    EyeLeft,
    EyeRight,
}

impl BossPartId {
    pub const ALL: [BossPartId; 2] = [BossPartId::EyeLeft, BossPartId::EyeRight];
}

/// Animated boss pieces that report animation frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimatedPart {
    /// Attack-emitting top of the boss.
    Head,
    Eye(BossPartId),
}

/// Life cycle of one boss part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartState {
    #[default]
    Alive,
    /// Visually locked after crossing a health threshold; still damageable.
    Staggered,
    Destroyed,
}

/// Sprite frame a boss piece shows while tracking a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingFrame {
    /// Closed eye, shown while staggered.
    Blink,
    LookLeft,
    #[default]
    LookDown,
    LookRight,
}

impl FacingFrame {
    /// Index into the eye sprite sheet.
    pub fn frame_index(self) -> u32 {
        match self {
            FacingFrame::Blink => 0,
            FacingFrame::LookLeft => 1,
            FacingFrame::LookDown => 2,
            FacingFrame::LookRight => 3,
        }
    }
}

/// Two-phase attack primitive state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelegraphPhase {
    #[default]
    Idle,
    Warning,
    Firing,
}
