//! ECS components for hecs entities.
//!
//! Plain data; behavior lives in the simulation systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::PlayerId;

/// Marks an enemy spawned from a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
}

/// Marks a player avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
}

/// World position in arena units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Chase speed in arena units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveSpeed(pub f32);
