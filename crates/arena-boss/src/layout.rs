//! Boss placement and fixed geometry.

use glam::Vec2;

use arena_core::constants::{BOSS_BODY_SIZE, BOSS_LIFT, BOSS_MUZZLE_OFFSET, BOSS_SCALE};
use arena_core::enums::BossPartId;
use arena_core::types::Bounds;

/// Where the boss sits and where its projectiles come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossLayout {
    /// Scaled body rectangle; its horizontal extent drives facing.
    pub body: Bounds,
    /// Projectile origin.
    pub muzzle: Vec2,
}

impl BossLayout {
    /// Centre the boss horizontally, lifted above the arena centre.
    pub fn for_arena(width: f32, height: f32) -> Self {
        let (body_w, body_h) = BOSS_BODY_SIZE;
        let origin = Vec2::new(
            width / 2.0 - (body_w / 2.0) * BOSS_SCALE,
            height / 2.0 - (body_h / 2.0) * BOSS_SCALE - BOSS_LIFT,
        );
        Self::at(origin)
    }

    /// Boss with its body origin at `origin`.
    pub fn at(origin: Vec2) -> Self {
        let (body_w, body_h) = BOSS_BODY_SIZE;
        Self {
            body: Bounds::new(origin, Vec2::new(body_w, body_h) * BOSS_SCALE),
            muzzle: origin + Vec2::from(BOSS_MUZZLE_OFFSET),
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.body.origin
    }

    /// The left eye is drawn mirrored.
    pub fn eye_flipped(part: BossPartId) -> bool {
        matches!(part, BossPartId::EyeLeft)
    }
}
