//! Enemy damage and death rewards.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use arena_core::components::Enemy;
use arena_core::enums::{EnemyKind, PowerupKind};
use arena_core::events::DirectorEvent;
use arena_core::health::{DamageResult, HealthPool};

/// Damage one enemy. `None` when `entity` is not a live enemy.
pub fn damage_enemy(world: &World, entity: Entity, amount: u32) -> Option<DamageResult> {
    if world.get::<&Enemy>(entity).is_err() {
        return None;
    }
    let mut health = world.get::<&mut HealthPool>(entity).ok()?;
    Some(health.apply_damage(amount))
}

/// Roll the kind's drop chance; on success pick a powerup uniformly.
pub fn roll_drop<R: Rng>(rng: &mut R, kind: EnemyKind, position: Vec2) -> Option<DirectorEvent> {
    if !rng.gen_bool(kind.profile().drop_chance) {
        return None;
    }
    let powerup = PowerupKind::ALL[rng.gen_range(0..PowerupKind::ALL.len())];
    Some(DirectorEvent::PowerupDropped {
        position,
        kind: powerup,
    })
}
