//! Entity spawn helpers for the arena world.

use glam::Vec2;
use hecs::{Entity, World};

use arena_core::components::{Enemy, MoveSpeed, Player, Position};
use arena_core::health::HealthPool;
use arena_core::types::{EnemyId, PlayerId};
use arena_core::waves::EnemySpawnDescriptor;

/// Horizontal spacing between players at spawn.
const PLAYER_SPACING: f32 = 64.0;

/// Place `count` players side by side around the arena centre.
pub fn spawn_players(world: &mut World, count: u32, width: f32, height: f32) -> Vec<Entity> {
    let center = Vec2::new(width / 2.0, height / 2.0);
    let span = PLAYER_SPACING * count.saturating_sub(1) as f32;
    (0..count)
        .map(|i| {
            let offset = Vec2::new(i as f32 * PLAYER_SPACING - span / 2.0, 0.0);
            spawn_player(world, PlayerId(i), center + offset)
        })
        .collect()
}

pub fn spawn_player(world: &mut World, id: PlayerId, position: Vec2) -> Entity {
    world.spawn((Player { id }, Position(position)))
}

/// Spawn an enemy with the descriptor's overrides applied over its kind defaults.
pub fn spawn_enemy(world: &mut World, descriptor: &EnemySpawnDescriptor) -> Entity {
    world.spawn((
        Enemy {
            kind: descriptor.kind,
        },
        Position(descriptor.position),
        MoveSpeed(descriptor.resolved_speed()),
        HealthPool::new(descriptor.resolved_health()),
    ))
}

/// Stable id handed to the director. Round-trips through `enemy_entity`.
pub fn enemy_id(entity: Entity) -> EnemyId {
    EnemyId(entity.to_bits().get())
}

pub fn enemy_entity(id: EnemyId) -> Option<Entity> {
    Entity::from_bits(id.0)
}
