//! Cleanup system: removes enemies whose health is depleted.

use glam::Vec2;
use hecs::{Entity, World};

use arena_core::components::{Enemy, Position};
use arena_core::enums::EnemyKind;
use arena_core::health::HealthPool;
use arena_core::types::EnemyId;

use crate::world_setup::enemy_id;

/// An enemy removed this pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Casualty {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub position: Vec2,
}

/// Despawn depleted enemies and report them in entity order.
/// Uses a caller-owned buffer to avoid per-tick allocation of entities.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> Vec<Casualty> {
    despawn_buffer.clear();
    let mut casualties = Vec::new();

    for (entity, (enemy, pos, health)) in world.query_mut::<(&Enemy, &Position, &HealthPool)>() {
        if health.is_depleted() {
            despawn_buffer.push(entity);
            casualties.push(Casualty {
                id: enemy_id(entity),
                kind: enemy.kind,
                position: pos.0,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    casualties.sort_by_key(|c| c.id);
    casualties
}
