//! Collaborator adapter lending the world to the director.

use glam::Vec2;
use hecs::World;
use tracing::warn;

use arena_core::constants::PROJECTILE_SPEED;
use arena_core::state::ProjectileView;
use arena_core::types::EnemyId;
use arena_core::waves::EnemySpawnDescriptor;
use arena_director::{SpawnFactory, Weapon};

use crate::world_setup;

/// Borrowed view of the engine the director spawns into and fires through.
pub struct ArenaHost<'a> {
    pub world: &'a mut World,
    pub projectiles: &'a mut Vec<ProjectileView>,
}

impl SpawnFactory for ArenaHost<'_> {
    fn spawn(&mut self, descriptor: &EnemySpawnDescriptor) -> Option<EnemyId> {
        if !descriptor.position.is_finite() {
            warn!(kind = ?descriptor.kind, "refusing enemy at non-finite position");
            return None;
        }
        if descriptor.resolved_health() == 0 {
            warn!(kind = ?descriptor.kind, "refusing enemy with zero health");
            return None;
        }
        let entity = world_setup::spawn_enemy(self.world, descriptor);
        Some(world_setup::enemy_id(entity))
    }
}

impl Weapon for ArenaHost<'_> {
    fn fire_at(&mut self, origin: Vec2, target: Vec2) {
        let velocity = (target - origin).normalize_or_zero() * PROJECTILE_SPEED;
        self.projectiles.push(ProjectileView {
            origin,
            target,
            velocity,
        });
    }
}
