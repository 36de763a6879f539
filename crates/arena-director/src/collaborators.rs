//! Contracts the director consumes but does not implement.

use glam::Vec2;

use arena_core::types::EnemyId;
use arena_core::waves::EnemySpawnDescriptor;

/// Turns a descriptor into a live enemy owned by the world.
///
/// The world reports the enemy's death back through
/// `EncounterDirector::notify_destroyed`.
pub trait SpawnFactory {
    /// `None` when the enemy could not be created (e.g. unknown kind).
    fn spawn(&mut self, descriptor: &EnemySpawnDescriptor) -> Option<EnemyId>;
}

/// Projectile collaborator. Fire-rate throttling and bullet lifetime are
/// entirely its business.
pub trait Weapon {
    fn fire_at(&mut self, origin: Vec2, target: Vec2);
}
