//! Snapshot builder: collects the world into an `ArenaSnapshot`.

use hecs::World;

use arena_core::components::{Enemy, Player, Position};
use arena_core::events::DirectorEvent;
use arena_core::health::HealthPool;
use arena_core::state::{ArenaSnapshot, EncounterSnapshot, EnemyView, PlayerView, ProjectileView};
use arena_director::experience::ExperienceLedger;

use crate::world_setup::enemy_id;

pub fn build_snapshot(
    world: &World,
    tick: u64,
    encounter: EncounterSnapshot,
    experience: &ExperienceLedger,
    projectiles: Vec<ProjectileView>,
    events: Vec<DirectorEvent>,
) -> ArenaSnapshot {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &HealthPool)>()
        .iter()
        .map(|(entity, (enemy, pos, health))| EnemyView {
            id: enemy_id(entity),
            kind: enemy.kind,
            position: pos.0,
            health: health.current(),
            max_health: health.max(),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);

    let mut players: Vec<PlayerView> = world
        .query::<(&Player, &Position)>()
        .iter()
        .map(|(_, (player, pos))| {
            let progress = experience.progress(player.id);
            PlayerView {
                id: player.id,
                position: pos.0,
                experience: progress.experience,
                level: progress.level,
            }
        })
        .collect();
    players.sort_by_key(|p| p.id);

    ArenaSnapshot {
        tick,
        encounter,
        enemies,
        players,
        projectiles,
        events,
    }
}
