//! Chase movement: every enemy closes in on its nearest player.

use glam::Vec2;
use hecs::World;

use arena_core::components::{Enemy, MoveSpeed, Player, Position};
use arena_core::constants::{Millis, CHASE_STOP_DISTANCE};
use arena_core::types::PlayerId;

/// Nearest player to `from`, ties broken by lower id.
pub fn nearest_player(world: &World, from: Vec2) -> Option<(PlayerId, Vec2)> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .map(|(_, (player, pos))| (player.id, pos.0))
        .min_by(|a, b| {
            a.1.distance_squared(from)
                .total_cmp(&b.1.distance_squared(from))
                .then(a.0.cmp(&b.0))
        })
}

/// Move enemies toward their nearest player for `dt_ms`, stopping at
/// `CHASE_STOP_DISTANCE`.
pub fn run(world: &mut World, dt_ms: Millis) {
    let players: Vec<Vec2> = world
        .query::<(&Player, &Position)>()
        .iter()
        .map(|(_, (_, pos))| pos.0)
        .collect();
    if players.is_empty() {
        return;
    }
    let dt = dt_ms as f32 / 1000.0;

    for (_entity, (_enemy, pos, speed)) in
        world.query_mut::<(&Enemy, &mut Position, &MoveSpeed)>()
    {
        let Some(target) = players
            .iter()
            .copied()
            .min_by(|a, b| a.distance_squared(pos.0).total_cmp(&b.distance_squared(pos.0)))
        else {
            continue;
        };
        let offset = target - pos.0;
        let distance = offset.length();
        if distance <= CHASE_STOP_DISTANCE {
            continue;
        }
        let step = (speed.0 * dt).min(distance - CHASE_STOP_DISTANCE);
        pos.0 += offset / distance * step;
    }
}
