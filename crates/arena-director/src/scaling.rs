//! Level and wave generation for the three game modes.
//!
//! All randomness comes from the caller's RNG so a seeded run reproduces
//! the same enemies in the same places.

use glam::Vec2;
use rand::Rng;

use arena_core::config::DirectorConfig;
use arena_core::constants::*;
use arena_core::enums::EnemyKind;
use arena_core::waves::{EnemySpawnDescriptor, LevelDefinition, WaveDefinition};

/// Uniform position inside the arena, at least `spawn_margin` from every edge.
pub fn random_position<R: Rng>(rng: &mut R, config: &DirectorConfig) -> Vec2 {
    let margin = config.spawn_margin;
    Vec2::new(
        rng.gen_range(margin..=config.arena_width - margin),
        rng.gen_range(margin..=config.arena_height - margin),
    )
}

/// Fast enemies become more likely as difficulty rises; from difficulty 11
/// on every roll is fast.
pub fn roll_kind<R: Rng>(rng: &mut R, difficulty: u32) -> EnemyKind {
    if rng.gen_range(0..=KIND_ROLL_MAX) < difficulty {
        EnemyKind::Fast
    } else {
        EnemyKind::Walker
    }
}

/// One enemy scaled to `difficulty`: health `100 + 10d`, speed is the
/// kind's generated base plus `5d`.
pub fn scaled_descriptor<R: Rng>(
    rng: &mut R,
    config: &DirectorConfig,
    difficulty: u32,
) -> EnemySpawnDescriptor {
    let kind = roll_kind(rng, difficulty);
    let position = random_position(rng, config);
    EnemySpawnDescriptor::new(kind, position)
        .with_health(GENERATED_BASE_HEALTH + HEALTH_PER_DIFFICULTY * difficulty)
        .with_speed(kind.profile().generated_base_speed + SPEED_PER_DIFFICULTY * difficulty as f32)
}

/// Survival wave `k` (1-based): `base + per_wave * k` enemies at difficulty `k`.
pub fn survival_wave<R: Rng>(wave: u32, rng: &mut R, config: &DirectorConfig) -> WaveDefinition {
    let count = config.survival_base_count + config.survival_count_per_wave * wave;
    WaveDefinition::new(
        (0..count)
            .map(|_| scaled_descriptor(rng, config, wave))
            .collect(),
    )
}

/// Number of waves in campaign level `level`.
pub fn campaign_wave_count(level: u32) -> u32 {
    (CAMPAIGN_BASE_WAVES + level / 2).min(CAMPAIGN_MAX_WAVES)
}

/// Campaign level `level` (1-based). Wave `w` (0-based) holds
/// `5 + 3w + 2L` enemies at difficulty `w + L`.
pub fn campaign_level<R: Rng>(level: u32, rng: &mut R, config: &DirectorConfig) -> LevelDefinition {
    let waves = (0..campaign_wave_count(level))
        .map(|w| {
            let count = CAMPAIGN_BASE_COUNT + 3 * w + 2 * level;
            let difficulty = w + level;
            WaveDefinition::new(
                (0..count)
                    .map(|_| scaled_descriptor(rng, config, difficulty))
                    .collect(),
            )
        })
        .collect();
    LevelDefinition::new(waves)
}

/// The hand-authored opening level: 10 walkers, then 15 with every third
/// enemy fast, then 20 alternating fast and walker.
pub fn opening_level<R: Rng>(rng: &mut R, config: &DirectorConfig) -> LevelDefinition {
    let first = WaveDefinition::new(
        (0..10)
            .map(|_| {
                EnemySpawnDescriptor::new(EnemyKind::Walker, random_position(rng, config))
                    .with_health(100)
            })
            .collect(),
    );

    let second = WaveDefinition::new(
        (0..15)
            .map(|i| {
                let (kind, speed) = if i % 3 == 0 {
                    (EnemyKind::Fast, 200.0)
                } else {
                    (EnemyKind::Walker, 100.0)
                };
                EnemySpawnDescriptor::new(kind, random_position(rng, config))
                    .with_health(100)
                    .with_speed(speed)
            })
            .collect(),
    );

    let third = WaveDefinition::new(
        (0..20)
            .map(|i| {
                let (kind, speed) = if i % 2 == 0 {
                    (EnemyKind::Fast, 220.0)
                } else {
                    (EnemyKind::Walker, 120.0)
                };
                EnemySpawnDescriptor::new(kind, random_position(rng, config))
                    .with_health(150)
                    .with_speed(speed)
            })
            .collect(),
    );

    LevelDefinition::new(vec![first, second, third])
}
