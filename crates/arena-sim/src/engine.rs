//! Arena engine: the headless host of the encounter director.
//!
//! `ArenaEngine` owns the hecs world, lends it to the director as the spawn
//! factory and weapon, routes damage, drives the boss head animation and
//! facing, and produces `ArenaSnapshot`s.

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use arena_boss::BossHit;
use arena_core::components::{Player, Position};
use arena_core::config::{ConfigError, DirectorConfig};
use arena_core::constants::Millis;
use arena_core::enums::{AnimatedPart, BossPartId};
use arena_core::events::DirectorEvent;
use arena_core::health::DamageResult;
use arena_core::state::{ArenaSnapshot, ProjectileView};
use arena_core::types::{EnemyId, PlayerId};
use arena_director::experience::ExperienceLedger;
use arena_director::{scaling, EncounterDirector, GameMode};

use crate::error::EngineError;
use crate::host::ArenaHost;
use crate::systems;
use crate::systems::animation::HeadAnimation;
use crate::world_setup;

/// Configuration for a new engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs give the same run.
    pub seed: u64,
    /// Players spawned at start.
    pub players: u32,
    pub director: DirectorConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            players: 1,
            director: DirectorConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: SimConfig = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.director.validate()?;
        Ok(config)
    }
}

pub struct ArenaEngine {
    world: World,
    director: EncounterDirector,
    rng: ChaCha8Rng,
    tick: u64,
    experience: ExperienceLedger,
    head_animation: HeadAnimation,
    projectiles: Vec<ProjectileView>,
    /// Engine-side events (experience, drops) waiting for the next snapshot.
    events: Vec<DirectorEvent>,
    despawn_buffer: Vec<Entity>,
}

impl ArenaEngine {
    pub fn new(config: SimConfig) -> Result<Self, EngineError> {
        let director = EncounterDirector::new(config.director.clone(), config.seed)?;
        let mut world = World::new();
        world_setup::spawn_players(
            &mut world,
            config.players,
            config.director.arena_width,
            config.director.arena_height,
        );
        info!(seed = config.seed, players = config.players, "arena engine created");
        Ok(Self {
            world,
            director,
            // Offset so drop rolls do not mirror the director's composition rolls.
            rng: ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(1)),
            tick: 0,
            experience: ExperienceLedger::new(),
            head_animation: HeadAnimation::default(),
            projectiles: Vec::new(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn director(&self) -> &EncounterDirector {
        &self.director
    }

    pub fn experience(&self) -> &ExperienceLedger {
        &self.experience
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Start an encounter. Enemies left from a previous one stay in the
    /// world but no longer count toward any wave.
    pub fn start(&mut self, mode: GameMode) {
        self.head_animation.reset();
        let mut host = ArenaHost {
            world: &mut self.world,
            projectiles: &mut self.projectiles,
        };
        self.director.start(mode, &mut host);
    }

    /// Start the hand-authored opening level.
    pub fn start_opening_level(&mut self) {
        let level = scaling::opening_level(&mut self.rng, self.director.config());
        self.start(GameMode::Scripted(level));
    }

    /// Advance the arena by `dt_ms` and return the resulting snapshot,
    /// carrying every event and projectile produced since the last one.
    pub fn tick(&mut self, dt_ms: Millis) -> ArenaSnapshot {
        systems::movement::run(&mut self.world, dt_ms);
        self.resolve_casualties(None);
        let start = self.director.now();
        self.drive_boss(start, dt_ms);

        let mut host = ArenaHost {
            world: &mut self.world,
            projectiles: &mut self.projectiles,
        };
        self.director.advance_to(start.saturating_add(dt_ms), &mut host);
        self.tick += 1;

        let mut events = self.director.drain_events();
        events.append(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.tick,
            self.director.snapshot(),
            &self.experience,
            std::mem::take(&mut self.projectiles),
            events,
        )
    }

    /// Current state without draining events or projectiles.
    pub fn snapshot(&self) -> ArenaSnapshot {
        let mut events = self.director.events().to_vec();
        events.extend(self.events.iter().cloned());
        systems::snapshot::build_snapshot(
            &self.world,
            self.tick,
            self.director.snapshot(),
            &self.experience,
            self.projectiles.clone(),
            events,
        )
    }

    /// Damage an enemy. A killing blow removes it at once and credits `by`
    /// (or the nearest player) with its experience.
    pub fn damage_enemy(
        &mut self,
        id: EnemyId,
        amount: u32,
        by: Option<PlayerId>,
    ) -> Result<DamageResult, EngineError> {
        let entity = world_setup::enemy_entity(id)
            .filter(|entity| self.world.contains(*entity))
            .ok_or(EngineError::UnknownEnemy(id))?;
        let result = systems::damage::damage_enemy(&self.world, entity, amount)
            .ok_or(EngineError::UnknownEnemy(id))?;
        if result.depleted {
            self.resolve_casualties(by);
        }
        Ok(result)
    }

    pub fn damage_boss_part(
        &mut self,
        part: BossPartId,
        amount: u32,
    ) -> Result<BossHit, EngineError> {
        Ok(self.director.apply_boss_damage(part, amount)?)
    }

    pub fn move_player(&mut self, id: PlayerId, position: Vec2) -> Result<(), EngineError> {
        let pos = self
            .world
            .query_mut::<(&Player, &mut Position)>()
            .into_iter()
            .find(|(_, (player, _))| player.id == id)
            .map(|(_, (_, pos))| pos)
            .ok_or(EngineError::UnknownPlayer(id))?;
        pos.0 = position;
        Ok(())
    }

    /// Despawn depleted enemies and hand out their rewards.
    fn resolve_casualties(&mut self, by: Option<PlayerId>) {
        let casualties = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        for casualty in casualties {
            debug!(id = ?casualty.id, kind = ?casualty.kind, "enemy destroyed");
            self.director.notify_destroyed(casualty.id);

            let credited = by.or_else(|| {
                systems::movement::nearest_player(&self.world, casualty.position).map(|(id, _)| id)
            });
            if let Some(player) = credited {
                self.experience.credit(
                    player,
                    casualty.kind.profile().experience,
                    &mut self.events,
                );
            }
            if let Some(drop) =
                systems::damage::roll_drop(&mut self.rng, casualty.kind, casualty.position)
            {
                self.events.push(drop);
            }
        }
    }

    /// Feed head frames and facing to a live boss. The director clock is
    /// brought up to each frame's entry time first, so a telegraph started
    /// mid-step keeps its full warning window.
    fn drive_boss(&mut self, start: Millis, dt_ms: Millis) {
        let Some(boss) = self.director.boss() else {
            self.head_animation.reset();
            return;
        };
        if boss.is_defeated() {
            return;
        }
        let layout = *boss.layout();
        let period = self.director.config().head_frame_period_ms;
        let count = self.director.config().head_frame_count;

        for (offset, frame) in self.head_animation.advance(dt_ms, period, count) {
            let mut host = ArenaHost {
                world: &mut self.world,
                projectiles: &mut self.projectiles,
            };
            self.director.advance_to(start.saturating_add(offset), &mut host);
            if !self.director.boss().is_some_and(|boss| !boss.is_defeated()) {
                break;
            }
            let target =
                systems::movement::nearest_player(&self.world, layout.muzzle).map(|(_, p)| p);
            if let Err(err) = self
                .director
                .notify_animation_frame(AnimatedPart::Head, frame, target)
            {
                warn!(%err, frame, "head frame rejected");
            }
        }
        if let Some((_, player)) =
            systems::movement::nearest_player(&self.world, layout.body.center())
        {
            self.director.update_facing(player.x);
        }
    }
}
