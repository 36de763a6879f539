//! The encounter director.
//!
//! Owns the `EncounterState` and a logical `Scheduler`. The host reports
//! enemy deaths, boss damage and animation frames, advances time, and drains
//! the queued `DirectorEvent`s for its presentation layer. Every delayed
//! transition goes through the scheduler tagged with the current epoch, so a
//! level reload silently invalidates whatever the previous level left pending.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use arena_boss::{BossEncounter, BossHit, BossLayout};
use arena_core::config::DirectorConfig;
use arena_core::constants::Millis;
use arena_core::enums::{AnimatedPart, BossPartId, ModeKind};
use arena_core::events::DirectorEvent;
use arena_core::state::EncounterSnapshot;
use arena_core::types::{Color, EnemyId};
use arena_core::waves::LevelDefinition;

use crate::collaborators::{SpawnFactory, Weapon};
use crate::error::EncounterError;
use crate::scaling;
use crate::scheduler::Scheduler;
use crate::state::EncounterState;
use crate::wave_runner::WaveStart;

const BOSS_WARNING_TEXT: &str = "BOSS INCOMING!";

/// How the director sources its waves.
#[derive(Debug, Clone, PartialEq)]
pub enum GameMode {
    /// A fixed level. The encounter ends when its boss is defeated.
    Scripted(LevelDefinition),
    /// Generated levels starting at `start_level`, reloading one level
    /// higher after each boss.
    Campaign { start_level: u32 },
    /// One generated wave at a time, with a boss every few waves.
    Survival,
}

/// Deferred transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    StartNextWave,
    SpawnBoss,
    ReloadLevel,
    NextSurvivalWave,
    ClearStagger { part: BossPartId, token: u64 },
    ReleaseTelegraph,
}

#[derive(Debug, Clone)]
pub struct EncounterDirector {
    config: DirectorConfig,
    rng: ChaCha8Rng,
    scheduler: Scheduler<Command>,
    state: EncounterState,
    events: Vec<DirectorEvent>,
}

impl EncounterDirector {
    pub fn new(config: DirectorConfig, seed: u64) -> Result<Self, EncounterError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            scheduler: Scheduler::new(),
            state: EncounterState::new(),
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    pub fn boss(&self) -> Option<&BossEncounter> {
        self.state.boss.as_ref()
    }

    pub fn now(&self) -> Millis {
        self.scheduler.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    /// Events queued since the last drain.
    pub fn events(&self) -> &[DirectorEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<DirectorEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- lifecycle ----

    /// Begin a fresh encounter in `mode`.
    pub fn start<S: SpawnFactory>(&mut self, mode: GameMode, spawner: &mut S) {
        match mode {
            GameMode::Scripted(level) => {
                self.state.mode = ModeKind::Scripted;
                self.state.level = 1;
                self.load_level(level, spawner);
            }
            GameMode::Campaign { start_level } => {
                self.state.mode = ModeKind::Campaign;
                self.state.level = start_level.max(1);
                self.load_campaign_level(spawner);
            }
            GameMode::Survival => {
                self.state.reset();
                self.state.mode = ModeKind::Survival;
                self.state.survival_wave = 1;
                // Cleared every `survival_boss_every` waves.
                self.state.boss_guard = true;
                info!(epoch = self.state.epoch, "survival started");
                self.start_survival_wave(spawner);
            }
        }
    }

    /// Replace the current level and start its first wave. Opens a new
    /// epoch and re-arms the boss guard.
    pub fn load_level<S: SpawnFactory>(&mut self, level: LevelDefinition, spawner: &mut S) {
        self.state.reset();
        if self.state.mode == ModeKind::Idle {
            self.state.mode = ModeKind::Scripted;
        }
        info!(
            epoch = self.state.epoch,
            waves = level.wave_count(),
            enemies = level.total_enemies(),
            "level loaded"
        );
        let started = self
            .state
            .runner
            .start(level, spawner, &self.config, &mut self.events);
        self.after_wave_start(started);
    }

    /// Drop everything and return to idle. Pending timers become stale.
    pub fn reset(&mut self) {
        self.state.reset();
        self.state.mode = ModeKind::Idle;
        debug!(epoch = self.state.epoch, "director reset");
    }

    // ---- notifications ----

    /// An enemy spawned by this director died.
    pub fn notify_destroyed(&mut self, id: EnemyId) {
        if let Some(wave_index) = self.state.runner.on_enemy_destroyed(id) {
            self.on_wave_completed(wave_index);
        }
    }

    /// Every wave of the level is done: warn and schedule the boss.
    /// Later calls before the guard is re-armed do nothing.
    pub fn on_waves_exhausted(&mut self) {
        if self.state.boss_guard || self.state.boss_alive() {
            debug!("boss already triggered, ignoring");
            return;
        }
        self.state.boss_guard = true;
        info!(delay_ms = self.config.pre_boss_delay_ms, "boss incoming");
        self.events.push(DirectorEvent::BossWarning {
            text: BOSS_WARNING_TEXT.to_string(),
            color: Color::RED,
        });
        self.schedule(self.config.pre_boss_delay_ms, Command::SpawnBoss);
    }

    /// Damage one boss part. Staggers schedule their own release; the hit
    /// that destroys the last part ends the encounter.
    pub fn apply_boss_damage(
        &mut self,
        part: BossPartId,
        amount: u32,
    ) -> Result<BossHit, EncounterError> {
        let boss = self
            .state
            .boss
            .as_mut()
            .ok_or(EncounterError::NoActiveBoss)?;
        let hit = boss.apply_damage(part, amount);

        if let Some(token) = hit.stagger_token {
            debug!(?part, token, health = hit.result.current, "part staggered");
            self.events.push(DirectorEvent::PartStaggered { part });
            self.schedule(
                self.config.stagger_duration_ms,
                Command::ClearStagger { part, token },
            );
        }
        if hit.destroyed {
            info!(?part, "boss part destroyed");
            self.events.push(DirectorEvent::PartDestroyed { part });
        }
        if hit.defeated {
            self.on_boss_defeated();
        }
        Ok(hit)
    }

    /// An animation reached `frame_index`. Only the head's fire frame does
    /// anything: it starts a telegraph towards `target`.
    pub fn notify_animation_frame(
        &mut self,
        part: AnimatedPart,
        frame_index: u32,
        target: Option<Vec2>,
    ) -> Result<(), EncounterError> {
        let boss = self
            .state
            .boss
            .as_mut()
            .ok_or(EncounterError::NoActiveBoss)?;
        if part != AnimatedPart::Head {
            return Ok(());
        }
        let Some(start) = boss.on_head_frame(frame_index, self.config.telegraph_fire_frame, target)
        else {
            return Ok(());
        };
        debug!(target = ?start.target, "telegraph started");
        self.events.push(DirectorEvent::TelegraphStarted {
            origin: start.origin,
            target: start.target,
            facing: start.facing,
        });
        self.schedule(self.config.telegraph_warning_ms, Command::ReleaseTelegraph);
        Ok(())
    }

    /// Point the boss at the player's horizontal position.
    pub fn update_facing(&mut self, player_x: f32) {
        if let Some(boss) = self.state.boss.as_mut() {
            boss.update_facing(player_x);
        }
    }

    // ---- time ----

    /// Advance the logical clock by `dt_ms`, firing every timer that comes due.
    pub fn advance<H: SpawnFactory + Weapon>(&mut self, dt_ms: Millis, host: &mut H) {
        let target = self.scheduler.now().saturating_add(dt_ms);
        self.advance_to(target, host);
    }

    /// Advance the logical clock to `now_ms`. Timers fire in deadline order;
    /// anything they schedule that is already due fires in the same call.
    pub fn advance_to<H: SpawnFactory + Weapon>(&mut self, now_ms: Millis, host: &mut H) {
        while let Some(entry) = self.scheduler.pop_due(now_ms) {
            if entry.epoch != self.state.epoch {
                trace!(
                    command = ?entry.command,
                    scheduled_epoch = entry.epoch,
                    epoch = self.state.epoch,
                    "stale timer dropped"
                );
                continue;
            }
            self.dispatch(entry.command, host);
        }
        self.scheduler.set_now(now_ms);
    }

    pub fn snapshot(&self) -> EncounterSnapshot {
        let level = match self.state.mode {
            ModeKind::Survival => self.state.survival_wave,
            _ => self.state.level,
        };
        EncounterSnapshot {
            now_ms: self.scheduler.now(),
            mode: self.state.mode,
            epoch: self.state.epoch,
            level,
            runner: self.state.runner.view(),
            boss_guard: self.state.boss_guard,
            boss: self.state.boss.as_ref().map(BossEncounter::view),
            pending_timers: self.scheduler.len(),
        }
    }

    // ---- internals ----

    fn schedule(&mut self, after_ms: Millis, command: Command) {
        let due = self.scheduler.schedule(after_ms, self.state.epoch, command);
        trace!(?command, due, epoch = self.state.epoch, "timer scheduled");
    }

    fn dispatch<H: SpawnFactory + Weapon>(&mut self, command: Command, host: &mut H) {
        match command {
            Command::StartNextWave => {
                let started =
                    self.state
                        .runner
                        .start_next_wave(host, &self.config, &mut self.events);
                self.after_wave_start(started);
            }
            Command::SpawnBoss => self.spawn_boss(),
            Command::ReloadLevel => self.load_campaign_level(host),
            Command::NextSurvivalWave => {
                self.state.survival_wave += 1;
                self.start_survival_wave(host);
            }
            Command::ClearStagger { part, token } => {
                if let Some(boss) = self.state.boss.as_mut() {
                    if boss.clear_stagger(part, token) {
                        debug!(?part, token, "stagger cleared");
                    }
                }
            }
            Command::ReleaseTelegraph => self.release_telegraph(host),
        }
    }

    fn after_wave_start(&mut self, started: Option<WaveStart>) {
        let Some(start) = started else {
            self.on_runner_exhausted();
            return;
        };
        let (number, color) = match self.state.mode {
            ModeKind::Survival => (self.state.survival_wave as usize, Some(Color::WHITE)),
            _ => (start.wave_index + 1, None),
        };
        info!(
            wave = number,
            total = start.total,
            spawned = start.spawned,
            "wave started"
        );
        self.events.push(DirectorEvent::Announcement {
            text: format!("Wave {number}"),
            color,
        });
        if start.completed {
            self.on_wave_completed(start.wave_index);
        }
    }

    fn on_wave_completed(&mut self, wave_index: usize) {
        info!(wave = wave_index + 1, "wave cleared");
        self.events.push(DirectorEvent::WaveCleared { wave_index });
        if self.state.boss_alive() {
            debug!("wave completion while boss alive ignored");
            return;
        }
        if self.state.runner.has_next_wave() {
            self.schedule(self.config.inter_wave_delay_ms, Command::StartNextWave);
            return;
        }
        self.state.runner.finish();
        self.on_runner_exhausted();
    }

    fn on_runner_exhausted(&mut self) {
        if self.state.mode == ModeKind::Survival && self.state.boss_guard {
            self.schedule(self.config.survival_wave_delay_ms, Command::NextSurvivalWave);
        } else {
            self.on_waves_exhausted();
        }
    }

    fn spawn_boss(&mut self) {
        if self.state.boss_alive() {
            debug!("boss already alive, spawn skipped");
            return;
        }
        let layout = BossLayout::for_arena(self.config.arena_width, self.config.arena_height);
        self.state.boss = Some(BossEncounter::new(
            layout,
            self.config.boss_eye_health,
            self.config.stagger_step,
        ));
        info!(origin = ?layout.origin(), "boss spawned");
        self.events.push(DirectorEvent::BossSpawned {
            origin: layout.origin(),
        });
    }

    fn on_boss_defeated(&mut self) {
        info!(mode = ?self.state.mode, "boss defeated");
        self.events.push(DirectorEvent::BossDefeated);
        match self.state.mode {
            ModeKind::Campaign => {
                let level = self.state.level;
                self.events.push(DirectorEvent::LevelComplete { level });
                self.state.level += 1;
                self.schedule(self.config.level_reload_delay_ms, Command::ReloadLevel);
            }
            ModeKind::Survival => {
                self.schedule(self.config.survival_wave_delay_ms, Command::NextSurvivalWave);
            }
            ModeKind::Scripted | ModeKind::Idle => {
                self.events.push(DirectorEvent::EncounterComplete);
            }
        }
    }

    fn release_telegraph<W: Weapon>(&mut self, weapon: &mut W) {
        let Some(boss) = self.state.boss.as_mut() else {
            return;
        };
        let mut order = None;
        if !boss.release_telegraph(|fire| order = Some(fire)) {
            debug!("telegraph release found nothing to fire");
            return;
        }
        if let Some(fire) = order {
            weapon.fire_at(fire.origin, fire.target);
            self.events.push(DirectorEvent::ProjectileFired {
                origin: fire.origin,
                target: fire.target,
            });
        }
    }

    fn load_campaign_level<S: SpawnFactory>(&mut self, spawner: &mut S) {
        let number = self.state.level;
        let level = scaling::campaign_level(number, &mut self.rng, &self.config);
        self.events.push(DirectorEvent::Announcement {
            text: format!("Level {number}"),
            color: Some(Color::WHITE),
        });
        self.load_level(level, spawner);
    }

    fn start_survival_wave<S: SpawnFactory>(&mut self, spawner: &mut S) {
        let wave = self.state.survival_wave;
        if wave % self.config.survival_boss_every == 0 {
            self.state.boss_guard = false;
        }
        if self.state.boss.as_ref().is_some_and(BossEncounter::is_defeated) {
            self.state.boss = None;
        }
        let definition = scaling::survival_wave(wave, &mut self.rng, &self.config);
        let started = self.state.runner.start(
            LevelDefinition::new(vec![definition]),
            spawner,
            &self.config,
            &mut self.events,
        );
        self.after_wave_start(started);
    }
}
