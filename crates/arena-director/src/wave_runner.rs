//! Sequential wave runner for one level.
//!
//! Spawns a wave through the `SpawnFactory`, counts confirmed deaths, and
//! reports completion once the remaining count falls to the threshold. It
//! never schedules anything itself; the director decides what follows.

use std::collections::HashSet;

use tracing::{debug, warn};

use arena_core::config::DirectorConfig;
use arena_core::enums::RunnerPhase;
use arena_core::events::DirectorEvent;
use arena_core::state::RunnerView;
use arena_core::types::EnemyId;
use arena_core::waves::{LevelDefinition, WaveDefinition};

use crate::collaborators::SpawnFactory;

/// Result of starting a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveStart {
    pub wave_index: usize,
    /// Slots in the definition, including any that failed to spawn.
    pub total: u32,
    pub spawned: u32,
    /// Nothing in the wave is alive after spawning (empty wave, or every
    /// spawn failed).
    pub completed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct WaveRunner {
    level: LevelDefinition,
    phase: RunnerPhase,
    wave_index: usize,
    enemies_remaining: u32,
    total_in_wave: u32,
    threshold: u32,
    /// Enemies of the active wave not yet reported destroyed.
    live: HashSet<EnemyId>,
}

impl WaveRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RunnerPhase {
        self.phase
    }

    pub fn wave_index(&self) -> usize {
        self.wave_index
    }

    pub fn wave_count(&self) -> usize {
        self.level.wave_count()
    }

    pub fn enemies_remaining(&self) -> u32 {
        self.enemies_remaining
    }

    pub fn total_in_wave(&self) -> u32 {
        self.total_in_wave
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn level(&self) -> &LevelDefinition {
        &self.level
    }

    pub fn is_tracking(&self, id: EnemyId) -> bool {
        self.live.contains(&id)
    }

    pub fn has_next_wave(&self) -> bool {
        self.wave_index + 1 < self.level.wave_count()
    }

    /// Take ownership of `level` and start its first wave.
    ///
    /// Returns `None` (and goes straight to `AllWavesExhausted`) for a level
    /// with no waves.
    pub fn start(
        &mut self,
        level: LevelDefinition,
        spawner: &mut dyn SpawnFactory,
        config: &DirectorConfig,
        events: &mut Vec<DirectorEvent>,
    ) -> Option<WaveStart> {
        self.level = level;
        self.live.clear();
        self.wave_index = 0;
        if self.level.waves.is_empty() {
            self.exhaust();
            return None;
        }
        Some(self.spawn_current(spawner, config, events))
    }

    /// Start the wave after the one that just completed.
    ///
    /// Returns `None` once the level has no waves left, leaving the runner in
    /// `AllWavesExhausted`. Calls while a wave is still active are ignored.
    pub fn start_next_wave(
        &mut self,
        spawner: &mut dyn SpawnFactory,
        config: &DirectorConfig,
        events: &mut Vec<DirectorEvent>,
    ) -> Option<WaveStart> {
        match self.phase {
            RunnerPhase::WaveComplete => {}
            RunnerPhase::Idle | RunnerPhase::WaveActive | RunnerPhase::AllWavesExhausted => {
                debug!(phase = ?self.phase, "start_next_wave ignored");
                return None;
            }
        }
        if !self.has_next_wave() {
            self.exhaust();
            return None;
        }
        self.wave_index += 1;
        Some(self.spawn_current(spawner, config, events))
    }

    /// Move from `WaveComplete` to `AllWavesExhausted` when no wave follows.
    pub fn finish(&mut self) -> bool {
        if self.phase != RunnerPhase::WaveComplete || self.has_next_wave() {
            return false;
        }
        self.exhaust();
        true
    }

    /// One enemy of the active wave died. Returns the wave index the first
    /// time the wave reaches its completion threshold.
    ///
    /// Ids that are unknown, already reported, or belong to an earlier wave
    /// are ignored.
    pub fn on_enemy_destroyed(&mut self, id: EnemyId) -> Option<usize> {
        if !self.live.remove(&id) {
            debug!(?id, "destroy notification for untracked enemy ignored");
            return None;
        }
        self.enemies_remaining = self.enemies_remaining.saturating_sub(1);
        if self.phase == RunnerPhase::WaveActive && self.enemies_remaining <= self.threshold {
            self.phase = RunnerPhase::WaveComplete;
            return Some(self.wave_index);
        }
        None
    }

    pub fn view(&self) -> RunnerView {
        RunnerView {
            phase: self.phase,
            wave_index: self.wave_index,
            wave_count: self.level.wave_count(),
            enemies_remaining: self.enemies_remaining,
            total_in_wave: self.total_in_wave,
        }
    }

    fn spawn_current(
        &mut self,
        spawner: &mut dyn SpawnFactory,
        config: &DirectorConfig,
        events: &mut Vec<DirectorEvent>,
    ) -> WaveStart {
        let wave: &WaveDefinition = &self.level.waves[self.wave_index];
        let total = wave.len() as u32;
        self.total_in_wave = total;
        self.enemies_remaining = total;
        self.threshold = config.completion_threshold(total);
        self.live.clear();
        self.phase = RunnerPhase::WaveActive;

        let mut spawned = 0;
        for descriptor in &wave.enemies {
            match spawner.spawn(descriptor) {
                Some(id) if self.live.insert(id) => spawned += 1,
                Some(id) => {
                    warn!(?id, "spawn factory returned a duplicate id, slot dropped");
                    self.enemies_remaining -= 1;
                    events.push(DirectorEvent::SpawnFailed {
                        kind: descriptor.kind,
                    });
                }
                None => {
                    warn!(kind = ?descriptor.kind, "spawn failed, slot dropped");
                    self.enemies_remaining -= 1;
                    events.push(DirectorEvent::SpawnFailed {
                        kind: descriptor.kind,
                    });
                }
            }
        }

        // A wave with live enemies only completes through deaths.
        let completed = self.live.is_empty();
        if completed {
            self.phase = RunnerPhase::WaveComplete;
        }
        debug!(
            wave = self.wave_index,
            total, spawned, threshold = self.threshold, completed, "wave started"
        );
        WaveStart {
            wave_index: self.wave_index,
            total,
            spawned,
            completed,
        }
    }

    fn exhaust(&mut self) {
        self.phase = RunnerPhase::AllWavesExhausted;
        self.live.clear();
        self.enemies_remaining = 0;
    }
}
