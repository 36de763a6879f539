//! Mutable encounter state owned by the director.

use arena_boss::BossEncounter;
use arena_core::enums::ModeKind;

use crate::wave_runner::WaveRunner;

/// Everything that belongs to the current level lifecycle.
///
/// `epoch` identifies the lifecycle. Timers scheduled under an older epoch
/// are dropped when they come due.
#[derive(Debug, Clone, Default)]
pub struct EncounterState {
    pub epoch: u64,
    pub mode: ModeKind,
    /// Campaign level number (1-based).
    pub level: u32,
    /// Survival wave count (1-based).
    pub survival_wave: u32,
    pub runner: WaveRunner,
    /// Set once the boss has been triggered for this level or survival cycle.
    pub boss_guard: bool,
    pub boss: Option<BossEncounter>,
}

impl EncounterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new lifecycle. Mode and level counters are kept.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.runner = WaveRunner::new();
        self.boss_guard = false;
        self.boss = None;
    }

    /// A boss exists and has not been defeated.
    pub fn boss_alive(&self) -> bool {
        self.boss.as_ref().is_some_and(|boss| !boss.is_defeated())
    }
}
