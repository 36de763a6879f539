//! Per-player experience and level tracking.

use std::collections::HashMap;

use tracing::info;

use arena_core::constants::EXPERIENCE_PER_LEVEL;
use arena_core::events::DirectorEvent;
use arena_core::types::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub experience: u32,
    pub level: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            experience: 0,
            level: 1,
        }
    }
}

/// Experience is cumulative; level `L` is left once the total reaches
/// `L * EXPERIENCE_PER_LEVEL`.
#[derive(Debug, Clone, Default)]
pub struct ExperienceLedger {
    players: HashMap<PlayerId, Progress>,
}

impl ExperienceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self, player: PlayerId) -> Progress {
        self.players.get(&player).copied().unwrap_or_default()
    }

    /// Add `amount` experience. Pushes one `LevelUp` per level gained and
    /// returns the new level if it changed.
    pub fn credit(
        &mut self,
        player: PlayerId,
        amount: u32,
        events: &mut Vec<DirectorEvent>,
    ) -> Option<u32> {
        let progress = self.players.entry(player).or_default();
        progress.experience = progress.experience.saturating_add(amount);

        let before = progress.level;
        while progress.experience >= progress.level * EXPERIENCE_PER_LEVEL {
            progress.level += 1;
            info!(?player, level = progress.level, "level up");
            events.push(DirectorEvent::LevelUp {
                player,
                level: progress.level,
            });
        }
        (progress.level != before).then_some(progress.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_at_hundred_times_level() {
        let mut ledger = ExperienceLedger::new();
        let mut events = Vec::new();
        let p = PlayerId(0);

        for _ in 0..9 {
            assert_eq!(ledger.credit(p, 10, &mut events), None);
        }
        assert_eq!(ledger.credit(p, 10, &mut events), Some(2));
        assert_eq!(ledger.progress(p), Progress { experience: 100, level: 2 });

        // Level 2 is left at 200 total, not 100 more after the first level-up.
        for _ in 0..9 {
            ledger.credit(p, 10, &mut events);
        }
        assert_eq!(ledger.progress(p).level, 2);
        assert_eq!(ledger.credit(p, 10, &mut events), Some(3));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_players_are_independent() {
        let mut ledger = ExperienceLedger::new();
        let mut events = Vec::new();
        ledger.credit(PlayerId(1), 150, &mut events);
        assert_eq!(ledger.progress(PlayerId(1)).level, 2);
        assert_eq!(ledger.progress(PlayerId(2)), Progress::default());
        assert_eq!(
            events,
            vec![DirectorEvent::LevelUp {
                player: PlayerId(1),
                level: 2
            }]
        );
    }
}
