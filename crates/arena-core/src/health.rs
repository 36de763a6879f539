//! Health bookkeeping for anything that can take damage.

use serde::{Deserialize, Serialize};

/// Current/maximum health of one damageable entity.
///
/// Depletion is terminal: the pool reports it exactly once, and further
/// damage leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPool {
    current: u32,
    max: u32,
    depleted: bool,
}

/// Outcome of a single `HealthPool::apply_damage` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageResult {
    /// Health before the hit.
    pub previous: u32,
    /// Health after the hit.
    pub current: u32,
    /// True only for the hit that emptied the pool.
    pub depleted: bool,
}

impl DamageResult {
    /// Whether the hit changed anything.
    pub fn changed(&self) -> bool {
        self.previous != self.current || self.depleted
    }
}

impl HealthPool {
    /// A full pool. A zero maximum starts already depleted.
    pub fn new(max: u32) -> Self {
        Self {
            current: max,
            max,
            depleted: max == 0,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.depleted
    }

    /// Subtract `amount`. Damage is unsigned, so rejecting negative values is
    /// the caller's job.
    pub fn apply_damage(&mut self, amount: u32) -> DamageResult {
        let previous = self.current;
        if self.depleted {
            return DamageResult {
                previous,
                current: previous,
                depleted: false,
            };
        }

        self.current = self.current.saturating_sub(amount);
        let depleted = self.current == 0;
        self.depleted = depleted;

        DamageResult {
            previous,
            current: self.current,
            depleted,
        }
    }
}
