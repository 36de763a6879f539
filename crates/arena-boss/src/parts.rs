//! Independently damageable boss parts.

use arena_core::enums::{BossPartId, FacingFrame, PartState};
use arena_core::health::{DamageResult, HealthPool};
use arena_core::types::Bounds;

use crate::facing::facing_frame;

/// One eye of the boss.
#[derive(Debug, Clone)]
pub struct BossPart {
    pub id: BossPartId,
    health: HealthPool,
    state: PartState,
    flipped: bool,
    frame: FacingFrame,
    /// Bumped on every stagger; only the matching clear releases the lock.
    stagger_token: u64,
}

/// Result of one hit on a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartHit {
    pub result: DamageResult,
    /// Token to hand back to `clear_stagger` once the lock expires.
    pub stagger_token: Option<u64>,
    /// The part transitioned to `Destroyed` on this hit.
    pub destroyed: bool,
}

/// True when a hit from `previous` to `current` passes a multiple of `step`
/// (landing exactly on one counts), and the part survives it.
pub fn crosses_stagger_threshold(previous: u32, current: u32, step: u32) -> bool {
    if step == 0 || current == 0 || current >= previous {
        return false;
    }
    let boundary = current.div_ceil(step) * step;
    boundary < previous
}

impl BossPart {
    pub fn new(id: BossPartId, max_health: u32, flipped: bool) -> Self {
        Self {
            id,
            health: HealthPool::new(max_health),
            state: PartState::Alive,
            flipped,
            frame: FacingFrame::LookDown,
            stagger_token: 0,
        }
    }

    pub fn health(&self) -> &HealthPool {
        &self.health
    }

    pub fn state(&self) -> PartState {
        self.state
    }

    pub fn frame(&self) -> FacingFrame {
        self.frame
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == PartState::Destroyed
    }

    pub fn is_staggered(&self) -> bool {
        self.state == PartState::Staggered
    }

    /// Apply damage. Staggered parts still take damage.
    pub fn apply_damage(&mut self, amount: u32, stagger_step: u32) -> PartHit {
        let result = self.health.apply_damage(amount);

        if result.depleted {
            self.state = PartState::Destroyed;
            return PartHit {
                result,
                stagger_token: None,
                destroyed: true,
            };
        }

        let mut stagger_token = None;
        if crosses_stagger_threshold(result.previous, result.current, stagger_step) {
            self.stagger_token += 1;
            self.state = PartState::Staggered;
            self.frame = FacingFrame::Blink;
            stagger_token = Some(self.stagger_token);
        }

        PartHit {
            result,
            stagger_token,
            destroyed: false,
        }
    }

    /// Release the stagger lock if `token` is the latest one issued.
    pub fn clear_stagger(&mut self, token: u64) -> bool {
        if self.state != PartState::Staggered || token != self.stagger_token {
            return false;
        }
        self.state = PartState::Alive;
        self.frame = FacingFrame::LookDown;
        true
    }

    /// Track the player. Frozen while staggered or destroyed.
    pub fn face(&mut self, bounds: &Bounds, player_x: f32) {
        if self.state == PartState::Alive {
            self.frame = facing_frame(bounds, player_x, self.flipped);
        }
    }
}
