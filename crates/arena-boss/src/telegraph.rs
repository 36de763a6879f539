//! Two-phase attack primitive: warn, then fire.

use glam::Vec2;

use arena_core::enums::TelegraphPhase;

/// A resolved shot handed to the weapon collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireOrder {
    pub origin: Vec2,
    pub target: Vec2,
}

/// Warn-then-fire state. The warning duration is owned by whoever schedules
/// `complete_warning`, so the reaction window is fixed and jitter-free.
#[derive(Debug, Clone, Default)]
pub struct AttackTelegraph {
    phase: TelegraphPhase,
    origin: Vec2,
    target: Option<Vec2>,
    shots_fired: u32,
}

impl AttackTelegraph {
    pub fn phase(&self) -> TelegraphPhase {
        self.phase
    }

    /// Last-known target position while warning.
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    /// `idle -> warning`. Returns false (and changes nothing) unless idle.
    pub fn begin(&mut self, origin: Vec2, target: Vec2) -> bool {
        if self.phase != TelegraphPhase::Idle {
            return false;
        }
        self.phase = TelegraphPhase::Warning;
        self.origin = origin;
        self.target = Some(target);
        true
    }

    /// `warning -> firing -> idle`, calling `fire` exactly once in between.
    /// Returns false if no warning was in progress (e.g. it was cancelled).
    pub fn complete_warning<F: FnOnce(FireOrder)>(&mut self, fire: F) -> bool {
        if self.phase != TelegraphPhase::Warning {
            return false;
        }
        let Some(target) = self.target else {
            self.reset();
            return false;
        };

        self.phase = TelegraphPhase::Firing;
        fire(FireOrder {
            origin: self.origin,
            target,
        });
        self.shots_fired += 1;
        self.reset();
        true
    }

    /// Drop any in-flight warning.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = TelegraphPhase::Idle;
        self.target = None;
    }
}
