//! The composite boss: two eyes, one attacking head, one shared defeat.

use glam::Vec2;

use arena_core::enums::{BossPartId, FacingFrame, TelegraphPhase};
use arena_core::health::DamageResult;
use arena_core::state::{BossView, PartView};

use crate::facing::facing_frame;
use crate::layout::BossLayout;
use crate::parts::BossPart;
use crate::telegraph::{AttackTelegraph, FireOrder};

/// Outcome of damaging one boss part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossHit {
    pub part: BossPartId,
    pub result: DamageResult,
    pub stagger_token: Option<u64>,
    pub destroyed: bool,
    /// This hit destroyed the last standing part.
    pub defeated: bool,
}

/// A telegraph the head just started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelegraphStart {
    pub origin: Vec2,
    pub target: Vec2,
    pub facing: FacingFrame,
}

/// The boss encounter. The head has no health of its own; it stops
/// attacking the moment the eyes are all gone.
#[derive(Debug, Clone)]
pub struct BossEncounter {
    layout: BossLayout,
    eyes: [BossPart; 2],
    head: AttackTelegraph,
    head_frame: FacingFrame,
    stagger_step: u32,
    defeated: bool,
}

impl BossEncounter {
    pub fn new(layout: BossLayout, eye_health: u32, stagger_step: u32) -> Self {
        let eyes = BossPartId::ALL
            .map(|id| BossPart::new(id, eye_health, BossLayout::eye_flipped(id)));
        Self {
            layout,
            eyes,
            head: AttackTelegraph::default(),
            head_frame: FacingFrame::LookDown,
            stagger_step,
            defeated: false,
        }
    }

    pub fn layout(&self) -> &BossLayout {
        &self.layout
    }

    pub fn part(&self, id: BossPartId) -> &BossPart {
        &self.eyes[Self::slot(id)]
    }

    pub fn parts(&self) -> impl Iterator<Item = &BossPart> {
        self.eyes.iter()
    }

    pub fn telegraph(&self) -> &AttackTelegraph {
        &self.head
    }

    pub fn head_frame(&self) -> FacingFrame {
        self.head_frame
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    /// Damage one eye. Destroying the last one defeats the encounter and
    /// cancels any warning in flight.
    pub fn apply_damage(&mut self, id: BossPartId, amount: u32) -> BossHit {
        let stagger_step = self.stagger_step;
        let hit = self.eyes[Self::slot(id)].apply_damage(amount, stagger_step);

        let mut defeated = false;
        if hit.destroyed && !self.defeated && self.eyes.iter().all(BossPart::is_destroyed) {
            self.defeated = true;
            self.head.cancel();
            defeated = true;
        }

        BossHit {
            part: id,
            result: hit.result,
            stagger_token: hit.stagger_token,
            destroyed: hit.destroyed,
            defeated,
        }
    }

    pub fn clear_stagger(&mut self, id: BossPartId, token: u64) -> bool {
        self.eyes[Self::slot(id)].clear_stagger(token)
    }

    /// Point the head and every unlocked eye at the player.
    pub fn update_facing(&mut self, player_x: f32) {
        let bounds = self.layout.body;
        self.head_frame = facing_frame(&bounds, player_x, false);
        for eye in &mut self.eyes {
            eye.face(&bounds, player_x);
        }
    }

    /// Head animation reached `frame_index`. On `fire_frame`, with a target
    /// and an idle telegraph, the warning begins.
    pub fn on_head_frame(
        &mut self,
        frame_index: u32,
        fire_frame: u32,
        target: Option<Vec2>,
    ) -> Option<TelegraphStart> {
        if self.defeated || frame_index != fire_frame {
            return None;
        }
        let target = target?;
        if !self.head.begin(self.layout.muzzle, target) {
            return None;
        }
        Some(TelegraphStart {
            origin: self.layout.muzzle,
            target,
            facing: self.head_frame,
        })
    }

    /// Warning cue finished: fire at the last-known target.
    pub fn release_telegraph<F: FnOnce(FireOrder)>(&mut self, fire: F) -> bool {
        if self.defeated {
            self.head.cancel();
            return false;
        }
        self.head.complete_warning(fire)
    }

    pub fn telegraph_phase(&self) -> TelegraphPhase {
        self.head.phase()
    }

    pub fn view(&self) -> BossView {
        BossView {
            parts: self
                .eyes
                .iter()
                .map(|eye| PartView {
                    part: eye.id,
                    state: eye.state(),
                    health: eye.health().current(),
                    max_health: eye.health().max(),
                    frame: eye.frame(),
                })
                .collect(),
            head_frame: self.head_frame,
            telegraph: self.head.phase(),
            defeated: self.defeated,
        }
    }

    fn slot(id: BossPartId) -> usize {
        match id {
            BossPartId::EyeLeft => 0,
            BossPartId::EyeRight => 1,
        }
    }
}
