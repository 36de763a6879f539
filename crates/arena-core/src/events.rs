//! Events emitted by the director for the presentation layer.
//!
//! The director never calls the HUD directly; it queues `DirectorEvent`s and
//! the host drains them into a `Presentation` sink once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BossPartId, EnemyKind, FacingFrame, PowerupKind};
use crate::types::{Color, PlayerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DirectorEvent {
    /// Banner text such as "Wave 3" or "Level 2".
    Announcement { text: String, color: Option<Color> },
    /// "BOSS INCOMING!" banner fired at the start of the pre-boss delay.
    BossWarning { text: String, color: Color },
    /// A wave passed its kill threshold.
    WaveCleared { wave_index: usize },
    /// An enemy slot could not be spawned and was written off.
    SpawnFailed { kind: EnemyKind },
    BossSpawned { origin: Vec2 },
    PartStaggered { part: BossPartId },
    PartDestroyed { part: BossPartId },
    BossDefeated,
    /// The head started its warning cue.
    TelegraphStarted {
        origin: Vec2,
        target: Vec2,
        facing: FacingFrame,
    },
    /// The weapon collaborator was asked to fire.
    ProjectileFired { origin: Vec2, target: Vec2 },
    /// Every wave of a campaign level and its boss are done.
    LevelComplete { level: u32 },
    /// A scripted level finished; nothing further is scheduled.
    EncounterComplete,
    LevelUp { player: PlayerId, level: u32 },
    PowerupDropped { position: Vec2, kind: PowerupKind },
}

/// Sink for presentation events (HUD, audio, logging).
///
/// Only the three HUD calls are required; everything else is observable
/// through `observe`.
pub trait Presentation {
    fn announce_wave(&mut self, text: &str, color: Option<Color>);

    fn announce_boss_warning(&mut self, text: &str, color: Color);

    fn level_up(&mut self, player: PlayerId, level: u32);

    /// Non-fatal diagnostics such as dropped spawns.
    fn diagnostic(&mut self, _message: &str) {}

    /// Every event not covered by a dedicated call.
    fn observe(&mut self, _event: &DirectorEvent) {}
}

impl DirectorEvent {
    /// Route this event to the matching `Presentation` call.
    pub fn present_to(&self, sink: &mut dyn Presentation) {
        match self {
            DirectorEvent::Announcement { text, color } => sink.announce_wave(text, *color),
            DirectorEvent::BossWarning { text, color } => sink.announce_boss_warning(text, *color),
            DirectorEvent::LevelUp { player, level } => sink.level_up(*player, *level),
            DirectorEvent::SpawnFailed { kind } => {
                sink.diagnostic(&format!("failed to spawn {kind:?}, slot dropped"));
            }
            other => sink.observe(other),
        }
    }
}
