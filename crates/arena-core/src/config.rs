//! Director tuning, loadable from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading or validating a `DirectorConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("arena must be larger than twice the spawn margin ({width}x{height}, margin {margin})")]
    ArenaTooSmall { width: f32, height: f32, margin: f32 },

    #[error("wave remaining ratio must be in [0, 1), got {0}")]
    RemainingRatio(f64),

    #[error("stagger step must be non-zero")]
    ZeroStaggerStep,

    #[error("survival boss cadence must be non-zero")]
    ZeroBossCadence,

    #[error("head animation needs at least one frame")]
    ZeroHeadFrames,

    #[error("telegraph frame {frame} is outside the {count}-frame head loop")]
    TelegraphFrameOutOfRange { frame: u32, count: u32 },
}

/// Every delay and tuning value the director uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    pub spawn_margin: f32,

    pub inter_wave_delay_ms: Millis,
    pub pre_boss_delay_ms: Millis,
    pub level_reload_delay_ms: Millis,
    pub survival_wave_delay_ms: Millis,
    /// Fraction of a wave that may still be alive when it counts as complete.
    pub wave_remaining_ratio: f64,

    pub survival_base_count: u32,
    pub survival_count_per_wave: u32,
    pub survival_boss_every: u32,

    pub boss_eye_health: u32,
    pub stagger_step: u32,
    pub stagger_duration_ms: Millis,
    pub telegraph_warning_ms: Millis,
    pub telegraph_fire_frame: u32,
    pub head_frame_period_ms: Millis,
    pub head_frame_count: u32,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            spawn_margin: SPAWN_MARGIN,
            inter_wave_delay_ms: INTER_WAVE_DELAY_MS,
            pre_boss_delay_ms: PRE_BOSS_DELAY_MS,
            level_reload_delay_ms: LEVEL_RELOAD_DELAY_MS,
            survival_wave_delay_ms: SURVIVAL_WAVE_DELAY_MS,
            wave_remaining_ratio: WAVE_REMAINING_RATIO,
            survival_base_count: SURVIVAL_BASE_COUNT,
            survival_count_per_wave: SURVIVAL_COUNT_PER_WAVE,
            survival_boss_every: SURVIVAL_BOSS_EVERY,
            boss_eye_health: BOSS_EYE_HEALTH,
            stagger_step: STAGGER_STEP,
            stagger_duration_ms: STAGGER_DURATION_MS,
            telegraph_warning_ms: TELEGRAPH_WARNING_MS,
            telegraph_fire_frame: TELEGRAPH_FIRE_FRAME,
            head_frame_period_ms: HEAD_FRAME_PERIOD_MS,
            head_frame_count: HEAD_FRAME_COUNT,
        }
    }
}

impl DirectorConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DirectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let margin2 = self.spawn_margin * 2.0;
        if !(self.arena_width > margin2 && self.arena_height > margin2) {
            return Err(ConfigError::ArenaTooSmall {
                width: self.arena_width,
                height: self.arena_height,
                margin: self.spawn_margin,
            });
        }
        if !(0.0..1.0).contains(&self.wave_remaining_ratio) {
            return Err(ConfigError::RemainingRatio(self.wave_remaining_ratio));
        }
        if self.stagger_step == 0 {
            return Err(ConfigError::ZeroStaggerStep);
        }
        if self.survival_boss_every == 0 {
            return Err(ConfigError::ZeroBossCadence);
        }
        if self.head_frame_count == 0 {
            return Err(ConfigError::ZeroHeadFrames);
        }
        if self.telegraph_fire_frame >= self.head_frame_count {
            return Err(ConfigError::TelegraphFrameOutOfRange {
                frame: self.telegraph_fire_frame,
                count: self.head_frame_count,
            });
        }
        Ok(())
    }

    /// Enemies that may remain when a wave of `total` counts as complete:
    /// `ceil(ratio * total)`.
    pub fn completion_threshold(&self, total: u32) -> u32 {
        // 0.1 * 30 is 3.0000000000000004 in binary floating point.
        let scaled = self.wave_remaining_ratio * total as f64;
        (scaled - 1e-9).ceil().max(0.0) as u32
    }
}
