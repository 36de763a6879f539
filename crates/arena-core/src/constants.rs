//! Encounter constants and tuning defaults.
//!
//! Every value here is the default of a `DirectorConfig` field unless noted.

/// Logical milliseconds.
pub type Millis = u64;

// --- Arena ---

/// Arena width in world units.
pub const ARENA_WIDTH: f32 = 1600.0;

/// Arena height in world units.
pub const ARENA_HEIGHT: f32 = 1200.0;

/// Distance from the arena edge inside which generated enemies never spawn.
pub const SPAWN_MARGIN: f32 = 100.0;

// --- Wave pacing ---

/// Delay between a completed wave and the next one (campaign / scripted).
pub const INTER_WAVE_DELAY_MS: Millis = 2000;

/// Delay between the "boss incoming" announcement and the boss appearing.
pub const PRE_BOSS_DELAY_MS: Millis = 3000;

/// Delay between a campaign level completing and the next level loading.
pub const LEVEL_RELOAD_DELAY_MS: Millis = 5000;

/// Delay between survival waves.
pub const SURVIVAL_WAVE_DELAY_MS: Millis = 3000;

/// A wave completes once at most this fraction of its enemies remain.
pub const WAVE_REMAINING_RATIO: f64 = 0.1;

// --- Survival scaling ---

/// Enemy count of the survival wave before the per-wave increment.
pub const SURVIVAL_BASE_COUNT: u32 = 10;

/// Enemies added per survival wave.
pub const SURVIVAL_COUNT_PER_WAVE: u32 = 5;

/// Every Nth survival wave re-arms the boss.
pub const SURVIVAL_BOSS_EVERY: u32 = 5;

// --- Campaign scaling ---

/// Waves in a campaign level before the level bonus.
pub const CAMPAIGN_BASE_WAVES: u32 = 3;

/// Upper bound on waves per campaign level.
pub const CAMPAIGN_MAX_WAVES: u32 = 10;

/// Base enemies per campaign wave.
pub const CAMPAIGN_BASE_COUNT: u32 = 5;

/// Health shared by every generated enemy before difficulty scaling.
pub const GENERATED_BASE_HEALTH: u32 = 100;

/// Health added per difficulty point.
pub const HEALTH_PER_DIFFICULTY: u32 = 10;

/// Speed added per difficulty point.
pub const SPEED_PER_DIFFICULTY: f32 = 5.0;

/// Upper bound (inclusive) of the roll deciding between a walker and a fast enemy.
pub const KIND_ROLL_MAX: u32 = 10;

// --- Boss ---

/// Health of each boss eye.
pub const BOSS_EYE_HEALTH: u32 = 6000;

/// Eyes stagger whenever their health crosses a multiple of this.
pub const STAGGER_STEP: u32 = 1000;

/// How long a staggered eye stays locked.
pub const STAGGER_DURATION_MS: Millis = 750;

/// Duration of the warning cue before the head fires.
pub const TELEGRAPH_WARNING_MS: Millis = 500;

/// Head animation frame on which the attack is telegraphed.
pub const TELEGRAPH_FIRE_FRAME: u32 = 2;

/// Head animation frame period (1 fps loop).
pub const HEAD_FRAME_PERIOD_MS: Millis = 1000;

/// Number of frames in the head animation loop.
pub const HEAD_FRAME_COUNT: u32 = 4;

/// Sprite scale applied to the whole boss.
pub const BOSS_SCALE: f32 = 4.0;

/// Unscaled boss body size (top 96x58 stacked on bottom 80x56).
pub const BOSS_BODY_SIZE: (f32, f32) = (96.0, 114.0);

/// Vertical lift applied to the boss above the arena centre.
pub const BOSS_LIFT: f32 = 100.0;

/// Projectile origin relative to the boss body origin (already scaled).
pub const BOSS_MUZZLE_OFFSET: (f32, f32) = (352.0, 95.0);

// --- Progression ---

/// Experience needed per player level.
pub const EXPERIENCE_PER_LEVEL: u32 = 100;

// --- Simulation ---

/// Enemies stop closing in once this near their target player.
pub const CHASE_STOP_DISTANCE: f32 = 24.0;

/// Speed of projectiles fired by the boss head.
pub const PROJECTILE_SPEED: f32 = 350.0;
