//! Identifiers and small geometric types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handle of a live enemy owned by the world collection.
///
/// The director only keeps these for identity and lookup; it never owns
/// the entity behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u64);

/// One connected player (one per input device).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// Display color for announcements, as 0xRRGGBB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xff_ff_ff);
    pub const RED: Color = Color(0xff_00_00);
}

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}
