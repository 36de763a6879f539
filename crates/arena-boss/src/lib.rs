//! Boss logic for the arena encounter.
//!
//! Implements the multi-part boss as plain data: independently damageable
//! eyes with a stagger lock, the facing rule, and the head's two-phase
//! telegraphed attack. No scheduler or ECS dependency; timers are owned by
//! the director, which feeds results back in.

pub mod encounter;
pub mod facing;
pub mod layout;
pub mod parts;
pub mod telegraph;

pub use arena_core as core;
pub use encounter::{BossEncounter, BossHit, TelegraphStart};
pub use layout::BossLayout;

#[cfg(test)]
mod tests;
