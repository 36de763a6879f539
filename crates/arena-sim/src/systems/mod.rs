//! ECS systems that operate on the arena world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They own no state of their own.

pub mod animation;
pub mod cleanup;
pub mod damage;
pub mod movement;
pub mod snapshot;
