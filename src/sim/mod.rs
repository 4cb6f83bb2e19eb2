//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (entity insertion order)
//! - No rendering or platform dependencies

pub mod aabb;
mod collision;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use state::{Entity, EntityKind, GameEvent, GameState, Player};
pub use tick::{TickInput, tick};
