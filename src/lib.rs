//! Coin Dash - a side-scrolling platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Session facade (input staging, tick driver, snapshots)
//!
//! Rendering, gesture decoding and the frame scheduler are external
//! collaborators: they stage inputs through [`session::GameSession`] and
//! read state snapshots after each tick.

pub mod session;
pub mod sim;

pub use session::{GameSession, MoveDir};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, ~16ms frame callback)
    pub const TICK_DT: f32 = 1.0 / 60.0;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Spawn point for a fresh session
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    /// Horizontal screen-bound clamp for the player center
    pub const MIN_PLAYER_X: f32 = 15.0;
    pub const MAX_PLAYER_X: f32 = 985.0;

    /// Downward acceleration per tick² (screen coords, +y is down)
    pub const GRAVITY: f32 = 0.8;
    /// Initial vertical velocity of a jump (negative = upward)
    pub const JUMP_VELOCITY: f32 = -18.0;
    /// Horizontal speed while an input direction is held, per tick
    pub const MOVE_SPEED: f32 = 5.0;

    /// Leftward patrol speed of hazards, per tick
    pub const HAZARD_SPEED: f32 = 1.0;
    /// Hazards crossing x < 0 wrap back to this x
    pub const HAZARD_RESPAWN_X: f32 = 1000.0;

    /// Score awarded per collectible pickup
    pub const COIN_SCORE: u64 = 10;
}
