//! Session facade over the simulation core
//!
//! Owns the game state for one playthrough and the staged-input slot the
//! external collaborators write into. The input collaborator is the single
//! producer and `advance()` the single consumer: setters only stage values
//! (last write wins, no queuing), and nothing moves until the external
//! scheduler calls `advance()`.

use serde::{Deserialize, Serialize};

use crate::consts::MOVE_SPEED;
use crate::sim::{Entity, GameEvent, GameState, Player, TickInput, tick};

/// Horizontal input direction, scaled to `MOVE_SPEED` by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveDir {
    Left,
    #[default]
    Idle,
    Right,
}

impl MoveDir {
    /// Held velocity this direction maps to, in units per tick
    pub fn velocity(self) -> f32 {
        match self {
            MoveDir::Left => -MOVE_SPEED,
            MoveDir::Idle => 0.0,
            MoveDir::Right => MOVE_SPEED,
        }
    }
}

/// One playthrough, from the fixed layout to the over state
///
/// Single-threaded and tick-driven: input setters and `advance()` must be
/// called from one thread, with one tick completing before the next
/// starts. Once the session is over, `advance()` is an idempotent no-op;
/// the render collaborator decides what a terminal frame looks like.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    staged: TickInput,
}

impl GameSession {
    /// Start a session with the fixed entity layout
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            staged: TickInput::default(),
        }
    }

    /// Stage the held movement direction; persists until changed
    pub fn set_horizontal_velocity(&mut self, dir: MoveDir) {
        self.staged.horizontal_velocity = dir.velocity();
    }

    /// Stage a jump for the next tick. The trigger is dropped if the
    /// player is still airborne when that tick runs.
    pub fn jump(&mut self) {
        self.staged.jump = true;
    }

    /// Advance the simulation by one fixed step
    pub fn advance(&mut self) {
        let input = self.staged;
        tick(&mut self.state, &input);
        // One-shot inputs are consumed by the tick they were staged for
        self.staged.jump = false;

        for event in &self.state.events {
            match event {
                GameEvent::CoinCollected { id } => {
                    log::info!("collected coin {} (score {})", id, self.state.score);
                }
                GameEvent::Landed { id } => {
                    log::debug!("landed on entity {}", id);
                }
                GameEvent::GameOver => {
                    log::info!(
                        "game over at tick {} with score {}",
                        self.state.time_ticks,
                        self.state.score
                    );
                }
            }
        }
    }

    /// Player state for rendering
    pub fn player(&self) -> &Player {
        &self.state.player
    }

    /// Live entities in stable (insertion) order
    pub fn entities(&self) -> &[Entity] {
        &self.state.entities
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn is_over(&self) -> bool {
        self.state.over
    }

    /// Full serializable state snapshot for the render collaborator
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
