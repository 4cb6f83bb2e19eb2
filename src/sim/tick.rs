//! Fixed timestep simulation tick
//!
//! One tick = staged jump trigger + physics integration, then the
//! collision pass, then hazard patrol. Once the session is over every
//! subsequent tick is a no-op.

use super::collision;
use super::state::{EntityKind, GameState};
use crate::consts::*;

/// Input staged for a single tick (deterministic)
///
/// `horizontal_velocity` is a held value and persists across ticks until
/// the input collaborator changes it; `jump` is a one-shot trigger the
/// caller clears after the tick consumes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held horizontal velocity: ±`MOVE_SPEED`, or 0 when idle
    pub horizontal_velocity: f32,
    /// Jump trigger; ignored while the player is airborne
    pub jump: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    if state.over {
        return;
    }
    state.time_ticks += 1;

    integrate_player(state, input);
    collision::resolve(state);
    patrol_hazards(state);
}

/// Physics integration: horizontal move with the screen-bound clamp, then
/// the jump parabola while airborne.
fn integrate_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;

    if input.jump && !player.is_jumping {
        player.start_jump();
    }

    player.horizontal_velocity = input.horizontal_velocity;
    player.position.x =
        (player.position.x + player.horizontal_velocity).clamp(MIN_PLAYER_X, MAX_PLAYER_X);

    if player.is_jumping {
        player.jump_offset += player.vertical_velocity;
        player.vertical_velocity += GRAVITY;

        // Landing is the offset returning to zero, not a surface check: a
        // jump carried over a gap still "lands" in midair at offset 0.
        if player.jump_offset <= 0.0 {
            player.jump_offset = 0.0;
            player.is_jumping = false;
            player.vertical_velocity = 0.0;
        }
    }
}

/// Advance every live hazard one step of its leftward patrol, wrapping to
/// the right edge once it crosses x = 0. Runs independent of collision
/// outcomes, including on the tick that ends the session.
fn patrol_hazards(state: &mut GameState) {
    for entity in &mut state.entities {
        if entity.kind != EntityKind::Hazard {
            continue;
        }
        entity.position.x -= HAZARD_SPEED;
        if entity.position.x < 0.0 {
            entity.position.x = HAZARD_RESPAWN_X;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn hazard_x(state: &GameState) -> f32 {
        state
            .entities
            .iter()
            .find(|e| e.kind == EntityKind::Hazard)
            .expect("fixed layout has a hazard")
            .position
            .x
    }

    #[test]
    fn test_fixed_layout() {
        let state = GameState::new();
        assert_eq!(state.entities.len(), 6);
        assert_eq!(state.score, 0);
        assert!(!state.over);

        // Stable unique ids in insertion order
        let ids: Vec<u32> = state.entities.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let kinds: Vec<EntityKind> = state.entities.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Ground,
                EntityKind::Obstacle,
                EntityKind::Obstacle,
                EntityKind::Collectible,
                EntityKind::Collectible,
                EntityKind::Hazard,
            ]
        );

        assert_eq!(state.player.position, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    }

    #[test]
    fn test_jump_lands_within_a_single_tick() {
        // The ascent starts at offset 0, so the first integration step
        // (0 - 18 <= 0) trips the landing check immediately.
        let mut state = GameState::new();
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert!(!state.player.is_jumping);
        assert_eq!(state.player.jump_offset, 0.0);
        assert_eq!(state.player.vertical_velocity, 0.0);
        assert_eq!(state.player.position.y, PLAYER_START_Y);
    }

    #[test]
    fn test_jump_trigger_ignored_while_airborne() {
        let mut state = GameState::new();
        state.player.is_jumping = true;
        state.player.vertical_velocity = -10.0;
        state.player.jump_offset = 30.0;

        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        // The in-flight parabola continues; no re-trigger to -18
        assert!(state.player.is_jumping);
        assert!((state.player.vertical_velocity - (-10.0 + GRAVITY)).abs() < 1e-6);
        assert_eq!(state.player.jump_offset, 20.0);
    }

    #[test]
    fn test_airborne_integration_step() {
        let mut state = GameState::new();
        state.player.is_jumping = true;
        state.player.vertical_velocity = JUMP_VELOCITY;
        state.player.jump_offset = 100.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.jump_offset, 100.0 + JUMP_VELOCITY);
        assert!((state.player.vertical_velocity - (JUMP_VELOCITY + GRAVITY)).abs() < 1e-6);
    }

    #[test]
    fn test_horizontal_clamp_right() {
        let mut state = GameState::new();
        state.player.position.x = 983.0;
        let input = TickInput {
            horizontal_velocity: MOVE_SPEED,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.position.x, MAX_PLAYER_X);
        tick(&mut state, &input);
        assert_eq!(state.player.position.x, MAX_PLAYER_X);
    }

    #[test]
    fn test_horizontal_clamp_left() {
        let mut state = GameState::new();
        state.player.position.x = 17.0;
        let input = TickInput {
            horizontal_velocity: -MOVE_SPEED,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.position.x, MIN_PLAYER_X);
        tick(&mut state, &input);
        assert_eq!(state.player.position.x, MIN_PLAYER_X);
    }

    #[test]
    fn test_hazard_patrols_left_each_tick() {
        let mut state = GameState::new();
        let x0 = hazard_x(&state);
        tick(&mut state, &TickInput::default());
        assert_eq!(hazard_x(&state), x0 - HAZARD_SPEED);
    }

    #[test]
    fn test_hazard_wraps_past_left_edge() {
        let mut state = GameState::new();
        for e in &mut state.entities {
            if e.kind == EntityKind::Hazard {
                e.position.x = 0.0;
            }
        }
        // 0 - 1 < 0, so the hazard respawns at the right edge
        tick(&mut state, &TickInput::default());
        assert_eq!(hazard_x(&state), HAZARD_RESPAWN_X);

        // One more tick resumes the ordinary patrol
        tick(&mut state, &TickInput::default());
        assert_eq!(hazard_x(&state), HAZARD_RESPAWN_X - HAZARD_SPEED);
    }

    #[test]
    fn test_hazard_moves_on_the_tick_that_ends_the_session() {
        let mut state = GameState::new();
        state.player.position = Vec2::new(500.0, 330.0);
        let x0 = hazard_x(&state);

        tick(&mut state, &TickInput::default());

        assert!(state.over);
        assert_eq!(hazard_x(&state), x0 - HAZARD_SPEED);
    }

    #[test]
    fn test_over_is_terminal_and_state_freezes() {
        let mut state = GameState::new();
        state.player.position = Vec2::new(500.0, 330.0);
        tick(&mut state, &TickInput::default());
        assert!(state.over);

        let frozen = serde_json::to_value(&state).expect("state serializes");
        let input = TickInput {
            horizontal_velocity: MOVE_SPEED,
            jump: true,
        };
        tick(&mut state, &input);
        tick(&mut state, &input);

        assert_eq!(serde_json::to_value(&state).expect("state serializes"), frozen);
    }

    #[test]
    fn test_tick_counter_stops_with_the_session() {
        let mut state = GameState::new();
        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 2);

        state.over = true;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 2);
    }

    proptest! {
        #[test]
        fn invariants_hold_over_arbitrary_inputs(
            seq in prop::collection::vec((-1i8..=1, any::<bool>()), 0..300)
        ) {
            let mut state = GameState::new();
            let mut last_score = state.score;
            let mut last_count = state.entities.len();
            let mut was_over = state.over;

            for (dir, jump) in seq {
                let input = TickInput {
                    horizontal_velocity: f32::from(dir) * MOVE_SPEED,
                    jump,
                };
                tick(&mut state, &input);

                // Bound invariant and non-negative offset
                prop_assert!((MIN_PLAYER_X..=MAX_PLAYER_X).contains(&state.player.position.x));
                prop_assert!(state.player.jump_offset >= 0.0);

                // Grounded implies no vertical motion
                if !state.player.is_jumping {
                    prop_assert_eq!(state.player.vertical_velocity, 0.0);
                    prop_assert_eq!(state.player.jump_offset, 0.0);
                }

                // Score moves only in +10 steps, one removal per step
                prop_assert!(state.score >= last_score);
                let removed = last_count - state.entities.len();
                prop_assert_eq!(state.score - last_score, removed as u64 * COIN_SCORE);

                // Over is one-way
                prop_assert!(!was_over || state.over);

                last_score = state.score;
                last_count = state.entities.len();
                was_over = state.over;
            }
        }
    }
}
