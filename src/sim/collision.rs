//! Collision resolution against the live entity set
//!
//! Runs once per tick, after physics integration. The player's effective
//! box is computed once per pass and every live entity is tested against
//! that same box, so the outcome does not depend on iteration order. Every
//! overlap is resolved; the pass never short-circuits on the first hit.
//!
//! Collectible removal is deferred: ids are collected during the pass and
//! applied after it completes, so the collection is never mutated while it
//! is being iterated.

use super::state::{EntityKind, GameEvent, GameState};
use crate::consts::COIN_SCORE;

/// Test the player against every live entity and resolve each overlap by
/// kind:
/// - Ground/Obstacle: snap the player's feet onto the surface and clear
///   all vertical motion
/// - Collectible: award score and remove the entity (exactly once)
/// - Hazard: end the session
pub(crate) fn resolve(state: &mut GameState) {
    let player_box = state.player.bounding_box();
    let mut removed: Vec<u32> = Vec::new();

    for entity in &state.entities {
        if !player_box.overlaps(&entity.aabb()) {
            continue;
        }

        match entity.kind {
            EntityKind::Ground | EntityKind::Obstacle => {
                state.player.snap_to_surface(entity.aabb().top());
                state.events.push(GameEvent::Landed { id: entity.id });
            }
            EntityKind::Collectible => {
                state.score += COIN_SCORE;
                removed.push(entity.id);
                state.events.push(GameEvent::CoinCollected { id: entity.id });
            }
            EntityKind::Hazard => {
                state.over = true;
                state.events.push(GameEvent::GameOver);
            }
        }
    }

    state.remove_entities(&removed);
}
