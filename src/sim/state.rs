//! Game state and core simulation types
//!
//! All state the render collaborator snapshots each frame lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

/// What a world entity is, and how the collision pass resolves contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Walkable floor; the player snaps onto its top edge on contact
    Ground,
    /// Solid fixture; resolved the same way as ground
    Obstacle,
    /// Awards score on contact and leaves the live set
    Collectible,
    /// Ends the session on contact
    Hazard,
}

/// A world entity: a center-anchored box with stable identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique within the live set, assigned at spawn, never reused
    pub id: u32,
    pub kind: EntityKind,
    /// Center of the collision box
    pub position: Vec2,
    /// Full extents (width, height)
    pub size: Vec2,
}

impl Entity {
    /// Collision box, centered on `position`
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

/// The player character
///
/// `position` is the ground-reference anchor; while airborne the visible
/// box is lifted by `jump_offset` (so the effective center sits at
/// `position.y - jump_offset`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    /// Vertical displacement above `position.y`; 0 when grounded
    pub jump_offset: f32,
    /// Negative-up vertical speed, nonzero only while jumping
    pub vertical_velocity: f32,
    /// Held horizontal speed, refreshed from staged input every tick
    pub horizontal_velocity: f32,
    pub is_jumping: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            jump_offset: 0.0,
            vertical_velocity: 0.0,
            horizontal_velocity: 0.0,
            is_jumping: false,
        }
    }

    /// Effective collision box: center lifted by the jump offset
    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.position.x, self.position.y - self.jump_offset),
            Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        )
    }

    /// Begin the ascent. Callers must check `is_jumping` first; a jump in
    /// progress is never restarted.
    pub(crate) fn start_jump(&mut self) {
        self.is_jumping = true;
        self.vertical_velocity = JUMP_VELOCITY;
    }

    /// Put the player's feet on a surface whose top edge is at
    /// `surface_top` and clear all vertical motion.
    pub(crate) fn snap_to_surface(&mut self, surface_top: f32) {
        self.position.y = surface_top - PLAYER_HEIGHT / 2.0;
        self.jump_offset = 0.0;
        self.is_jumping = false;
        self.vertical_velocity = 0.0;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Gameplay events emitted during a tick, for the render/audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A collectible was picked up and removed
    CoinCollected { id: u32 },
    /// The player was snapped onto a ground/obstacle surface
    Landed { id: u32 },
    /// A hazard ended the session
    GameOver,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Live entities; iteration order is insertion order
    pub entities: Vec<Entity>,
    /// Increases only via collectible pickups, never decreases
    pub score: u64,
    /// One-way flag: once true, ticks are no-ops
    pub over: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick (ephemeral, not snapshotted)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with the fixed level layout
    pub fn new() -> Self {
        let mut state = Self {
            player: Player::new(),
            entities: Vec::new(),
            score: 0,
            over: false,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };

        state.spawn(EntityKind::Ground, Vec2::new(0.0, 375.0), Vec2::new(1000.0, 50.0));
        state.spawn(EntityKind::Obstacle, Vec2::new(200.0, 300.0), Vec2::new(50.0, 100.0));
        state.spawn(EntityKind::Obstacle, Vec2::new(400.0, 300.0), Vec2::new(50.0, 100.0));
        state.spawn(EntityKind::Collectible, Vec2::new(150.0, 250.0), Vec2::new(20.0, 20.0));
        state.spawn(EntityKind::Collectible, Vec2::new(300.0, 250.0), Vec2::new(20.0, 20.0));
        state.spawn(EntityKind::Hazard, Vec2::new(500.0, 330.0), Vec2::new(30.0, 30.0));

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an entity to the live set
    pub fn spawn(&mut self, kind: EntityKind, position: Vec2, size: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Entity {
            id,
            kind,
            position,
            size,
        });
        id
    }

    /// Apply deferred removals collected during a collision pass
    pub(crate) fn remove_entities(&mut self, ids: &[u32]) {
        if ids.is_empty() {
            return;
        }
        self.entities.retain(|e| !ids.contains(&e.id));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
