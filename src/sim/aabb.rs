//! Axis-aligned box geometry for the player and world entities
//!
//! Everything in the world is a center-anchored rectangle in screen space:
//! - center: the anchor point (+y is down, as on screen)
//! - size: full width/height extents
//!
//! Overlap is strict on both axes, so boxes that merely share an edge do
//! not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A center-anchored axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center of the box
    pub center: Vec2,
    /// Full extents (width, height)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Top edge y (screen coords: top has the smaller y)
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    /// Bottom edge y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Left edge x
    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    /// Separating-axis overlap test between two boxes
    ///
    /// Strict inequality on both axes: touching edges count as a miss.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() < (self.size.x + other.size.x) / 2.0
            && (self.center.y - other.center.y).abs() < (self.size.y + other.size.y) / 2.0
    }

    /// Check if a point is inside the box (strict)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.left()
            && point.x < self.right()
            && point.y > self.top()
            && point.y < self.bottom()
    }
}
