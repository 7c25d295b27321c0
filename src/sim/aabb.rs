//! Axis-aligned bounding boxes
//!
//! Every body in the game (player, baddies, stars, platforms) is a box
//! defined by its top-left corner and size, in screen space (y grows down).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Build from corner coordinates and dimensions
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict intersection test. Boxes that only share an edge don't intersect,
    /// so a body resting exactly on a surface is not considered penetrating.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Overlap extents along each axis (zero on an axis with no overlap)
    pub fn overlap(&self, other: &Aabb) -> Vec2 {
        let x = (self.right().min(other.right()) - self.left().max(other.left())).max(0.0);
        let y = (self.bottom().min(other.bottom()) - self.top().max(other.top())).max(0.0);
        Vec2::new(x, y)
    }
}
