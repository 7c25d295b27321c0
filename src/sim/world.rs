//! World bounds and static level geometry
//!
//! The level is fixed: two side walls, a ground slab and two floating ledges.
//! None of it moves or changes during a run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

/// What kind of surface a static body is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Side boundary (blocks movement, not a platform)
    Wall,
    /// Full-width floor
    Ground,
    /// Floating platform
    Ledge,
}

impl SurfaceKind {
    /// Grounds and ledges are platforms; walls are not
    pub fn is_platform(&self) -> bool {
        matches!(self, SurfaceKind::Ground | SurfaceKind::Ledge)
    }
}

/// An immovable collision body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticBody {
    pub kind: SurfaceKind,
    pub bounds: Aabb,
}

impl StaticBody {
    pub fn new(kind: SurfaceKind, bounds: Aabb) -> Self {
        Self { kind, bounds }
    }
}

/// World dimensions and gravity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub default_gravity: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            default_gravity: DEFAULT_GRAVITY,
        }
    }
}

impl World {
    /// The world rectangle, used for bodies that collide with world bounds
    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }
}

/// All static collision bodies in the level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticGeometry {
    bodies: Vec<StaticBody>,
}

impl StaticGeometry {
    pub fn new(bodies: Vec<StaticBody>) -> Self {
        Self { bodies }
    }

    /// The standard level: walls just outside each side of the world, the
    /// ground along the bottom, and two ledges (one hanging off the left edge).
    pub fn standard(world: &World) -> Self {
        let ground_y = world.height - GROUND_HEIGHT;
        Self::new(vec![
            StaticBody::new(
                SurfaceKind::Wall,
                Aabb::from_xywh(-WALL_THICKNESS, 0.0, WALL_THICKNESS, world.height),
            ),
            StaticBody::new(
                SurfaceKind::Wall,
                Aabb::from_xywh(world.width, 0.0, WALL_THICKNESS, world.height),
            ),
            StaticBody::new(
                SurfaceKind::Ground,
                Aabb::from_xywh(0.0, ground_y, world.width, GROUND_HEIGHT),
            ),
            StaticBody::new(
                SurfaceKind::Ledge,
                Aabb::from_xywh(400.0, 400.0, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            ),
            StaticBody::new(
                SurfaceKind::Ledge,
                Aabb::from_xywh(-150.0, 250.0, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            ),
        ])
    }

    pub fn bodies(&self) -> &[StaticBody] {
        &self.bodies
    }

    /// Look up a body by index (None when out of range)
    pub fn get(&self, index: usize) -> Option<&StaticBody> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
