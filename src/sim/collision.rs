//! Collision detection and response for boxes against static geometry
//!
//! Motion is resolved one axis at a time: a body first moves horizontally and
//! is pushed out of anything it ran into, then moves vertically and is pushed
//! out again. The direction of travel on that axis decides which face of the
//! static box was hit.

use glam::Vec2;

use super::aabb::Aabb;

/// Overlaps thinner than this on the cross axis are treated as edge contact
/// (float noise from a previous resolution), not penetration.
pub const CONTACT_EPSILON: f32 = 0.01;

/// Axis of motion being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal of the face that was hit (pointing toward the mover)
    pub normal: Vec2,
    /// Penetration depth along the normal (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    /// The mover landed on top of the surface
    #[inline]
    pub fn is_floor(&self) -> bool {
        self.hit && self.normal.y < 0.0
    }
}

/// Check a moving box against a static box along one axis.
///
/// `delta` is how far the mover travelled along `axis` this step; its sign
/// picks the face. A mover that didn't travel along the axis can't hit
/// anything on it.
pub fn box_static_collision(mover: &Aabb, delta: f32, axis: Axis, solid: &Aabb) -> CollisionResult {
    if delta == 0.0 || !mover.intersects(solid) {
        return CollisionResult::miss();
    }

    let overlap = mover.overlap(solid);
    match axis {
        Axis::X => {
            if overlap.y <= CONTACT_EPSILON {
                return CollisionResult::miss();
            }
            if delta > 0.0 {
                CollisionResult {
                    hit: true,
                    normal: Vec2::NEG_X,
                    penetration: mover.right() - solid.left(),
                }
            } else {
                CollisionResult {
                    hit: true,
                    normal: Vec2::X,
                    penetration: solid.right() - mover.left(),
                }
            }
        }
        Axis::Y => {
            if overlap.x <= CONTACT_EPSILON {
                return CollisionResult::miss();
            }
            if delta > 0.0 {
                // Moving down (screen space): landed on the top face
                CollisionResult {
                    hit: true,
                    normal: Vec2::NEG_Y,
                    penetration: mover.bottom() - solid.top(),
                }
            } else {
                CollisionResult {
                    hit: true,
                    normal: Vec2::Y,
                    penetration: solid.bottom() - mover.top(),
                }
            }
        }
    }
}

/// Velocity after hitting a surface.
///
/// Landing on a floor reverses vertical speed scaled by `bounce_y`. Any other
/// face (walls, ceilings) stops motion along the normal.
pub fn respond_velocity(velocity: Vec2, result: &CollisionResult, bounce_y: f32) -> Vec2 {
    if !result.hit {
        return velocity;
    }
    if result.is_floor() {
        Vec2::new(velocity.x, -velocity.y * bounce_y)
    } else if result.normal.x != 0.0 {
        Vec2::new(0.0, velocity.y)
    } else {
        Vec2::new(velocity.x, 0.0)
    }
}

/// Non-blocking overlap test used for pickups and hazards
#[inline]
pub fn boxes_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}
