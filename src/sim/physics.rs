//! Gravity, motion, and the overlap pass
//!
//! One integration + resolution pass per call, no substepping. Gravity is
//! integrated into velocity before the body moves, and the body is resolved
//! against static geometry right after it moves.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::collision::{Axis, box_static_collision, boxes_overlap, respond_velocity};
use super::state::{Adversary, Body, Collectible, Contacts, Player};
use super::world::StaticGeometry;

/// Overlaps found this tick (indices into the entity slots). Not persisted:
/// an overlap that lasts shows up again every tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapReport {
    /// Player × live collectible
    pub collectibles: Vec<usize>,
    /// Player × adversary
    pub adversaries: Vec<usize>,
}

impl OverlapReport {
    pub fn is_empty(&self) -> bool {
        self.collectibles.is_empty() && self.adversaries.is_empty()
    }
}

/// `velocity.y += gravity * dt`
#[inline]
pub fn integrate_gravity(body: &mut Body, dt: f32) {
    body.vel.y += body.gravity * dt;
}

/// Integrate gravity, move, and resolve against every static body.
///
/// Records and returns this tick's contacts.
pub fn step_body(body: &mut Body, geometry: &StaticGeometry, dt: f32) -> Contacts {
    integrate_gravity(body, dt);

    let mut contacts = Contacts::default();
    let delta = body.vel * dt;

    body.pos.x += delta.x;
    resolve_axis(body, geometry, Axis::X, delta.x, &mut contacts);

    body.pos.y += delta.y;
    resolve_axis(body, geometry, Axis::Y, delta.y, &mut contacts);

    body.contacts = contacts;
    contacts
}

fn resolve_axis(
    body: &mut Body,
    geometry: &StaticGeometry,
    axis: Axis,
    delta: f32,
    contacts: &mut Contacts,
) {
    for solid in geometry.bodies() {
        let result = box_static_collision(&body.aabb(), delta, axis, &solid.bounds);
        if !result.hit {
            continue;
        }

        body.pos += result.normal * result.penetration;
        body.vel = respond_velocity(body.vel, &result, body.bounce_y);

        if result.is_floor() {
            contacts.touching_down = true;
        }
        if solid.kind.is_platform() {
            contacts.platform_contact = true;
        }
    }
}

/// Keep a body inside `bounds`. Hitting the bottom bounces like a floor,
/// other edges stop motion. Does not count as a platform contact.
pub fn clamp_to_bounds(body: &mut Body, bounds: &Aabb) {
    let max = bounds.max() - body.size;

    if body.pos.x < bounds.left() {
        body.pos.x = bounds.left();
        body.vel.x = 0.0;
    } else if body.pos.x > max.x {
        body.pos.x = max.x;
        body.vel.x = 0.0;
    }

    if body.pos.y < bounds.top() {
        body.pos.y = bounds.top();
        body.vel.y = 0.0;
    } else if body.pos.y > max.y {
        body.pos.y = max.y;
        if body.vel.y > 0.0 {
            body.vel.y = -body.vel.y * body.bounce_y;
        }
    }
}

/// Find the player's overlaps with live stars and with baddies
pub fn detect_overlaps(
    player: &Player,
    adversaries: &[Adversary],
    collectibles: &[Collectible],
) -> OverlapReport {
    let player_box = player.body.aabb();

    OverlapReport {
        collectibles: collectibles
            .iter()
            .enumerate()
            .filter(|(_, c)| c.alive && boxes_overlap(&player_box, &c.body.aabb()))
            .map(|(i, _)| i)
            .collect(),
        adversaries: adversaries
            .iter()
            .enumerate()
            .filter(|(_, a)| boxes_overlap(&player_box, &a.body.aabb()))
            .map(|(i, _)| i)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::world::{StaticBody, SurfaceKind};
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn floor_at(y: f32, kind: SurfaceKind) -> StaticGeometry {
        StaticGeometry::new(vec![StaticBody::new(
            kind,
            Aabb::from_xywh(0.0, y, 800.0, 64.0),
        )])
    }

    #[test]
    fn test_free_fall() {
        let empty = StaticGeometry::new(Vec::new());
        let mut body = Body::new(Vec2::new(32.0, 450.0), Vec2::new(32.0, 48.0), 300.0, 0.2);

        let contacts = step_body(&mut body, &empty, DT);
        assert!((body.vel.y - 5.0).abs() < 1e-4);
        assert!((body.pos.y - (450.0 + 5.0 * DT)).abs() < 1e-4);
        assert_eq!(contacts, Contacts::default());
    }

    #[test]
    fn test_bounce_damping() {
        // No gravity so the incoming speed is exactly v
        let geometry = floor_at(100.0, SurfaceKind::Ground);
        let mut body = Body::new(Vec2::new(10.0, 70.0), Vec2::new(24.0, 22.0), 0.0, 0.8);
        body.vel.y = 600.0;

        let contacts = step_body(&mut body, &geometry, DT);
        assert!(contacts.touching_down);
        assert!(contacts.platform_contact);
        assert!((body.vel.y - (-600.0 * 0.8)).abs() < 1e-3);
        assert!((body.pos.y - (100.0 - 22.0)).abs() < 1e-4);
    }

    #[test]
    fn test_resting_body_touches_down_every_tick() {
        let geometry = floor_at(536.0, SurfaceKind::Ground);
        let mut body = Body::new(Vec2::new(100.0, 488.0), Vec2::new(32.0, 48.0), 300.0, 0.2);

        for _ in 0..120 {
            let contacts = step_body(&mut body, &geometry, DT);
            assert!(contacts.touching_down);
            assert!(contacts.platform_contact);
            assert!((body.pos.y - 488.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_wall_stops_horizontal_motion() {
        let geometry = StaticGeometry::new(vec![StaticBody::new(
            SurfaceKind::Wall,
            Aabb::from_xywh(800.0, 0.0, 32.0, 600.0),
        )]);
        let mut body = Body::new(Vec2::new(768.0, 100.0), Vec2::splat(30.0), 0.0, 0.2);
        body.vel.x = 200.0;

        let contacts = step_body(&mut body, &geometry, DT);
        assert_eq!(body.pos.x, 770.0);
        assert_eq!(body.vel.x, 0.0);
        assert!(!contacts.touching_down);
        assert!(!contacts.platform_contact);
    }

    #[test]
    fn test_landing_on_wall_is_not_platform_contact() {
        let geometry = floor_at(300.0, SurfaceKind::Wall);
        let mut body = Body::new(Vec2::new(100.0, 250.0), Vec2::new(32.0, 48.0), 300.0, 0.2);
        body.vel.y = 200.0;

        let contacts = step_body(&mut body, &geometry, DT);
        assert!(contacts.touching_down);
        assert!(!contacts.platform_contact);
    }

    #[test]
    fn test_ceiling_zeroes_upward_velocity() {
        let geometry = floor_at(0.0, SurfaceKind::Ledge);
        let mut body = Body::new(Vec2::new(100.0, 66.0), Vec2::new(32.0, 48.0), 0.0, 0.2);
        body.vel.y = -350.0;

        let contacts = step_body(&mut body, &geometry, DT);
        assert_eq!(body.vel.y, 0.0);
        assert_eq!(body.pos.y, 64.0);
        assert!(!contacts.touching_down);
        assert!(contacts.platform_contact);
    }

    #[test]
    fn test_stars_settle_on_level() {
        let world = crate::sim::World::default();
        let geometry = StaticGeometry::standard(&world);

        for i in 0..12 {
            // Bounciest possible star
            let mut star = Collectible::spawn(i, 0.89);
            for _ in 0..60 * 60 {
                step_body(&mut star.body, &geometry, DT);
            }
            assert!(star.body.pos.y < world.height, "star {} fell through", i);
            assert!(star.body.vel.y.abs() < 20.0, "star {} still bouncing: {:?}", i, star.body);
            assert!(star.body.contacts.touching_down);
        }
    }

    #[test]
    fn test_clamp_to_bounds() {
        let bounds = Aabb::from_xywh(0.0, 0.0, 800.0, 600.0);

        let mut body = Body::new(Vec2::new(-5.0, -10.0), Vec2::new(32.0, 48.0), 300.0, 0.2);
        body.vel = Vec2::new(-150.0, -100.0);
        clamp_to_bounds(&mut body, &bounds);
        assert_eq!(body.pos, Vec2::ZERO);
        assert_eq!(body.vel, Vec2::ZERO);
        assert_eq!(body.contacts, Contacts::default());

        let mut body = Body::new(Vec2::new(790.0, 560.0), Vec2::new(32.0, 48.0), 300.0, 0.5);
        body.vel = Vec2::new(150.0, 100.0);
        clamp_to_bounds(&mut body, &bounds);
        assert_eq!(body.pos, Vec2::new(768.0, 552.0));
        assert_eq!(body.vel, Vec2::new(0.0, -50.0));
    }

    #[test]
    fn test_detect_overlaps_skips_dead_stars() {
        let player = Player::default();
        let mut stars = vec![Collectible::spawn(0, 0.8), Collectible::spawn(1, 0.8)];
        stars[0].body.pos = player.body.pos;
        stars[1].body.pos = player.body.pos;
        stars[1].alive = false;

        let mut baddie = Adversary::spawn(0, &crate::sim::World::default());
        baddie.body.pos = player.body.pos + Vec2::new(10.0, 10.0);
        let far = Adversary::spawn(2, &crate::sim::World::default());

        let report = detect_overlaps(&player, &[baddie, far], &stars);
        assert_eq!(report.collectibles, vec![0]);
        assert_eq!(report.adversaries, vec![0]);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_overlap_has_no_side_effects() {
        let player = Player::default();
        let mut star = Collectible::spawn(0, 0.75);
        star.body.pos = player.body.pos;
        let before = (player.clone(), star.clone());

        let stars = [star];
        let _ = detect_overlaps(&player, &[], &stars);
        assert_eq!(before.0, player);
        assert_eq!(before.1, stars[0]);
    }
}
