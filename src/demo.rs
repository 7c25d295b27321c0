//! Demo autopilot
//!
//! Produces input for the headless runner: chase the nearest star, jump when
//! it's above, and back away from a baddie on the same level. Reads the state,
//! never mutates it.

use crate::sim::{GameState, TickInput};

/// Horizontal distance inside which a same-level baddie counts as a threat
const DANGER_RADIUS: f32 = 90.0;
/// Horizontal slack before the autopilot bothers moving toward a target
const ARRIVE_SLACK: f32 = 4.0;

/// Choose this frame's input for the player
pub fn autopilot_input(state: &GameState) -> TickInput {
    if state.is_over() {
        return TickInput::default();
    }

    let player = state.player.body.aabb();
    let center = player.center();

    // Same-level baddie close by: run the other way and try to hop
    let threat = state.adversaries.iter().map(|a| a.body.aabb()).find(|a| {
        let same_level = a.bottom() > player.top() && a.top() < player.bottom();
        same_level && (a.center().x - center.x).abs() < DANGER_RADIUS
    });
    if let Some(threat) = threat {
        let threat_on_right = threat.center().x >= center.x;
        return TickInput {
            left: threat_on_right,
            right: !threat_on_right,
            up: true,
        };
    }

    let target = state
        .collectibles
        .iter()
        .filter(|c| c.alive)
        .map(|c| c.body.aabb().center())
        .min_by(|a, b| {
            a.distance_squared(center)
                .partial_cmp(&b.distance_squared(center))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = target else {
        return TickInput::default();
    };

    let dx = target.x - center.x;
    TickInput {
        left: dx < -ARRIVE_SLACK,
        right: dx > ARRIVE_SLACK,
        up: target.y < player.top(),
    }
}
