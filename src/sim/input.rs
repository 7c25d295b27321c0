//! Player input and movement intent
//!
//! Turns the three raw keyboard signals into a horizontal velocity, a facing
//! for the renderer, and a jump request gated on this tick's contacts.

use serde::{Deserialize, Serialize};

use super::state::Contacts;
use crate::consts::*;

/// Input signals for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    #[default]
    Idle,
}

/// What the player wants to do this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intent {
    pub velocity_x: f32,
    pub facing: Facing,
    pub jump: bool,
}

/// Compute player intent from input and the contacts resolved this tick.
///
/// Left is checked first, so holding both directions moves left. A jump needs
/// `up`, a landing this tick, and a platform (not a wall) in that landing.
pub fn compute_intent(input: &TickInput, contacts: &Contacts) -> Intent {
    let (velocity_x, facing) = if input.left {
        (-PLAYER_MOVE_SPEED, Facing::Left)
    } else if input.right {
        (PLAYER_MOVE_SPEED, Facing::Right)
    } else {
        (0.0, Facing::Idle)
    };

    Intent {
        velocity_x,
        facing,
        jump: input.up && contacts.touching_down && contacts.platform_contact,
    }
}
