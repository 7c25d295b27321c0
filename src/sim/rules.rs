//! Scoring and game-over rules
//!
//! Both consume the same overlap snapshot. Scoring runs first, so a tick that
//! grabs a star and touches a baddie still counts the star.

use super::state::{Collectible, GamePhase};
use crate::consts::SCORE_PER_COLLECTIBLE;

/// Marker returned when the run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal;

/// Collect every live star the player overlaps.
///
/// Returns the slots that were collected this call. Dead stars and
/// out-of-range indices are ignored, so each star scores exactly once.
pub fn collect_stars(
    overlaps: &[usize],
    collectibles: &mut [Collectible],
    score: &mut u64,
) -> Vec<usize> {
    let mut collected = Vec::new();
    for &index in overlaps {
        let Some(star) = collectibles.get_mut(index) else {
            continue;
        };
        if !star.alive {
            continue;
        }
        star.alive = false;
        *score += SCORE_PER_COLLECTIBLE;
        collected.push(index);
    }
    collected
}

/// End the run if the player overlaps any baddie.
///
/// No lives, no grace period. Returns `Some(Terminal)` only on the tick that
/// makes the transition.
pub fn check_game_over(overlaps: &[usize], phase: &mut GamePhase) -> Option<Terminal> {
    if overlaps.is_empty() || *phase == GamePhase::GameOver {
        return None;
    }
    *phase = GamePhase::GameOver;
    Some(Terminal)
}
