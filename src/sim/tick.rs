//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by one variable `dt`. Step
//! order is fixed; the jump gate depends on the player having been resolved
//! against the level before input is read.

use serde::{Deserialize, Serialize};

use super::input::{TickInput, compute_intent};
use super::physics::{OverlapReport, clamp_to_bounds, detect_overlaps, step_body};
use super::rules::{check_game_over, collect_stars};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    pub overlaps: OverlapReport,
}

impl TickReport {
    /// True if this tick ended the run
    pub fn ended_run(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
    }
}

/// Advance the game state by `dt` seconds.
///
/// A no-op once the game is over: the state stays exactly as it was on the
/// tick that ended the run.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickReport {
    let mut report = TickReport::default();

    if state.phase == GamePhase::GameOver {
        return report;
    }

    state.time_ticks += 1;

    // Stars and baddies fall and land on the level
    for star in state.collectibles.iter_mut().filter(|c| c.alive) {
        step_body(&mut star.body, &state.geometry, dt);
    }
    for baddie in &mut state.adversaries {
        step_body(&mut baddie.body, &state.geometry, dt);
    }

    // Player physics, then input (the jump gate reads this tick's contacts)
    let contacts = step_body(&mut state.player.body, &state.geometry, dt);
    clamp_to_bounds(&mut state.player.body, &state.world.bounds());

    let intent = compute_intent(input, &contacts);
    state.player.apply_intent(&intent);
    if intent.jump {
        log::debug!("Jump at tick {}", state.time_ticks);
        report.events.push(GameEvent::Jumped);
    }

    // Shared patrol direction
    let sign = state.director.tick(dt);
    if state.director.flipped_last_tick {
        log::debug!("Baddies reversed (sign {})", sign);
        report.events.push(GameEvent::DirectionFlipped { sign });
    }
    for baddie in &mut state.adversaries {
        baddie.body.vel.x = sign as f32 * ADVERSARY_SPEED;
    }

    // Overlaps: score first, then game over, from the same snapshot
    let overlaps = detect_overlaps(&state.player, &state.adversaries, &state.collectibles);

    for index in collect_stars(&overlaps.collectibles, &mut state.collectibles, &mut state.score) {
        log::debug!("Star {} collected, score {}", index, state.score);
        report.events.push(GameEvent::Collected { index });
    }

    if check_game_over(&overlaps.adversaries, &mut state.phase).is_some() {
        log::info!("Game over at tick {} with score {}", state.time_ticks, state.score);
        report.events.push(GameEvent::GameOver { score: state.score });
    }

    report.overlaps = overlaps;
    report
}
