//! Baddie patrol timer
//!
//! A single direction shared by every baddie, reversed on a fixed period.
//! The timer is a logical accumulator advanced by the tick's `dt`.

use serde::{Deserialize, Serialize};

use crate::consts::ADVERSARY_FLIP_PERIOD;

/// Horizontal patrol direction shared by all baddies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DirectionState {
    #[default]
    Positive,
    Negative,
}

impl DirectionState {
    /// +1 or -1
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            DirectionState::Positive => 1,
            DirectionState::Negative => -1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            DirectionState::Positive => DirectionState::Negative,
            DirectionState::Negative => DirectionState::Positive,
        }
    }
}

/// Flips the shared direction every `period` seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDirector {
    pub direction: DirectionState,
    /// Seconds accumulated since the last flip
    pub accumulator: f32,
    pub period: f32,
    /// Set by the most recent `tick` when it flipped
    #[serde(skip)]
    pub flipped_last_tick: bool,
}

impl Default for EnemyDirector {
    fn default() -> Self {
        Self {
            direction: DirectionState::Positive,
            accumulator: 0.0,
            period: ADVERSARY_FLIP_PERIOD,
            flipped_last_tick: false,
        }
    }
}

impl EnemyDirector {
    /// Advance the timer and return the current sign.
    ///
    /// Crossing the period flips once and resets the accumulator to zero;
    /// any remainder is dropped, so a single huge `dt` still flips only once.
    pub fn tick(&mut self, dt: f32) -> i32 {
        self.accumulator += dt;
        self.flipped_last_tick = false;
        if self.accumulator >= self.period {
            self.accumulator = 0.0;
            self.direction = self.direction.flipped();
            self.flipped_last_tick = true;
        }
        self.direction.sign()
    }

    #[inline]
    pub fn sign(&self) -> i32 {
        self.direction.sign()
    }
}
