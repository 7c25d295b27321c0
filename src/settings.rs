//! Headless runner settings
//!
//! Host-side only. Gameplay constants live in `consts` and are not
//! configurable; these settings control how the runner drives the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_DT;

/// Runner configuration, loaded from JSON. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the first run (later runs add the run index)
    pub seed: u64,
    /// Seconds per frame passed to `tick`
    pub frame_dt: f32,
    /// Frames per run before the runner gives up
    pub max_ticks: u64,
    /// Drive the player with the demo autopilot instead of idling
    pub autopilot: bool,
    /// Rebuild the game after a game over
    pub restart_on_game_over: bool,
    /// Total runs when restarting
    pub max_runs: u32,
    /// Log a snapshot every N frames (0 = never)
    pub snapshot_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 12345,
            frame_dt: FRAME_DT,
            max_ticks: 60 * 60,
            autopilot: true,
            restart_on_game_over: false,
            max_runs: 1,
            snapshot_interval: 0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values the runner can't use
    fn sanitized(mut self) -> Self {
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            log::warn!("frame_dt {} is not usable, using {}", self.frame_dt, FRAME_DT);
            self.frame_dt = FRAME_DT;
        }
        self.max_runs = self.max_runs.max(1);
        self
    }
}
