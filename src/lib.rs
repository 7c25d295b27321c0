//! Star Catcher - A single-screen platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring, game state)
//! - `settings`: Host-side runner configuration
//! - `demo`: Autopilot input for headless/demo runs

pub mod demo;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal frame timestep (hosts may pass a variable dt)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Default gravity for bodies that don't override it (pixels/s²)
    pub const DEFAULT_GRAVITY: f32 = 300.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_SPAWN_X: f32 = 32.0;
    pub const PLAYER_SPAWN_Y: f32 = WORLD_HEIGHT - 150.0;
    pub const PLAYER_GRAVITY: f32 = 300.0;
    pub const PLAYER_BOUNCE: f32 = 0.2;
    pub const PLAYER_MOVE_SPEED: f32 = 150.0;
    /// Instantaneous vertical velocity on jump (negative = up)
    pub const PLAYER_JUMP_VELOCITY: f32 = -350.0;

    /// Adversary ("baddie") defaults
    pub const ADVERSARY_COUNT: usize = 3;
    pub const ADVERSARY_SIZE: f32 = 30.0;
    pub const ADVERSARY_SPACING: f32 = 400.0;
    pub const ADVERSARY_GRAVITY: f32 = 300.0;
    pub const ADVERSARY_BOUNCE: f32 = 0.2;
    pub const ADVERSARY_SPEED: f32 = 200.0;
    /// Seconds between direction flips
    pub const ADVERSARY_FLIP_PERIOD: f32 = 2.0;

    /// Collectible ("star") defaults
    pub const COLLECTIBLE_COUNT: usize = 12;
    pub const COLLECTIBLE_WIDTH: f32 = 24.0;
    pub const COLLECTIBLE_HEIGHT: f32 = 22.0;
    pub const COLLECTIBLE_SPACING: f32 = 70.0;
    pub const COLLECTIBLE_GRAVITY: f32 = 600.0;
    /// Bounce is drawn from [BASE, BASE + JITTER)
    pub const COLLECTIBLE_BOUNCE_BASE: f32 = 0.7;
    pub const COLLECTIBLE_BOUNCE_JITTER: f32 = 0.2;

    /// Score per collected star
    pub const SCORE_PER_COLLECTIBLE: u64 = 10;

    /// Static geometry
    pub const PLATFORM_WIDTH: f32 = 400.0;
    pub const PLATFORM_HEIGHT: f32 = 32.0;
    pub const GROUND_HEIGHT: f32 = 64.0;
    pub const WALL_THICKNESS: f32 = 32.0;
}
