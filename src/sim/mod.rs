//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed step order within a tick
//! - Stable iteration order (entity slots never move)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod director;
pub mod input;
pub mod physics;
pub mod rules;
pub mod state;
pub mod tick;
pub mod world;

pub use aabb::Aabb;
pub use collision::{CollisionResult, box_static_collision};
pub use director::{DirectionState, EnemyDirector};
pub use input::{Facing, Intent, TickInput, compute_intent};
pub use physics::{OverlapReport, detect_overlaps, step_body};
pub use rules::{Terminal, check_game_over, collect_stars};
pub use state::{
    Adversary, Body, Collectible, CollectibleView, Contacts, FrameSnapshot, GameEvent, GamePhase,
    GameState, Player,
};
pub use tick::{TickReport, tick};
pub use world::{StaticBody, StaticGeometry, SurfaceKind, World};
