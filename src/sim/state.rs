//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here, and everything here
//! is owned by the caller of `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::director::EnemyDirector;
use super::input::{Facing, Intent};
use super::world::{StaticGeometry, World};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Player touched a baddie. Terminal until the host rebuilds the state.
    GameOver,
}

/// Per-tick surface contacts, written by the physics pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contacts {
    /// Landed on a surface from above this tick
    pub touching_down: bool,
    /// Resolved against a ground or ledge body this tick
    pub platform_contact: bool,
}

/// A moving box with gravity and vertical bounce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Fraction of downward speed kept (reversed) on landing
    pub bounce_y: f32,
    /// Contacts from the most recent physics pass
    #[serde(default)]
    pub contacts: Contacts,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, gravity: f32, bounce_y: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            gravity,
            bounce_y,
            contacts: Contacts::default(),
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub facing: Facing,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            body: Body::new(
                Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
                Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
                PLAYER_GRAVITY,
                PLAYER_BOUNCE,
            ),
            facing: Facing::Idle,
        }
    }
}

impl Player {
    /// Apply movement intent. A jump overrides whatever vertical velocity the
    /// physics pass left behind.
    pub fn apply_intent(&mut self, intent: &Intent) {
        self.body.vel.x = intent.velocity_x;
        self.facing = intent.facing;
        if intent.jump {
            self.body.vel.y = PLAYER_JUMP_VELOCITY;
        }
    }
}

/// A patrolling baddie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adversary {
    pub body: Body,
}

impl Adversary {
    /// Spawn the `index`-th baddie along the top of the world
    pub fn spawn(index: usize, world: &World) -> Self {
        let x = (index as f32 * ADVERSARY_SPACING).min(world.width - ADVERSARY_SIZE);
        let mut body = Body::new(
            Vec2::new(x, 0.0),
            Vec2::splat(ADVERSARY_SIZE),
            ADVERSARY_GRAVITY,
            ADVERSARY_BOUNCE,
        );
        body.vel.x = ADVERSARY_SPEED;
        Self { body }
    }
}

/// A falling star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub body: Body,
    /// False once collected. Dead stars are skipped by physics and overlaps.
    pub alive: bool,
}

impl Collectible {
    pub fn spawn(index: usize, bounce_y: f32) -> Self {
        Self {
            body: Body::new(
                Vec2::new(index as f32 * COLLECTIBLE_SPACING, 0.0),
                Vec2::new(COLLECTIBLE_WIDTH, COLLECTIBLE_HEIGHT),
                COLLECTIBLE_GRAVITY,
                bounce_y,
            ),
            alive: true,
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Number of values drawn so far
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Events produced by a single tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player jumped off a platform
    Jumped,
    /// Baddies reversed direction (new sign)
    DirectionFlipped { sign: i32 },
    /// Star at this slot was collected
    Collected { index: usize },
    /// Player touched a baddie; carries the final score
    GameOver { score: u64 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    pub world: World,
    pub geometry: StaticGeometry,
    pub player: Player,
    /// Fixed slots, never reordered
    pub adversaries: Vec<Adversary>,
    /// Fixed slots; collected stars stay in place with `alive = false`
    pub collectibles: Vec<Collectible>,
    pub director: EnemyDirector,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let world = World::default();
        let mut rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();

        let collectibles = (0..COLLECTIBLE_COUNT)
            .map(|i| {
                let bounce = rng.random_range(
                    COLLECTIBLE_BOUNCE_BASE..COLLECTIBLE_BOUNCE_BASE + COLLECTIBLE_BOUNCE_JITTER,
                );
                rng_state.stream += 1;
                Collectible::spawn(i, bounce)
            })
            .collect();

        Self {
            seed,
            rng_state,
            geometry: StaticGeometry::standard(&world),
            player: Player::default(),
            adversaries: (0..ADVERSARY_COUNT)
                .map(|i| Adversary::spawn(i, &world))
                .collect(),
            collectibles,
            director: EnemyDirector::default(),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            world,
        }
    }

    /// True once the run has ended
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Number of stars still in play
    pub fn live_collectibles(&self) -> usize {
        self.collectibles.iter().filter(|c| c.alive).count()
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            player_pos: self.player.body.pos,
            player_vel: self.player.body.vel,
            player_facing: self.player.facing,
            adversaries: self.adversaries.iter().map(|a| a.body.pos).collect(),
            collectibles: self
                .collectibles
                .iter()
                .map(|c| CollectibleView {
                    pos: c.body.pos,
                    alive: c.alive,
                })
                .collect(),
            score: self.score,
            phase: self.phase,
        }
    }
}

/// A star as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectibleView {
    pub pos: Vec2,
    pub alive: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub player_pos: Vec2,
    pub player_vel: Vec2,
    pub player_facing: Facing,
    pub adversaries: Vec<Vec2>,
    pub collectibles: Vec<CollectibleView>,
    pub score: u64,
    pub phase: GamePhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.adversaries.len(), ADVERSARY_COUNT);
        assert_eq!(state.collectibles.len(), COLLECTIBLE_COUNT);
        assert_eq!(state.live_collectibles(), COLLECTIBLE_COUNT);
        assert_eq!(state.player.body.pos, Vec2::new(32.0, 450.0));
        assert_eq!(state.player.body.vel, Vec2::ZERO);
        assert_eq!(state.rng_state.stream, COLLECTIBLE_COUNT as u64);
    }

    #[test]
    fn test_collectible_layout() {
        let state = GameState::new(7);
        for (i, star) in state.collectibles.iter().enumerate() {
            assert_eq!(star.body.pos, Vec2::new(i as f32 * 70.0, 0.0));
            assert_eq!(star.body.gravity, 600.0);
            assert!(star.body.bounce_y >= 0.7 && star.body.bounce_y < 0.9);
        }
    }

    #[test]
    fn test_adversaries_spawn_inside_world() {
        let state = GameState::new(7);
        let xs: Vec<f32> = state.adversaries.iter().map(|a| a.body.pos.x).collect();
        assert_eq!(xs, vec![0.0, 400.0, 770.0]);
        for a in &state.adversaries {
            assert_eq!(a.body.vel.x, ADVERSARY_SPEED);
            assert_eq!(a.body.gravity, 300.0);
            assert_eq!(a.body.bounce_y, 0.2);
        }
    }

    #[test]
    fn test_same_seed_same_bounces() {
        let a = GameState::new(99999);
        let b = GameState::new(99999);
        let c = GameState::new(12345);
        let bounces = |s: &GameState| -> Vec<f32> {
            s.collectibles.iter().map(|c| c.body.bounce_y).collect()
        };
        assert_eq!(bounces(&a), bounces(&b));
        assert_ne!(bounces(&a), bounces(&c));
    }

    #[test]
    fn test_apply_intent_jump_overrides_vertical() {
        let mut player = Player::default();
        player.body.vel.y = 12.0;
        player.apply_intent(&Intent {
            velocity_x: -PLAYER_MOVE_SPEED,
            facing: Facing::Left,
            jump: true,
        });
        assert_eq!(player.body.vel, Vec2::new(-150.0, -350.0));
        assert_eq!(player.facing, Facing::Left);

        player.apply_intent(&Intent {
            velocity_x: 0.0,
            facing: Facing::Idle,
            jump: false,
        });
        assert_eq!(player.body.vel, Vec2::new(0.0, -350.0));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(1);
        state.collectibles[3].alive = false;
        state.score = 20;
        let snap = state.snapshot();
        assert_eq!(snap.score, 20);
        assert_eq!(snap.adversaries.len(), 3);
        assert!(!snap.collectibles[3].alive);
        assert!(snap.collectibles[4].alive);
        assert_eq!(snap.phase, GamePhase::Playing);
    }
}
