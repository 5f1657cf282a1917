//! Flyer entities and run state

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::scoreboard::HighWater;
use crate::sim::{ActionLocks, Particles};

/// World extent on both axes; positions live in 0..=100.
pub const WORLD: f32 = 100.0;
/// Player spawn point.
pub const PLAYER_START: Vec2 = Vec2::new(50.0, 80.0);

/// Acceleration per tick while a direction is held.
pub const ACCEL: f32 = 0.35;
/// Speed cap, units per tick.
pub const MAX_SPEED: f32 = 2.0;
/// Multiplicative speed decay per tick with no input.
pub const FRICTION: f32 = 0.82;
/// Below this magnitude the velocity snaps to exactly zero.
pub const SPEED_EPSILON: f32 = 0.05;

/// Fatal hit distance between player and hazard centers.
pub const HIT_RADIUS: f32 = 5.0;
/// Hazard spawn period at pace 1.0, milliseconds.
pub const SPAWN_PERIOD_MS: f64 = 2000.0;
/// Hazards enter this far above the field.
pub const SPAWN_Y: f32 = -5.0;
/// Hazards past this line are gone.
pub const DESPAWN_Y: f32 = 110.0;

/// A falling hazard.
#[derive(Debug, Clone, Copy)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    /// Drift per tick at pace 1.0.
    pub vel: Vec2,
}

/// Complete flyer run state.
#[derive(Debug, Clone)]
pub struct FlyerState {
    pub player: Vec2,
    pub vel: Vec2,
    pub hazards: Vec<Hazard>,
    pub score: u64,
    /// Crash site shown on the game-over screen until its lock expires.
    pub explosion: Option<Vec2>,
    pub particles: Particles,
    pub locks: ActionLocks,
    pub best_score: HighWater,
    /// Pace multiplier from the settings screen.
    pub speed: f32,
    pub(crate) rng: Pcg32,
    pub(crate) base_seed: u64,
    pub(crate) epoch: u64,
    pub(crate) spawn_clock_ms: f64,
    pub(crate) next_id: u32,
}

impl FlyerState {
    /// Fresh run state. `speed` is the settings pace multiplier.
    pub fn new(seed: u64, speed: f32) -> Self {
        Self {
            player: PLAYER_START,
            vel: Vec2::ZERO,
            hazards: Vec::new(),
            score: 0,
            explosion: None,
            particles: Particles::new(),
            locks: ActionLocks::new(),
            best_score: HighWater::new(),
            speed,
            rng: Pcg32::seed_from_u64(seed),
            base_seed: seed,
            epoch: 0,
            spawn_clock_ms: 0.0,
            next_id: 1,
        }
    }

    pub(crate) fn next_hazard_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
