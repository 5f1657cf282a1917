//! Racer track and run state

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::scoreboard::LowWater;
use crate::sim::{Aabb, Particles};

/// Track bounds; the drivable area is everything inside minus the island.
pub const TRACK: Vec2 = Vec2::new(800.0, 600.0);
/// Car collision half extents (heading is ignored for collision).
pub const CAR_HALF: Vec2 = Vec2::new(6.0, 6.0);
/// Grid position on the start straight.
pub const CAR_START: Vec2 = Vec2::new(300.0, 500.0);

/// Thrust per tick while accelerating.
pub const ACCEL: f32 = 0.08;
/// Brake per tick.
pub const BRAKE: f32 = 0.18;
/// Top speed, units per tick.
pub const MAX_SPEED: f32 = 4.5;
/// Multiplicative coast-down per tick with no input.
pub const FRICTION: f32 = 0.975;
/// Below this the car is parked at exactly zero.
pub const SPEED_EPSILON: f32 = 0.03;
/// Steering rate at top speed, radians per tick. Authority scales with the
/// current speed fraction, so a parked car cannot turn.
pub const STEER_RATE: f32 = 0.045;

/// Laps to finish the race.
pub const LAPS_TOTAL: u32 = 3;

const WALL_THICKNESS: f32 = 20.0;

/// Wall material tags. Rendering only; physics treats every wall the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Barrier,
    Island,
}

/// A static track wall.
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub aabb: Aabb,
    pub surface: Surface,
}

/// The player's car: position plus heading plus scalar speed.
#[derive(Debug, Clone, Copy)]
pub struct Car {
    pub pos: Vec2,
    /// Radians, 0 = +x, y grows downward.
    pub heading: f32,
    /// Units per tick along the heading.
    pub speed: f32,
}

impl Car {
    fn on_grid() -> Self {
        Self {
            pos: CAR_START,
            heading: 0.0,
            speed: 0.0,
        }
    }
}

/// Complete racer run state.
#[derive(Debug, Clone)]
pub struct RacerState {
    pub car: Car,
    pub walls: Vec<Wall>,
    /// Start/finish strip across the bottom straight.
    pub finish: Aabb,
    /// Far-side strip that must be crossed before the finish counts.
    pub checkpoint: Aabb,
    /// Completed laps.
    pub lap: u32,
    /// Current lap time, accrued on the bookkeeping tick.
    pub lap_time_ms: u64,
    pub last_lap_ms: Option<u64>,
    pub best_lap: LowWater,
    pub checkpoint_cleared: bool,
    pub particles: Particles,
    pub(crate) solids: Vec<Aabb>,
    pub(crate) rng: Pcg32,
    pub(crate) base_seed: u64,
}

impl RacerState {
    pub fn new(seed: u64) -> Self {
        let walls = circuit_walls();
        let solids = walls.iter().map(|wall| wall.aabb).collect();
        Self {
            car: Car::on_grid(),
            walls,
            finish: Aabb::new(Vec2::new(400.0, 500.0), Vec2::new(4.0, 100.0)),
            checkpoint: Aabb::new(Vec2::new(400.0, 100.0), Vec2::new(4.0, 100.0)),
            lap: 0,
            lap_time_ms: 0,
            last_lap_ms: None,
            best_lap: LowWater::new(),
            checkpoint_cleared: false,
            particles: Particles::new(),
            solids,
            rng: Pcg32::seed_from_u64(seed),
            base_seed: seed,
        }
    }
}

/// Outer fence around the track plus the inner island. Defined once per
/// scene, never mutated.
fn circuit_walls() -> Vec<Wall> {
    let t = WALL_THICKNESS / 2.0;
    vec![
        // Fence, just outside the 0..800 x 0..600 field.
        Wall {
            aabb: Aabb::new(Vec2::new(TRACK.x / 2.0, -t), Vec2::new(TRACK.x / 2.0 + t, t)),
            surface: Surface::Barrier,
        },
        Wall {
            aabb: Aabb::new(
                Vec2::new(TRACK.x / 2.0, TRACK.y + t),
                Vec2::new(TRACK.x / 2.0 + t, t),
            ),
            surface: Surface::Barrier,
        },
        Wall {
            aabb: Aabb::new(Vec2::new(-t, TRACK.y / 2.0), Vec2::new(t, TRACK.y / 2.0 + t)),
            surface: Surface::Barrier,
        },
        Wall {
            aabb: Aabb::new(
                Vec2::new(TRACK.x + t, TRACK.y / 2.0),
                Vec2::new(t, TRACK.y / 2.0 + t),
            ),
            surface: Surface::Barrier,
        },
        // Island in the middle; the lane around it is 200 units wide.
        Wall {
            aabb: Aabb::new(Vec2::new(400.0, 300.0), Vec2::new(200.0, 100.0)),
            surface: Surface::Island,
        },
    ]
}
