//! Platformer scene and run state

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::scoreboard::HighWater;
use crate::sim::{Aabb, ActionLocks, Particles, Pool};

/// Scene extent.
pub const WORLD: Vec2 = Vec2::new(2000.0, 600.0);
/// Window the camera shows of the scene.
pub const VIEW: Vec2 = Vec2::new(800.0, 450.0);

/// Hero collision half extents.
pub const HERO_HALF: Vec2 = Vec2::new(10.0, 16.0);
/// Hero spawn point, standing on the first ground strip.
pub const HERO_START: Vec2 = Vec2::new(80.0, 544.0);

/// Gravity per tick while airborne.
pub const GRAVITY: f32 = 0.5;
/// Vertical impulse on a grounded jump (negative is up).
pub const JUMP_IMPULSE: f32 = -11.0;
/// Horizontal acceleration per tick while a direction is held.
pub const MOVE_ACCEL: f32 = 0.5;
/// Horizontal speed cap, units per tick.
pub const MAX_RUN_SPEED: f32 = 3.5;
/// Multiplicative horizontal decay per tick with no input.
pub const FRICTION: f32 = 0.8;
/// Below this the horizontal velocity snaps to exactly zero.
pub const SPEED_EPSILON: f32 = 0.05;

/// Falling past this line costs health and respawns the hero.
pub const KILL_PLANE_Y: f32 = 700.0;
pub const FALL_DAMAGE: f32 = 20.0;

/// Enemy contact: damage, hit distance, knockback and mercy window.
pub const CONTACT_DAMAGE: f32 = 10.0;
pub const CONTACT_RANGE: f32 = 22.0;
pub const KNOCKBACK: Vec2 = Vec2::new(5.0, -5.0);
pub const INVULN_TICKS: u32 = 45;

/// Melee swing reach and damage, in the facing direction only.
pub const ATTACK_RANGE: f32 = 42.0;
pub const ATTACK_DAMAGE: f32 = 12.0;

/// Cast nova radius and damage (mana cost lives with the action kind).
pub const CAST_RADIUS: f32 = 90.0;
pub const CAST_DAMAGE: f32 = 20.0;

/// Mana restored per tick, up to the maximum.
pub const MANA_REGEN: f32 = 0.08;

pub const HERO_HEALTH: f32 = 100.0;
pub const HERO_MANA: f32 = 50.0;
pub const ENEMY_HEALTH: f32 = 30.0;
pub const ENEMY_SPEED: f32 = 1.0;
pub const EXP_PER_KILL: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Platform material tag. Rendering only; physics treats every platform the
/// same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Grass,
    Stone,
    Wood,
}

#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub aabb: Aabb,
    pub surface: SurfaceKind,
}

/// Display-only gear labels for the inventory screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equipment {
    pub weapon: &'static str,
    pub charm: &'static str,
}

impl Equipment {
    pub fn for_level(level: u32) -> Self {
        match level {
            1 => Self {
                weapon: "Rusty Sword",
                charm: "None",
            },
            2..=3 => Self {
                weapon: "Steel Sword",
                charm: "Moon Charm",
            },
            _ => Self {
                weapon: "Rune Blade",
                charm: "Sun Charm",
            },
        }
    }
}

/// The player character.
#[derive(Debug, Clone)]
pub struct Hero {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    pub grounded: bool,
    pub health: Pool,
    pub mana: Pool,
    pub level: u32,
    /// Progress toward the next level.
    pub exp: u32,
    /// Lifetime experience this run, for the session best.
    pub exp_earned: u32,
    pub(crate) jump_was_held: bool,
    pub(crate) invuln_ticks: u32,
}

impl Hero {
    fn fresh() -> Self {
        Self {
            pos: HERO_START,
            vel: Vec2::ZERO,
            facing: Facing::Right,
            grounded: false,
            health: Pool::full(HERO_HEALTH),
            mana: Pool::full(HERO_MANA),
            level: 1,
            exp: 0,
            exp_earned: 0,
            jump_was_held: false,
            invuln_ticks: 0,
        }
    }

    /// Experience needed to finish the current level.
    pub fn exp_to_level(&self) -> u32 {
        self.level * 100
    }

    pub fn equipment(&self) -> Equipment {
        Equipment::for_level(self.level)
    }
}

/// A patrolling enemy. Enemies walk their platform between two x bounds and
/// hurt on contact.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: Pool,
    pub patrol_min: f32,
    pub patrol_max: f32,
}

/// Complete platformer run state.
#[derive(Debug, Clone)]
pub struct PlatformerState {
    pub hero: Hero,
    pub enemies: Vec<Enemy>,
    pub platforms: Vec<Platform>,
    /// Render-time scroll offset, recomputed every tick.
    pub camera: Vec2,
    pub best_exp: HighWater,
    pub locks: ActionLocks,
    pub particles: Particles,
    /// Run time, accrued on the bookkeeping tick.
    pub play_time_ms: u64,
    pub(crate) solids: Vec<Aabb>,
    pub(crate) rng: Pcg32,
    pub(crate) base_seed: u64,
    pub(crate) epoch: u64,
}

impl PlatformerState {
    pub fn new(seed: u64) -> Self {
        let platforms = scene_platforms();
        let solids = platforms.iter().map(|platform| platform.aabb).collect();
        Self {
            hero: Hero::fresh(),
            enemies: scene_enemies(),
            platforms,
            camera: Vec2::ZERO,
            best_exp: HighWater::new(),
            locks: ActionLocks::new(),
            particles: Particles::new(),
            play_time_ms: 0,
            solids,
            rng: Pcg32::seed_from_u64(seed),
            base_seed: seed,
            epoch: 0,
        }
    }
}

/// Fixed scene geometry: three ground strips with gaps, plus floating
/// platforms. Defined once, never mutated.
fn scene_platforms() -> Vec<Platform> {
    let strip = |corner: Vec2, size: Vec2, surface| Platform {
        aabb: Aabb::from_corner(corner, size),
        surface,
    };
    vec![
        strip(
            Vec2::new(0.0, 560.0),
            Vec2::new(700.0, 40.0),
            SurfaceKind::Grass,
        ),
        strip(
            Vec2::new(760.0, 560.0),
            Vec2::new(640.0, 40.0),
            SurfaceKind::Grass,
        ),
        strip(
            Vec2::new(1460.0, 560.0),
            Vec2::new(540.0, 40.0),
            SurfaceKind::Grass,
        ),
        strip(
            Vec2::new(300.0, 440.0),
            Vec2::new(120.0, 20.0),
            SurfaceKind::Wood,
        ),
        strip(
            Vec2::new(520.0, 360.0),
            Vec2::new(120.0, 20.0),
            SurfaceKind::Wood,
        ),
        strip(
            Vec2::new(900.0, 420.0),
            Vec2::new(140.0, 20.0),
            SurfaceKind::Stone,
        ),
        strip(
            Vec2::new(1120.0, 330.0),
            Vec2::new(140.0, 20.0),
            SurfaceKind::Stone,
        ),
        strip(
            Vec2::new(1600.0, 430.0),
            Vec2::new(120.0, 20.0),
            SurfaceKind::Wood,
        ),
    ]
}

/// Spawn table: one walker per ground strip, standing on the surface.
fn scene_enemies() -> Vec<Enemy> {
    let walker = |id, x, patrol_min, patrol_max| Enemy {
        id,
        pos: Vec2::new(x, 546.0),
        vel: Vec2::new(ENEMY_SPEED, 0.0),
        health: Pool::full(ENEMY_HEALTH),
        patrol_min,
        patrol_max,
    };
    vec![
        walker(1, 400.0, 320.0, 660.0),
        walker(2, 900.0, 800.0, 1200.0),
        walker(3, 1300.0, 1240.0, 1380.0),
        walker(4, 1700.0, 1500.0, 1960.0),
    ]
}
