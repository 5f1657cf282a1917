//! Transient particle pool
//!
//! Decorative only: nothing reads particles back into gameplay. Spawning
//! draws jitter and velocity from the caller's seeded RNG so runs replay
//! deterministically under a fixed seed.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

/// Hard cap on live particles; spawns beyond it are dropped.
pub const MAX_PARTICLES: usize = 256;

/// Ticks a freshly spawned particle lives.
pub const PARTICLE_LIFE_TICKS: u32 = 36;

/// Velocity damping per tick.
const DAMPING: f32 = 0.92;

/// Spawn jitter half-range around the origin.
const JITTER: f32 = 2.0;

/// Initial velocity half-range per axis.
const SPREAD: f32 = 1.6;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Palette index for the render collaborator.
    pub color: u32,
    /// Remaining life in ticks.
    pub life: u32,
}

/// Pool of live particles.
#[derive(Debug, Clone, Default)]
pub struct Particles {
    live: Vec<Particle>,
}

impl Particles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Burst `count` particles at `origin`, each jittered and given a random
    /// initial velocity.
    pub fn spawn(&mut self, rng: &mut Pcg32, origin: Vec2, color: u32, count: usize) {
        for _ in 0..count {
            if self.live.len() >= MAX_PARTICLES {
                break;
            }
            let jitter = Vec2::new(
                rng.random_range(-JITTER..JITTER),
                rng.random_range(-JITTER..JITTER),
            );
            let vel = Vec2::new(
                rng.random_range(-SPREAD..SPREAD),
                rng.random_range(-SPREAD..SPREAD),
            );
            self.live.push(Particle {
                pos: origin + jitter,
                vel,
                color,
                life: PARTICLE_LIFE_TICKS,
            });
        }
    }

    /// Advance one tick: integrate, damp, age, and drop dead particles. A
    /// particle whose life reaches zero is gone the same tick.
    pub fn advance(&mut self) {
        for particle in &mut self.live {
            particle.pos += particle.vel;
            particle.vel *= DAMPING;
            particle.life -= 1;
        }
        self.live.retain(|particle| particle.life > 0);
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
