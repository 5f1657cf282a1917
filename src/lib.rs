//! Minicade - three retro mini-games on one simulation core
//!
//! Core modules:
//! - `sim`: shared deterministic simulation building blocks (phase machine,
//!   session driver, action locks, collision, particles, camera)
//! - `flyer` / `racer` / `platformer`: per-game state and tick logic
//! - `clock`: fixed-timestep driver, decoupled from rendering
//! - `input`: held-control snapshot the simulation reads each tick
//! - `settings` / `scoreboard`: host-facing preferences and session bests
//!
//! Rendering, raw input capture and menu presentation live in an embedding
//! shell. The shell drives a [`sim::Session`] with wall-clock time and an
//! [`input::Inputs`] snapshot, sends [`sim::Command`]s for menu actions, and
//! reads the game state back between updates.

pub mod clock;
pub mod flyer;
pub mod input;
pub mod platformer;
pub mod racer;
pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use input::{Control, Inputs};
pub use settings::Settings;
pub use sim::{Command, Phase, Session};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds. Per-tick gameplay constants
    /// are tuned against this value; it is a contract, not a knob.
    pub const SIM_DT_MS: f64 = 16.0;
    /// Bookkeeping timestep (score and lap-timer accrual) in milliseconds.
    pub const SCORE_DT_MS: f64 = 100.0;
    /// Maximum simulation substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame the clock will integrate; hitches beyond this are
    /// dropped rather than replayed.
    pub const MAX_FRAME_MS: f64 = 100.0;
}

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector for a heading angle (radians, 0 = +x, y grows downward)
#[inline]
pub fn heading_vec(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
