//! Top-down circuit racer
//!
//! Thrust-and-steer driving around a rectangular circuit. Steering authority
//! grows with speed, walls scrub it off, and the run ends after three laps.

pub mod state;
pub mod tick;

pub use state::{Car, RacerState, Surface, Wall};
