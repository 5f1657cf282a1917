//! Obstacle-dodging flyer
//!
//! Steer a plane inside a 100x100 field while hazards rain down from above.
//! One touch ends the run; the score is survival time.

pub mod state;
pub mod tick;

pub use state::{FlyerState, Hazard};
