//! Game settings and preferences
//!
//! Held in memory for the session. Serializable so an embedding shell can
//! store them wherever it likes; the core performs no I/O itself.

use serde::{Deserialize, Serialize};

/// Slider range for the pace multiplier.
pub const GAME_SPEED_MIN: f32 = 0.5;
pub const GAME_SPEED_MAX: f32 = 3.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Pace multiplier for the flyer (hazard spawn cadence and drift).
    game_speed: f32,
    /// Sound effects toggle, consumed by the audio collaborator.
    pub sound_enabled: bool,
    /// Particle effects toggle.
    pub particles: bool,
    /// Show the FPS counter.
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_speed: 1.0,
            sound_enabled: true,
            particles: true,
            show_fps: false,
        }
    }
}

impl Settings {
    pub fn game_speed(&self) -> f32 {
        self.game_speed
    }

    /// Set the pace multiplier, clamped to the slider range.
    pub fn set_game_speed(&mut self, speed: f32) {
        self.game_speed = speed.clamp(GAME_SPEED_MIN, GAME_SPEED_MAX);
    }
}
