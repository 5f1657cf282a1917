//! Fixed-timestep clock
//!
//! Turns irregular host frame times into a deterministic number of 16 ms
//! simulation ticks and 100 ms bookkeeping ticks. The clock never sleeps or
//! blocks; the host calls [`Clock::advance`] from whatever periodic callback
//! it has (requestAnimationFrame, a winit event loop, a test loop).

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, SCORE_DT_MS, SIM_DT_MS};

/// Tick counts owed for one host frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    /// Wall-clock milliseconds integrated this frame, after hitch clamping.
    pub elapsed_ms: f64,
    /// Simulation ticks to run.
    pub sim_ticks: u32,
    /// Bookkeeping ticks to run.
    pub score_ticks: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Clock {
    sim_accum_ms: f64,
    score_accum_ms: f64,
    last_ms: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `now_ms` and return the ticks owed for the elapsed time.
    pub fn advance(&mut self, now_ms: f64) -> Frame {
        let elapsed_ms = match self.last_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.sim_accum_ms += elapsed_ms;
        self.score_accum_ms += elapsed_ms;

        let mut sim_ticks = 0;
        while self.sim_accum_ms >= SIM_DT_MS && sim_ticks < MAX_SUBSTEPS {
            self.sim_accum_ms -= SIM_DT_MS;
            sim_ticks += 1;
        }

        let mut score_ticks = 0;
        while self.score_accum_ms >= SCORE_DT_MS {
            self.score_accum_ms -= SCORE_DT_MS;
            score_ticks += 1;
        }

        Frame {
            elapsed_ms,
            sim_ticks,
            score_ticks,
        }
    }

    /// Re-anchor to `now_ms` without accumulating, so time spent in an inert
    /// phase does not replay as a burst of ticks afterwards.
    pub fn skip_to(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Drop all pending time (fresh run).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_advance_owes_nothing() {
        let mut clock = Clock::new();
        let frame = clock.advance(5000.0);
        assert_eq!(frame.sim_ticks, 0);
        assert_eq!(frame.score_ticks, 0);
    }

    #[test]
    fn test_tick_cadence() {
        let mut clock = Clock::new();
        clock.advance(0.0);

        let frame = clock.advance(48.0);
        assert_eq!(frame.sim_ticks, 3);
        assert_eq!(frame.score_ticks, 0);

        // 52 more ms: one 16 ms tick fits, and the 100 ms boundary passes.
        let frame = clock.advance(100.0);
        assert_eq!(frame.sim_ticks, 3);
        assert_eq!(frame.score_ticks, 1);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = Clock::new();
        clock.advance(0.0);
        assert_eq!(clock.advance(15.0).sim_ticks, 0);
        assert_eq!(clock.advance(17.0).sim_ticks, 1);
    }

    #[test]
    fn test_hitch_clamped() {
        let mut clock = Clock::new();
        clock.advance(0.0);
        let frame = clock.advance(10_000.0);
        assert_eq!(frame.elapsed_ms, MAX_FRAME_MS);
        assert!(frame.sim_ticks <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_skip_to_discards_gap() {
        let mut clock = Clock::new();
        clock.advance(0.0);
        clock.skip_to(5000.0);
        let frame = clock.advance(5016.0);
        assert_eq!(frame.sim_ticks, 1);
    }
}
