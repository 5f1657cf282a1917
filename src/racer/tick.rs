//! Racer simulation tick

use glam::Vec2;

use super::state::{
    ACCEL, BRAKE, CAR_HALF, FRICTION, LAPS_TOTAL, MAX_SPEED, RacerState, SPEED_EPSILON, STEER_RATE,
};
use crate::consts::SCORE_DT_MS;
use crate::heading_vec;
use crate::input::{Control, Inputs};
use crate::normalize_angle;
use crate::sim::{Simulate, TickOutcome, resolve_first};

/// Wall-scrape spark palette index.
const SPARK_COLOR: u32 = 6;
/// Impact speed that starts throwing sparks.
const SPARK_SPEED: f32 = 1.0;

impl Simulate for RacerState {
    fn reset(&mut self, epoch: u64) {
        let best_lap = self.best_lap;
        *self = RacerState::new(self.base_seed.wrapping_add(epoch));
        self.best_lap = best_lap;
    }

    fn sim_tick(&mut self, inputs: &Inputs) -> TickOutcome {
        let prev = self.car.pos;
        steer_and_thrust(self, inputs);
        integrate_and_collide(self, prev);
        self.particles.advance();

        if cross_lines(self, prev) {
            return TickOutcome::Over;
        }
        TickOutcome::Running
    }

    fn score_tick(&mut self) {
        self.lap_time_ms += SCORE_DT_MS as u64;
    }

    fn advance_timers(&mut self, _elapsed_ms: f64, _epoch: u64) {}

    fn fade_tick(&mut self) {
        self.particles.advance();
    }

    fn halt(&mut self) {
        self.particles.clear();
    }
}

fn steer_and_thrust(state: &mut RacerState, inputs: &Inputs) {
    let car = &mut state.car;

    let authority = (car.speed / MAX_SPEED).clamp(0.0, 1.0);
    car.heading = normalize_angle(car.heading + inputs.axis_x() * STEER_RATE * authority);

    if inputs.held(Control::Up) {
        car.speed = (car.speed + ACCEL).min(MAX_SPEED);
    } else if inputs.held(Control::Down) {
        car.speed = (car.speed - BRAKE).max(0.0);
    } else {
        car.speed *= FRICTION;
        if car.speed < SPEED_EPSILON {
            car.speed = 0.0;
        }
    }
}

fn integrate_and_collide(state: &mut RacerState, prev: Vec2) {
    let vel = heading_vec(state.car.heading) * state.car.speed;
    let pos = prev + vel;

    match resolve_first(CAR_HALF, prev, pos, vel, &state.solids) {
        Some(contact) => {
            state.car.pos = contact.pos;
            // The wall keeps only the sliding component of the motion.
            let scrubbed = contact.vel.length();
            if state.car.speed - scrubbed > SPARK_SPEED {
                state
                    .particles
                    .spawn(&mut state.rng, contact.pos, SPARK_COLOR, 6);
            }
            state.car.speed = scrubbed.min(state.car.speed);
        }
        None => state.car.pos = pos,
    }
}

/// Checkpoint and finish-line bookkeeping. Returns true when the race is
/// complete.
fn cross_lines(state: &mut RacerState, prev: Vec2) -> bool {
    let pos = state.car.pos;

    if state.checkpoint.contains(pos) && !state.checkpoint.contains(prev) {
        state.checkpoint_cleared = true;
    }

    if state.checkpoint_cleared && state.finish.contains(pos) && !state.finish.contains(prev) {
        let lap_ms = state.lap_time_ms;
        state.last_lap_ms = Some(lap_ms);
        let improved = state.best_lap.offer(lap_ms);
        state.lap += 1;
        state.lap_time_ms = 0;
        state.checkpoint_cleared = false;
        log::info!(
            "lap {}/{} in {} ms{}",
            state.lap,
            LAPS_TOTAL,
            lap_ms,
            if improved { " (best)" } else { "" }
        );

        if state.lap >= LAPS_TOTAL {
            log::info!("race complete");
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::racer::state::CAR_START;
    use crate::sim::Aabb;
    use std::f32::consts::FRAC_PI_2;

    fn state() -> RacerState {
        RacerState::new(11)
    }

    #[test]
    fn test_no_steering_at_rest() {
        let mut racer = state();
        let mut inputs = Inputs::new();
        inputs.press(Control::Right);

        racer.sim_tick(&inputs);
        assert_eq!(racer.car.heading, 0.0);
        assert_eq!(racer.car.pos, CAR_START);
    }

    #[test]
    fn test_steering_scales_with_speed() {
        let mut racer = state();
        racer.car.speed = MAX_SPEED / 2.0;
        let mut inputs = Inputs::new();
        inputs.press(Control::Right);
        inputs.press(Control::Up);

        racer.sim_tick(&inputs);
        let half_turn = racer.car.heading;
        assert!(half_turn > 0.0);
        assert!(half_turn < STEER_RATE);
    }

    #[test]
    fn test_thrust_caps_at_max_speed() {
        let mut racer = state();
        let mut inputs = Inputs::new();
        inputs.press(Control::Up);
        for _ in 0..100 {
            steer_and_thrust(&mut racer, &inputs);
        }
        assert_eq!(racer.car.speed, MAX_SPEED);
    }

    #[test]
    fn test_coast_down_snaps_to_zero() {
        let mut racer = state();
        racer.car.speed = 1.0;
        let inputs = Inputs::new();
        for _ in 0..200 {
            steer_and_thrust(&mut racer, &inputs);
        }
        assert_eq!(racer.car.speed, 0.0);
    }

    #[test]
    fn test_wall_scrubs_speed() {
        let mut racer = state();
        // Aim straight up at the island's underside (bottom edge at y 400).
        racer.car.pos = Vec2::new(400.0, 420.0);
        racer.car.heading = -FRAC_PI_2;
        racer.car.speed = MAX_SPEED;

        let inputs = Inputs::new();
        for _ in 0..10 {
            racer.sim_tick(&inputs);
        }

        assert_eq!(racer.car.pos.y, 400.0 + CAR_HALF.y);
        assert_eq!(racer.car.speed, 0.0);
    }

    #[test]
    fn test_finish_without_checkpoint_does_not_count() {
        let mut racer = state();
        let prev = Vec2::new(380.0, 500.0);
        racer.car.pos = Vec2::new(401.0, 500.0);
        assert!(!cross_lines(&mut racer, prev));
        assert_eq!(racer.lap, 0);
    }

    #[test]
    fn test_lap_counts_after_checkpoint() {
        let mut racer = state();
        racer.lap_time_ms = 42_000;

        // Cross the checkpoint on the far straight.
        let prev = Vec2::new(380.0, 100.0);
        racer.car.pos = Vec2::new(401.0, 100.0);
        assert!(!cross_lines(&mut racer, prev));
        assert!(racer.checkpoint_cleared);

        // Then the finish line.
        let prev = Vec2::new(380.0, 500.0);
        racer.car.pos = Vec2::new(401.0, 500.0);
        assert!(!cross_lines(&mut racer, prev));
        assert_eq!(racer.lap, 1);
        assert_eq!(racer.lap_time_ms, 0);
        assert_eq!(racer.last_lap_ms, Some(42_000));
        assert_eq!(racer.best_lap.get(), Some(42_000));
        assert!(!racer.checkpoint_cleared);
    }

    #[test]
    fn test_race_completes_after_final_lap() {
        let mut racer = state();
        racer.lap = LAPS_TOTAL - 1;
        racer.checkpoint_cleared = true;

        let prev = Vec2::new(380.0, 500.0);
        racer.car.pos = Vec2::new(401.0, 500.0);
        assert!(cross_lines(&mut racer, prev));
    }

    #[test]
    fn test_reset_keeps_best_lap() {
        let mut racer = state();
        racer.best_lap.offer(39_000);
        racer.lap = 2;
        racer.car.speed = 3.0;

        racer.reset(2);
        assert_eq!(racer.lap, 0);
        assert_eq!(racer.car.speed, 0.0);
        assert_eq!(racer.best_lap.get(), Some(39_000));
    }

    #[test]
    fn test_walls_surround_the_lane() {
        let racer = state();
        // Start position sits in the bottom lane, clear of every wall.
        let car = Aabb::new(CAR_START, CAR_HALF);
        assert!(racer.walls.iter().all(|wall| !wall.aabb.overlaps(&car)));
    }
}
