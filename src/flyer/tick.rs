//! Flyer simulation tick

use glam::Vec2;
use rand::Rng;

use super::state::{
    ACCEL, DESPAWN_Y, FRICTION, FlyerState, HIT_RADIUS, Hazard, MAX_SPEED, SPAWN_PERIOD_MS,
    SPAWN_Y, SPEED_EPSILON, WORLD,
};
use crate::consts::SIM_DT_MS;
use crate::input::Inputs;
use crate::sim::{ActionKind, Simulate, TickOutcome, proximity_hit};

/// Crash burst palette index.
const EXPLOSION_COLOR: u32 = 1;
/// Particles in the crash burst.
const EXPLOSION_PARTICLES: usize = 24;

impl Simulate for FlyerState {
    fn reset(&mut self, epoch: u64) {
        let best_score = self.best_score;
        *self = FlyerState::new(self.base_seed.wrapping_add(epoch), self.speed);
        self.best_score = best_score;
        self.epoch = epoch;
    }

    fn sim_tick(&mut self, inputs: &Inputs) -> TickOutcome {
        steer(self, inputs);
        drift_hazards(self);
        spawn_due_hazards(self);
        self.particles.advance();

        if self
            .hazards
            .iter()
            .any(|hazard| proximity_hit(hazard.pos, self.player, HIT_RADIUS))
        {
            crash(self);
            return TickOutcome::Over;
        }
        TickOutcome::Running
    }

    fn score_tick(&mut self) {
        self.score += 1;
    }

    fn advance_timers(&mut self, elapsed_ms: f64, epoch: u64) {
        self.locks.advance(elapsed_ms, epoch);
        if !self.locks.is_active(ActionKind::Explosion) {
            self.explosion = None;
        }
    }

    fn fade_tick(&mut self) {
        self.particles.advance();
    }

    fn halt(&mut self) {
        self.locks.clear();
        self.explosion = None;
        self.particles.clear();
    }
}

fn steer(state: &mut FlyerState, inputs: &Inputs) {
    let dir = Vec2::new(inputs.axis_x(), inputs.axis_y());
    if dir != Vec2::ZERO {
        state.vel = (state.vel + dir * ACCEL).clamp_length_max(MAX_SPEED);
    } else {
        state.vel *= FRICTION;
        if state.vel.length() < SPEED_EPSILON {
            state.vel = Vec2::ZERO;
        }
    }
    state.player = (state.player + state.vel).clamp(Vec2::ZERO, Vec2::splat(WORLD));
}

fn drift_hazards(state: &mut FlyerState) {
    let pace = state.speed;
    for hazard in &mut state.hazards {
        hazard.pos += hazard.vel * pace;
    }
    state.hazards.retain(|hazard| hazard.pos.y < DESPAWN_Y);
}

fn spawn_due_hazards(state: &mut FlyerState) {
    state.spawn_clock_ms += SIM_DT_MS;
    let period = SPAWN_PERIOD_MS / state.speed as f64;
    while state.spawn_clock_ms >= period {
        state.spawn_clock_ms -= period;
        let id = state.next_hazard_id();
        let x = state.rng.random_range(0.0..WORLD);
        let vel = Vec2::new(
            state.rng.random_range(-0.5..0.5),
            state.rng.random_range(0.5..1.0),
        );
        state.hazards.push(Hazard {
            id,
            pos: Vec2::new(x, SPAWN_Y),
            vel,
        });
    }
}

fn crash(state: &mut FlyerState) {
    let site = state.player;
    state.explosion = Some(site);
    state
        .locks
        .try_activate(ActionKind::Explosion, None, state.epoch);
    state
        .particles
        .spawn(&mut state.rng, site, EXPLOSION_COLOR, EXPLOSION_PARTICLES);

    let improved = state.best_score.offer(state.score);
    log::info!(
        "flyer down at ({:.0}, {:.0}), score {}{}",
        site.x,
        site.y,
        state.score,
        if improved { " (best)" } else { "" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flyer::state::PLAYER_START;
    use crate::input::Control;
    use crate::sim::{Command, Phase, Session};

    fn state() -> FlyerState {
        FlyerState::new(42, 1.0)
    }

    #[test]
    fn test_reset_returns_to_initial_values() {
        let mut flyer = state();
        flyer.score = 57;
        flyer.player = Vec2::new(10.0, 10.0);
        flyer.hazards.push(Hazard {
            id: 1,
            pos: Vec2::new(30.0, 30.0),
            vel: Vec2::ZERO,
        });
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(9);
        flyer.particles.spawn(&mut rng, Vec2::ZERO, 0, 8);
        flyer.best_score.offer(57);

        flyer.reset(2);
        assert_eq!(flyer.score, 0);
        assert_eq!(flyer.player, PLAYER_START);
        assert!(flyer.hazards.is_empty());
        assert!(flyer.particles.is_empty());
        // The session best survives the reset.
        assert_eq!(flyer.best_score.get(), Some(57));
    }

    #[test]
    fn test_hit_inside_radius_ends_run() {
        let mut flyer = state();
        flyer.hazards.push(Hazard {
            id: 1,
            pos: flyer.player + Vec2::new(4.9, 0.0),
            vel: Vec2::ZERO,
        });
        assert_eq!(flyer.sim_tick(&Inputs::new()), TickOutcome::Over);
        assert_eq!(flyer.explosion, Some(flyer.player));
        assert!(flyer.locks.is_active(ActionKind::Explosion));
        assert!(!flyer.particles.is_empty());
    }

    #[test]
    fn test_miss_outside_radius_keeps_running() {
        let mut flyer = state();
        flyer.hazards.push(Hazard {
            id: 1,
            pos: flyer.player + Vec2::new(5.1, 0.0),
            vel: Vec2::ZERO,
        });
        assert_eq!(flyer.sim_tick(&Inputs::new()), TickOutcome::Running);
        assert_eq!(flyer.explosion, None);
    }

    #[test]
    fn test_score_accrues_per_bookkeeping_tick() {
        let mut flyer = state();
        for _ in 0..10 {
            flyer.score_tick();
        }
        assert_eq!(flyer.score, 10);
    }

    #[test]
    fn test_spawn_cadence_matches_period() {
        let mut flyer = state();
        let inputs = Inputs::new();
        // 2000 ms / 16 ms = 125 ticks per spawn at pace 1.0.
        for _ in 0..124 {
            flyer.sim_tick(&inputs);
        }
        assert!(flyer.hazards.is_empty());
        flyer.sim_tick(&inputs);
        assert_eq!(flyer.hazards.len(), 1);
        assert_eq!(flyer.hazards[0].pos.y, SPAWN_Y);
    }

    #[test]
    fn test_movement_clamped_to_world() {
        let mut flyer = state();
        let mut inputs = Inputs::new();
        inputs.press(Control::Left);
        inputs.press(Control::Up);
        for _ in 0..120 {
            flyer.sim_tick(&inputs);
        }
        assert_eq!(flyer.player, Vec2::ZERO);
    }

    #[test]
    fn test_velocity_snaps_to_zero() {
        let mut flyer = state();
        let mut inputs = Inputs::new();
        inputs.press(Control::Right);
        for _ in 0..10 {
            flyer.sim_tick(&inputs);
        }
        assert!(flyer.vel.length() > 0.0);

        inputs.clear();
        for _ in 0..40 {
            flyer.sim_tick(&inputs);
        }
        assert_eq!(flyer.vel, Vec2::ZERO);
    }

    #[test]
    fn test_best_score_recorded_on_crash() {
        let mut flyer = state();
        flyer.score = 42;
        flyer.hazards.push(Hazard {
            id: 1,
            pos: flyer.player,
            vel: Vec2::ZERO,
        });
        flyer.sim_tick(&Inputs::new());
        assert_eq!(flyer.best_score.get(), Some(42));
    }

    #[test]
    fn test_explosion_evicted_after_display_window() {
        let mut flyer = state();
        flyer.epoch = 1;
        flyer.hazards.push(Hazard {
            id: 1,
            pos: flyer.player,
            vel: Vec2::ZERO,
        });
        flyer.sim_tick(&Inputs::new());
        assert!(flyer.explosion.is_some());

        flyer.advance_timers(999.0, 1);
        assert!(flyer.explosion.is_some());
        flyer.advance_timers(1.0, 1);
        assert!(flyer.explosion.is_none());
    }

    #[test]
    fn test_session_drives_score_and_spawns() {
        let mut session = Session::new(FlyerState::new(7, 1.0));
        let inputs = Inputs::new();
        session.command(Command::Start);

        // 3.2 simulated seconds: the first hazard is in (spawned at 2 s)
        // but cannot have fallen far enough to reach the player yet.
        for frame in 0..=200u32 {
            session.update(f64::from(frame) * 16.0, &inputs);
        }

        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.sim().score, 32);
        assert_eq!(session.sim().hazards.len(), 1);
    }
}
