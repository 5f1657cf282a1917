//! Session driver
//!
//! Owns the phase machine and the clock, and runs a game's simulation only
//! while the phase allows it. The render and UI collaborators read the game
//! state between updates through [`Session::sim`] and write nothing back
//! except discrete [`Command`]s.

use crate::clock::Clock;
use crate::input::Inputs;
use crate::sim::phase::{Applied, Command, Phase, PhaseMachine};

/// Result of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Fatal condition reached; the session moves to GameOver.
    Over,
}

/// A complete game the session can drive.
pub trait Simulate {
    /// Return every entity, timer and score to its initial value. `epoch`
    /// identifies the new run for timer staleness checks and reseeding.
    fn reset(&mut self, epoch: u64);

    /// One fixed 16 ms simulation step.
    fn sim_tick(&mut self, inputs: &Inputs) -> TickOutcome;

    /// One 100 ms bookkeeping step (score or lap-timer accrual).
    fn score_tick(&mut self);

    /// Feed wall-clock time to action timers. Called while Playing and
    /// during the GameOver display window, never in inert phases.
    fn advance_timers(&mut self, elapsed_ms: f64, epoch: u64);

    /// Decay-only step for transient effects on the game-over screen.
    fn fade_tick(&mut self) {}

    /// Force-clear pending timed state when a run is abandoned.
    fn halt(&mut self);
}

/// Phase machine plus clock plus one game.
#[derive(Debug)]
pub struct Session<S: Simulate> {
    machine: PhaseMachine,
    clock: Clock,
    sim: S,
}

impl<S: Simulate> Session<S> {
    pub fn new(sim: S) -> Self {
        Self {
            machine: PhaseMachine::new(),
            clock: Clock::new(),
            sim,
        }
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn epoch(&self) -> u64 {
        self.machine.epoch()
    }

    /// Read-only view for the render and UI collaborators.
    pub fn sim(&self) -> &S {
        &self.sim
    }

    /// Apply a discrete UI transition request.
    pub fn command(&mut self, command: Command) {
        match self.machine.apply(command) {
            Applied::Fresh => {
                self.sim.reset(self.machine.epoch());
                self.clock.reset();
            }
            Applied::Abandoned => self.sim.halt(),
            Applied::Switched | Applied::Rejected => {}
        }
    }

    /// Advance with the host's wall clock. Only Playing runs simulation and
    /// bookkeeping ticks; GameOver decays its transient display effects;
    /// every other phase is inert.
    pub fn update(&mut self, now_ms: f64, inputs: &Inputs) {
        match self.machine.phase() {
            Phase::Playing => {
                let frame = self.clock.advance(now_ms);
                self.sim.advance_timers(frame.elapsed_ms, self.machine.epoch());
                for _ in 0..frame.sim_ticks {
                    if self.sim.sim_tick(inputs) == TickOutcome::Over {
                        self.machine.declare_over();
                        break;
                    }
                }
                if self.machine.is_playing() {
                    for _ in 0..frame.score_ticks {
                        self.sim.score_tick();
                    }
                }
            }
            Phase::GameOver => {
                let frame = self.clock.advance(now_ms);
                self.sim.advance_timers(frame.elapsed_ms, self.machine.epoch());
                for _ in 0..frame.sim_ticks {
                    self.sim.fade_tick();
                }
            }
            _ => self.clock.skip_to(now_ms),
        }
    }
}
