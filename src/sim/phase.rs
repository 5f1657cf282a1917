//! Game phase machine
//!
//! Single source of truth for which subsystems tick. Transitions happen only
//! along the defined edges; anything else is rejected as a no-op. Every
//! fresh entry into Playing bumps the epoch, which timers use to detect
//! staleness across runs.

use serde::Serialize;

/// Process-wide game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    Inventory,
    GameOver,
}

/// Discrete transition requests from the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    OpenInventory,
    CloseInventory,
    Restart,
    ToMenu,
}

/// How a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Entered Playing for a fresh run; the world must be reset.
    Fresh,
    /// Phase changed without touching the world.
    Switched,
    /// The run was abandoned back to the menu.
    Abandoned,
    /// No such edge from the current phase.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct PhaseMachine {
    phase: Phase,
    epoch: u64,
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Menu,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Monotonic run counter, bumped on every fresh Playing entry. A timer
    /// armed under an older epoch is dead.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn apply(&mut self, command: Command) -> Applied {
        use Command::*;
        use Phase::*;

        let applied = match (self.phase, command) {
            (Menu, Start) | (GameOver, Restart) => {
                self.epoch += 1;
                self.phase = Playing;
                Applied::Fresh
            }
            (Playing, Pause) => {
                self.phase = Paused;
                Applied::Switched
            }
            (Paused, Resume) => {
                self.phase = Playing;
                Applied::Switched
            }
            (Paused, OpenInventory) => {
                self.phase = Inventory;
                Applied::Switched
            }
            (Inventory, CloseInventory) => {
                self.phase = Playing;
                Applied::Switched
            }
            (GameOver, ToMenu) => {
                self.phase = Menu;
                Applied::Abandoned
            }
            _ => Applied::Rejected,
        };

        match applied {
            Applied::Rejected => log::debug!("rejected {:?} while {:?}", command, self.phase),
            _ => log::info!("{:?} -> {:?}", command, self.phase),
        }
        applied
    }

    /// Simulation-declared fatal outcome (health gone or a fatal collision).
    pub fn declare_over(&mut self) {
        if self.phase == Phase::Playing {
            log::info!("run over (epoch {})", self.epoch);
            self.phase = Phase::GameOver;
        }
    }
}
