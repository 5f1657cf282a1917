//! Exclusive timed action locks
//!
//! One lock slot per entity: arming an attack, cast, explosion or respawn
//! blocks every other exclusive action until its duration elapses. Durations
//! are wall-clock milliseconds, fed by the session driver only in phases
//! where expiry is legal, so pausing freezes deadlines. Every lock carries
//! the state-machine epoch it was armed under and a stale lock is discarded
//! on the first advance of a newer run, never fired.

use crate::sim::pool::Pool;

/// Exclusive action categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Attack,
    Cast,
    Explosion,
    Respawn,
}

impl ActionKind {
    /// Lock duration in wall-clock milliseconds.
    pub fn duration_ms(self) -> f64 {
        match self {
            ActionKind::Attack => 300.0,
            ActionKind::Cast => 500.0,
            ActionKind::Explosion => 1000.0,
            ActionKind::Respawn => 800.0,
        }
    }

    /// Mana charged atomically on activation.
    pub fn mana_cost(self) -> f32 {
        match self {
            ActionKind::Cast => 10.0,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Lock {
    kind: ActionKind,
    until_ms: f64,
    epoch: u64,
}

/// Single-slot lock manager.
#[derive(Debug, Clone, Default)]
pub struct ActionLocks {
    clock_ms: f64,
    lock: Option<Lock>,
}

impl ActionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed wall-clock time; the lock clears on its deadline. A lock
    /// armed under a different epoch is discarded immediately.
    pub fn advance(&mut self, elapsed_ms: f64, epoch: u64) {
        self.clock_ms += elapsed_ms;
        if let Some(lock) = self.lock {
            if lock.epoch != epoch || self.clock_ms >= lock.until_ms {
                self.lock = None;
            }
        }
    }

    /// Arm `kind` if no exclusive action is active and the mana pool covers
    /// its cost. Refusal is a normal no-op: nothing changes and false comes
    /// back.
    pub fn try_activate(&mut self, kind: ActionKind, mana: Option<&mut Pool>, epoch: u64) -> bool {
        if self.lock.is_some() {
            return false;
        }
        let cost = kind.mana_cost();
        if cost > 0.0 {
            let Some(pool) = mana else {
                return false;
            };
            if !pool.spend(cost) {
                return false;
            }
        }
        self.lock = Some(Lock {
            kind,
            until_ms: self.clock_ms + kind.duration_ms(),
            epoch,
        });
        true
    }

    /// Currently active action, if any.
    pub fn active(&self) -> Option<ActionKind> {
        self.lock.map(|lock| lock.kind)
    }

    pub fn is_active(&self, kind: ActionKind) -> bool {
        self.active() == Some(kind)
    }

    /// Force-clear (run teardown).
    pub fn clear(&mut self) {
        self.lock = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_activation_is_noop() {
        let mut locks = ActionLocks::new();
        let mut mana = Pool::full(50.0);

        assert!(locks.try_activate(ActionKind::Attack, None, 1));
        assert!(!locks.try_activate(ActionKind::Cast, Some(&mut mana), 1));
        assert_eq!(locks.active(), Some(ActionKind::Attack));
        assert_eq!(mana.current(), 50.0);
    }

    #[test]
    fn test_insufficient_mana_refused() {
        let mut locks = ActionLocks::new();
        let mut mana = Pool::full(50.0);
        mana.drain(45.0);

        assert!(!locks.try_activate(ActionKind::Cast, Some(&mut mana), 1));
        assert_eq!(mana.current(), 5.0);
        assert_eq!(locks.active(), None);
    }

    #[test]
    fn test_cast_charges_mana() {
        let mut locks = ActionLocks::new();
        let mut mana = Pool::full(50.0);

        assert!(locks.try_activate(ActionKind::Cast, Some(&mut mana), 1));
        assert_eq!(mana.current(), 40.0);
    }

    #[test]
    fn test_expires_on_deadline() {
        let mut locks = ActionLocks::new();
        assert!(locks.try_activate(ActionKind::Attack, None, 1));

        locks.advance(299.0, 1);
        assert!(locks.is_active(ActionKind::Attack));

        locks.advance(1.0, 1);
        assert_eq!(locks.active(), None);

        // Slot is free again.
        assert!(locks.try_activate(ActionKind::Attack, None, 1));
    }

    #[test]
    fn test_stale_epoch_never_fires() {
        let mut locks = ActionLocks::new();
        assert!(locks.try_activate(ActionKind::Explosion, None, 1));

        locks.advance(0.0, 2);
        assert_eq!(locks.active(), None);
    }

    #[test]
    fn test_clear_forces_release() {
        let mut locks = ActionLocks::new();
        assert!(locks.try_activate(ActionKind::Respawn, None, 1));
        locks.clear();
        assert_eq!(locks.active(), None);
    }
}
