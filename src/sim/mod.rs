//! Shared simulation building blocks
//!
//! Everything here is pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned and passed in by the game state
//! - No rendering or platform dependencies
//!
//! The per-game modules (`flyer`, `racer`, `platformer`) compose these into
//! complete games behind the [`Session`] driver.

pub mod actions;
pub mod camera;
pub mod collision;
pub mod particles;
pub mod phase;
pub mod pool;
pub mod session;

pub use actions::{ActionKind, ActionLocks};
pub use collision::{Aabb, Contact, proximity_hit, resolve_first};
pub use particles::{MAX_PARTICLES, Particle, Particles};
pub use phase::{Applied, Command, Phase, PhaseMachine};
pub use pool::Pool;
pub use session::{Session, Simulate, TickOutcome};
