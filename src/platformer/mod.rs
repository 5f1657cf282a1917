//! Side-scrolling action platformer
//!
//! Run, jump and fight across a fixed scene of platforms. Melee swings and
//! mana-gated casts share one exclusive action slot; experience levels the
//! hero up, and the run ends when health hits zero.

pub mod state;
pub mod tick;

pub use state::{Enemy, Equipment, Facing, Hero, Platform, PlatformerState, SurfaceKind};
