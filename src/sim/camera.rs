//! Camera offset derivation
//!
//! The camera is never authoritative state: it is recomputed each tick from
//! the tracked position, clamped to the scene bounds, and consumed only by
//! the render collaborator as a scroll translation.

use glam::Vec2;

/// Top-left offset that centers `focus` in a `view`-sized window without
/// showing anything outside `world`.
pub fn follow(focus: Vec2, view: Vec2, world: Vec2) -> Vec2 {
    let max = (world - view).max(Vec2::ZERO);
    (focus - view * 0.5).clamp(Vec2::ZERO, max)
}
