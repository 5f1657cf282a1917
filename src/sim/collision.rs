//! Axis-aligned collision detection and resolution
//!
//! Two independent checks, both pure functions of the current positions:
//! rectangle overlap against static geometry with single-axis resolution,
//! and a distance-threshold hit against dynamic entities. Neither mutates
//! anything on a miss.

use glam::Vec2;

/// Axis-aligned rectangle stored as center plus half extents.
/// The y axis grows downward, so `top()` is the smaller y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Build from a top-left corner and a full size, handy for scene layout.
    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self {
            center: corner + size * 0.5,
            half: size * 0.5,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Strict overlap test; touching edges do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() < self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() < self.half.y + other.half.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() <= self.half.x
            && (point.y - self.center.y).abs() <= self.half.y
    }
}

/// Outcome of resolving a moving box against static geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Corrected position.
    pub pos: Vec2,
    /// Velocity with the resolved axis zeroed.
    pub vel: Vec2,
    /// True when the box came to rest on top of the geometry.
    pub grounded: bool,
    /// Index of the rectangle that was resolved.
    pub index: usize,
}

/// Resolve a tentatively-moved box of `half` extents against `solids`.
///
/// Only the first overlapping rectangle is resolved per call; simultaneous
/// multi-rectangle penetration is not deconflicted. The resolution axis is
/// chosen from the incoming velocity sign and the previous position: falling
/// onto a top face lands the box (grounded), rising into an underside bumps
/// it back down, anything else snaps it out horizontally. Returns `None`
/// when nothing overlaps.
pub fn resolve_first(
    half: Vec2,
    prev_pos: Vec2,
    pos: Vec2,
    vel: Vec2,
    solids: &[Aabb],
) -> Option<Contact> {
    let moved = Aabb::new(pos, half);
    for (index, solid) in solids.iter().enumerate() {
        if !moved.overlaps(solid) {
            continue;
        }

        if vel.y > 0.0 && prev_pos.y + half.y <= solid.top() {
            return Some(Contact {
                pos: Vec2::new(pos.x, solid.top() - half.y),
                vel: Vec2::new(vel.x, 0.0),
                grounded: true,
                index,
            });
        }

        if vel.y < 0.0 && prev_pos.y - half.y >= solid.bottom() {
            return Some(Contact {
                pos: Vec2::new(pos.x, solid.bottom() + half.y),
                vel: Vec2::new(vel.x, 0.0),
                grounded: false,
                index,
            });
        }

        let push_left = if vel.x != 0.0 {
            vel.x > 0.0
        } else {
            pos.x < solid.center.x
        };
        let x = if push_left {
            solid.left() - half.x
        } else {
            solid.right() + half.x
        };
        return Some(Contact {
            pos: Vec2::new(x, pos.y),
            vel: Vec2::new(0.0, vel.y),
            grounded: false,
            index,
        });
    }
    None
}

/// Distance-threshold hit between two dynamic entities. Declared strictly
/// below the threshold, independent of either entity's actual extents.
#[inline]
pub fn proximity_hit(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance_squared(b) < threshold * threshold
}
