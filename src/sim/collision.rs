//! Collision detection and response for axis-aligned rectangles
//!
//! Everything in Pong is a box: paddles, the square ball, and the court.

use glam::Vec2;

/// Axis-aligned rectangle, `min` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// True if the interiors overlap; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }

    /// True if the point lies inside (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }

    /// Grow the rectangle by `pad` on every side
    pub fn padded(&self, pad: Vec2) -> Rect {
        Rect::new(self.min - pad, self.size + pad * 2.0)
    }
}

/// Keep a box of height `size` between `top` and `bottom`, reflecting velocity on contact
///
/// Returns true if a wall was hit.
pub fn reflect_off_walls(pos: &mut Vec2, vel: &mut Vec2, size: f32, top: f32, bottom: f32) -> bool {
    if pos.y < top {
        pos.y = top;
        vel.y = -vel.y;
        true
    } else if pos.y > bottom - size {
        pos.y = bottom - size;
        vel.y = -vel.y;
        true
    } else {
        false
    }
}
