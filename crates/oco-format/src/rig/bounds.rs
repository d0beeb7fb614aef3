//! Axis-aligned bounds of bone positions.

use serde::Serialize;

use super::bone::Bone;

/// Bounds in centimeters, Y up: `top` is the highest Y and `bottom` the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Zero-sized bounds around a single point.
    pub fn from_point(x: f64, y: f64) -> Self {
        Self {
            left: x,
            top: y,
            right: x,
            bottom: y,
        }
    }

    /// Smallest bounds containing both.
    pub fn union(self, other: Bounds) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.max(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.min(other.bottom),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
    }

    /// `[left, top, right, bottom]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}

/// Bounds of a set of root bones and everything below them, or `None` when
/// there are no bones.
pub fn get_bounds(armature: &[Bone]) -> Option<Bounds> {
    armature.iter().map(Bone::bounds).reduce(Bounds::union)
}
