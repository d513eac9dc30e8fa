//! Two-component `f32` vector.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

/// A 2D vector of `f32` components.
///
/// Used for sub-tile positions, velocities, accelerations and affinity
/// impulses. Serializes as a two-element array `[x, y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Vec2 {
    /// Horizontal component (grows to the right).
    pub x: f32,
    /// Vertical component (grows downward).
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Rotate `self` by the heading `dir`, read as a `(cos, sin)` pair.
    ///
    /// `dir` is normally a unit vector; the result is then `self` turned by
    /// the angle of `dir`. A non-unit `dir` also scales the result by its
    /// length, and a non-finite `dir` yields non-finite components.
    pub fn rotate(self, dir: Vec2) -> Vec2 {
        Vec2 {
            x: dir.x * self.x - dir.y * self.y,
            y: dir.y * self.x + dir.x * self.y,
        }
    }

    /// Component-wise mean of `self` and `other`.
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Returns `true` if both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}
