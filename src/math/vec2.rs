use std::ops::{Add, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq};

/// A 2D point or direction with `f32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the z component of the 3D cross product of `self` and `other`.
    ///
    /// Positive when `other` lies counter-clockwise of `self` (y up).
    pub fn cross(&self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Linearly interpolate towards `other`; `t = 0` yields `self`.
    pub fn lerp(&self, other: Self, t: f32) -> Self {
        *self + (other - *self) * t
    }

    /// Component-wise minimum.
    pub fn min(&self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Per-axis absolute tolerance; two vertices are "the same" when both
/// coordinates are within epsilon.
impl AbsDiffEq for Vec2 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vec2 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn cross_sign_follows_winding() {
        assert!(Vec2::RIGHT.cross(Vec2::UP) > 0.0);
        assert!(Vec2::UP.cross(Vec2::RIGHT) < 0.0);
        assert_eq!(Vec2::RIGHT.cross(Vec2::RIGHT * 3.0), 0.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_relative_eq!(a.lerp(b, 0.5), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn abs_diff_eq_is_per_axis() {
        let a = Vec2::new(1.0, 1.0);
        assert_abs_diff_eq!(a, Vec2::new(1.0005, 0.9995), epsilon = 0.001);
        assert!(!a.abs_diff_eq(&Vec2::new(1.0, 1.01), 0.001));
    }

    #[test]
    fn min_max_are_component_wise() {
        let a = Vec2::new(1.0, 5.0);
        let b = Vec2::new(3.0, -2.0);
        assert_eq!(a.min(b), Vec2::new(1.0, -2.0));
        assert_eq!(a.max(b), Vec2::new(3.0, 5.0));
    }
}
