//! # Vector2
//!
//! Plain 2D vector value type used for positions, forces, velocities and
//! contact normals. Arithmetic is available both as named methods and through
//! the `std::ops` traits; the in-place mutators (`normalize`, `negate`,
//! `perp`) replace the value they are called on.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::PhysicsError;

/// Magnitudes below this are treated as zero by [`Vector2::normalize`].
pub const NORMALIZE_EPSILON: f32 = 1e-6;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    #[must_use]
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    #[must_use]
    pub fn dot(self, v: Self) -> f32 {
        self.x * v.x + self.y * v.y
    }

    /// 2D cross product: the signed area of the parallelogram spanned by
    /// `self` and `v`. Positive when `v` lies counter-clockwise of `self`.
    #[must_use]
    pub fn perp_dot(self, v: Self) -> f32 {
        self.x * v.y - self.y * v.x
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn distance_to(self, v: Self) -> f32 {
        (self - v).magnitude()
    }

    /// Normalizes in place. A vector shorter than [`NORMALIZE_EPSILON`]
    /// becomes the zero vector.
    pub fn normalize(&mut self) {
        let m = self.magnitude();
        if m < NORMALIZE_EPSILON {
            *self = Self::ZERO;
            return;
        }
        let d = 1.0 / m;
        self.x *= d;
        self.y *= d;
    }

    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }

    /// Rotates in place by 90 degrees counter-clockwise: `(x, y) -> (-y, x)`.
    pub fn perp(&mut self) {
        let x = self.x;
        self.x = -self.y;
        self.y = x;
    }

    #[must_use]
    pub fn perpendicular(mut self) -> Self {
        self.perp();
        self
    }

    /// Rotates by `angle` radians with the standard 2x2 rotation matrix.
    #[must_use]
    pub fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Vector projection of `self` onto `v`.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::DegenerateAxis`] when `v` has zero length.
    pub fn project_onto(self, v: Self) -> Result<Self, PhysicsError> {
        let denom = v.length_squared();
        if denom == 0.0 || !denom.is_finite() {
            return Err(PhysicsError::DegenerateAxis);
        }
        Ok(v * (self.dot(v) / denom))
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn normalize_unit_length() {
        let mut v = Vector2::new(3.0, 4.0);
        v.normalize();
        assert!((v.magnitude() - 1.0).abs() < EPS);
        assert!((v.x - 0.6).abs() < EPS);
        assert!((v.y - 0.8).abs() < EPS);
    }

    #[test]
    fn normalize_tiny_vector_is_zero() {
        let mut v = Vector2::new(1e-7, -1e-7);
        v.normalize();
        assert_eq!(v, Vector2::ZERO);
    }

    #[test]
    fn perp_rotates_counter_clockwise() {
        let mut v = Vector2::new(1.0, 2.0);
        v.perp();
        assert_eq!(v, Vector2::new(-2.0, 1.0));
    }

    #[test]
    fn perp_dot_is_antisymmetric() {
        let a = Vector2::new(1.5, -2.0);
        let b = Vector2::new(0.25, 4.0);
        assert!((a.perp_dot(b) + b.perp_dot(a)).abs() < EPS);
        assert!((Vector2::X.perp_dot(Vector2::Y) - 1.0).abs() < EPS);
    }

    #[test]
    fn project_onto_axis() {
        let v = Vector2::new(2.0, 3.0);
        let p = v.project_onto(Vector2::new(4.0, 0.0)).unwrap();
        assert!((p.x - 2.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn project_onto_zero_axis_fails() {
        let v = Vector2::new(2.0, 3.0);
        assert_eq!(v.project_onto(Vector2::ZERO), Err(PhysicsError::DegenerateAxis));
    }

    #[test]
    fn distance_between_points() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert!((a.distance_to(b) - 5.0).abs() < EPS);
    }

    #[test]
    fn casts_to_bytes() {
        let corners = [Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&corners);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
