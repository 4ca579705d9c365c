//! Quaternion for representing rotations in 3D space
//!
//! A quaternion `w + xi + yj + zk` is stored as (x, y, z, w): the vector part
//! first, the scalar last. Only unit quaternions represent rotations, and the
//! type does not enforce that. Callers normalize where it matters.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use crate::Vec3;

/// Quaternion with vector part (x, y, z) and scalar part w
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Quaternion
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Identity quaternion (no rotation)
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a rotation of `angle` radians about `axis`
    ///
    /// The result is `(axis * sin(θ/2), cos(θ/2))`. `axis` must already be
    /// unit length; it is not normalized here.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let sin_h = half.sin();
        Self::new(axis.x * sin_h, axis.y * sin_h, axis.z * sin_h, half.cos())
    }

    /// Pure quaternion `(v, 0)`
    #[inline]
    pub const fn from_vector(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Vector part (x, y, z)
    #[inline]
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Hamilton product `self * rhs`
    ///
    /// Not commutative. As a rotation, `rhs` is applied first, then `self`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let l = self;
        let r = rhs;
        Self {
            x: l.w * r.x + l.x * r.w + l.y * r.z - l.z * r.y,
            y: l.w * r.y - l.x * r.z + l.y * r.w + l.z * r.x,
            z: l.w * r.z + l.x * r.y - l.y * r.x + l.z * r.w,
            w: l.w * r.w - l.x * r.x - l.y * r.y - l.z * r.z,
        }
    }

    /// Conjugate: vector part negated
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Four-component dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared norm
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Norm `sqrt(x² + y² + z² + w²)`
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit norm
    ///
    /// A quaternion with norm exactly zero yields [`Quaternion::IDENTITY`].
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            return Self::IDENTITY;
        }
        Self::new(self.x / n, self.y / n, self.z / n, self.w / n)
    }

    /// Multiplicative inverse `conjugate / norm²`
    ///
    /// A quaternion with norm exactly zero yields [`Quaternion::IDENTITY`].
    /// For unit quaternions this equals [`Quaternion::conjugate`].
    pub fn inverse(&self) -> Self {
        let norm_sq = self.norm_squared();
        if norm_sq == 0.0 {
            return Self::IDENTITY;
        }
        let c = self.conjugate();
        Self::new(c.x / norm_sq, c.y / norm_sq, c.z / norm_sq, c.w / norm_sq)
    }

    /// Rotate a vector with the sandwich product `q * (v, 0) * q*`
    ///
    /// `self` must be a unit quaternion; otherwise the result is also scaled
    /// by the squared norm.
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        let p = Self::from_vector(v);
        self.multiply(&p).multiply(&self.conjugate()).vector()
    }
}

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        bytemuck::cast(a)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        bytemuck::cast(q)
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w + other.w)
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn quat_approx_eq(a: Quaternion, b: Quaternion) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_identity() {
        assert_eq!(Quaternion::identity(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_multiply_known_values() {
        let q1 = Quaternion::new(2.0, 3.0, 4.0, 1.0);
        let q2 = Quaternion::new(1.0, 3.0, 5.0, 2.0);
        assert_eq!(q1.multiply(&q2), Quaternion::new(8.0, 3.0, 16.0, -29.0));
        assert_eq!(q2.multiply(&q1), Quaternion::new(2.0, 15.0, 10.0, -29.0));
    }

    #[test]
    fn test_multiply_not_commutative() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
    }

    #[test]
    fn test_multiply_identity() {
        let q = Quaternion::new(2.0, 3.0, 4.0, 1.0);
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
    }

    #[test]
    fn test_conjugate() {
        let q = Quaternion::new(2.0, 3.0, 4.0, 1.0);
        assert_eq!(q.conjugate(), Quaternion::new(-2.0, -3.0, -4.0, 1.0));
    }

    #[test]
    fn test_norm() {
        let q = Quaternion::new(2.0, 3.0, 4.0, 1.0);
        assert!(approx_eq(q.norm(), 30.0f32.sqrt()));
    }

    #[test]
    fn test_normalize() {
        let q = Quaternion::new(2.0, 3.0, 4.0, 1.0).normalize();
        assert!(approx_eq(q.norm(), 1.0));
        assert!(approx_eq(q.w, 1.0 / 30.0f32.sqrt()));
    }

    #[test]
    fn test_normalize_zero_is_identity() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_inverse() {
        let q = Quaternion::new(2.0, 3.0, 4.0, 1.0);
        let inv = q.inverse();
        assert!(quat_approx_eq(inv, Quaternion::new(-2.0 / 30.0, -0.1, -4.0 / 30.0, 1.0 / 30.0)));
        assert!(quat_approx_eq(q * inv, Quaternion::IDENTITY));
        assert!(quat_approx_eq(inv * q, Quaternion::IDENTITY));
    }

    #[test]
    fn test_inverse_zero_is_identity() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.inverse(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_inverse_of_unit_is_conjugate() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 1.1);
        assert!(quat_approx_eq(q.inverse(), q.conjugate()));
    }

    #[test]
    fn test_from_axis_angle() {
        let q = Quaternion::from_axis_angle(Vec3::Z, PI / 2.0);
        let h = (PI / 4.0).sin();
        assert!(quat_approx_eq(q, Quaternion::new(0.0, 0.0, h, h)));
        assert!(approx_eq(q.norm(), 1.0));
    }

    #[test]
    fn test_rotate_vector_z_90() {
        let q = Quaternion::from_axis_angle(Vec3::Z, PI / 2.0);
        let rotated = q.rotate_vector(Vec3::X);
        assert!(vec_approx_eq(rotated, Vec3::Y), "Expected Y, got {:?}", rotated);
    }

    #[test]
    fn test_rotate_vector_x_90() {
        let q = Quaternion::from_axis_angle(Vec3::X, PI / 2.0);
        let rotated = q.rotate_vector(Vec3::Y);
        assert!(vec_approx_eq(rotated, Vec3::Z), "Expected Z, got {:?}", rotated);
    }

    #[test]
    fn test_rotate_vector_preserves_length() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 1.0).normalized(), 1.23);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(approx_eq(q.rotate_vector(v).length(), v.length()));
    }

    #[test]
    fn test_compose_rotations() {
        // rhs is applied first
        let a = Quaternion::from_axis_angle(Vec3::Z, PI / 2.0);
        let b = Quaternion::from_axis_angle(Vec3::X, PI / 2.0);
        let v = Vec3::Y;
        let composed = (a * b).rotate_vector(v);
        let sequential = a.rotate_vector(b.rotate_vector(v));
        assert!(vec_approx_eq(composed, sequential));
    }

    #[test]
    fn test_array_conversion() {
        let q: Quaternion = [1.0, 2.0, 3.0, 4.0].into();
        assert_eq!(q.w, 4.0);
        let a: [f32; 4] = q.into();
        assert_eq!(a, [1.0, 2.0, 3.0, 4.0]);
    }
}
