//! Quaternion interpolation
//!
//! [`slerp`] moves along the shorter great arc between two orientations at
//! constant angular velocity. [`nlerp`] is the cheaper normalized linear blend
//! it falls back to when the two inputs are almost the same orientation.

use crate::Quaternion;

/// Above this dot product SLERP switches to [`nlerp`], where `sin(θ)` is too
/// close to zero to divide by
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// Normalized linear interpolation of the four components
pub fn nlerp(q0: Quaternion, q1: Quaternion, t: f32) -> Quaternion {
    (q0 * (1.0 - t) + q1 * t).normalize()
}

/// Spherical linear interpolation between two unit quaternions
///
/// `t` runs from 0 (`q0`) to 1 (`q1`). When the inputs lie in opposite
/// hemispheres `q1` is negated first, since `q` and `-q` are the same rotation.
/// The endpoint at `t = 1` may therefore come back as `-q1`.
pub fn slerp(q0: Quaternion, q1: Quaternion, t: f32) -> Quaternion {
    let mut dot = q0.dot(&q1);
    let mut q1 = q1;

    // Shortest path
    if dot < 0.0 {
        q1 = -q1;
        dot = -dot;
    }

    let dot = dot.clamp(-1.0, 1.0);

    if dot > SLERP_LINEAR_THRESHOLD {
        return nlerp(q0, q1, t);
    }

    let theta0 = dot.acos();
    let sin_theta0 = theta0.sin();
    let s0 = ((1.0 - t) * theta0).sin() / sin_theta0;
    let s1 = (t * theta0).sin() / sin_theta0;

    (q0 * s0 + q1 * s1).normalize()
}
