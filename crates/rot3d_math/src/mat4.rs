//! 4x4 rotation matrices
//!
//! Matrices are row-major and vectors are row vectors: `v' = v * M`. Only the
//! upper-left 3x3 block carries the rotation. The last row and column stay at
//! the homogeneous identity (0, 0, 0, 1) because nothing here introduces a
//! translation.

use crate::{Quaternion, Vec3};

/// 4x4 matrix type (row-major, `m[row][col]`)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Below this cosine two directions count as antiparallel in
/// [`direction_to_direction`]
pub const ANTIPARALLEL_COS: f32 = -0.9999;

/// Rodrigues matrix from a unit axis and the cosine/sine of the angle
fn rodrigues(axis: Vec3, c: f32, s: f32) -> Mat4 {
    let Vec3 { x, y, z } = axis;
    let t = 1.0 - c;

    [
        [t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0],
        [t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0],
        [t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation of `angle` radians about `axis` (Rodrigues' formula)
///
/// `axis` must be unit length; it is not normalized here.
///
/// # Example
/// ```
/// use rot3d_math::{mat4, Vec3};
/// let m = mat4::rotate_axis_angle(Vec3::Z, std::f32::consts::FRAC_PI_2);
/// let v = mat4::transform(Vec3::X, m);
/// assert!((v.y - 1.0).abs() < 1e-6);
/// ```
pub fn rotate_axis_angle(axis: Vec3, angle: f32) -> Mat4 {
    rodrigues(axis, angle.cos(), angle.sin())
}

/// Rotation matrix equivalent to a unit quaternion
///
/// `q` is used as given. A non-unit quaternion produces a scaled,
/// non-orthonormal matrix, so normalize first when in doubt.
pub fn from_quaternion(q: Quaternion) -> Mat4 {
    let Quaternion { x, y, z, w } = q;
    let (xx, yy, zz, ww) = (x * x, y * y, z * z, w * w);

    [
        [ww + xx - yy - zz, 2.0 * (x * y + w * z), 2.0 * (x * z - w * y), 0.0],
        [2.0 * (x * y - w * z), ww - xx + yy - zz, 2.0 * (y * z + w * x), 0.0],
        [2.0 * (x * z + w * y), 2.0 * (y * z - w * x), ww - xx - yy + zz, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Minimal rotation taking direction `from` onto direction `to`
///
/// Both inputs are normalized first. When they are nearly opposite the cross
/// product is unusable, so the rotation becomes an exact 180° turn about an
/// axis orthogonal to `from`, built from the world axis along which `from`
/// has its smallest component.
pub fn direction_to_direction(from: Vec3, to: Vec3) -> Mat4 {
    let u = from.normalized();
    let v = to.normalized();

    let cross = u.cross(v);
    let cos_theta = u.dot(v);

    if cos_theta < ANTIPARALLEL_COS {
        let a = u.abs();
        let ortho = if a.x < a.y && a.x < a.z {
            Vec3::X
        } else if a.y < a.z {
            Vec3::Y
        } else {
            Vec3::Z
        };
        let axis = u.cross(ortho).normalized();
        return rodrigues(axis, -1.0, 0.0);
    }

    rodrigues(cross.normalized(), cos_theta, cross.length())
}

/// Transform a vector by the rotation block of `m`: `v' = v * M`
pub fn transform(v: Vec3, m: Mat4) -> Vec3 {
    Vec3::new(
        v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
        v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
        v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
    )
}

/// Multiply two 4x4 matrices: result = a * b
///
/// With row vectors this applies `a` first, then `b`.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    result
}

/// Transpose a matrix
///
/// For a pure rotation this is its inverse.
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}
