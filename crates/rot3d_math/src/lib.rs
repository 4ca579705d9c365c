//! 3D Rotation Mathematics
//!
//! This crate provides the vector, quaternion, and matrix types used to build
//! and compare 3D rotations. Every function is pure and total: degenerate
//! inputs get a documented fallback value instead of an error.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Quaternion`] - rotation as a unit quaternion
//! - [`Mat4`] - 4x4 row-major rotation matrix
//!
//! ## Degenerate Inputs
//!
//! - [`Vec3::normalized`] returns [`Vec3::ZERO`] for near-zero vectors
//! - [`Quaternion::normalize`] and [`Quaternion::inverse`] return the identity for a zero quaternion
//! - [`mat4::direction_to_direction`] turns 180° about a chosen orthogonal axis for opposite directions
//! - [`slerp()`] blends linearly for nearly identical orientations

mod vec3;
mod quaternion;
pub mod mat4;
pub mod interpolation;

pub use vec3::{Vec3, NORMALIZE_EPSILON};
pub use quaternion::Quaternion;
pub use mat4::Mat4;
pub use interpolation::{slerp, nlerp};
