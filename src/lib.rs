//! Rot3D - 3D rotation explorer
//!
//! Loads inputs from configuration, runs them through [`rot3d_math`], and
//! formats the results as text.

pub mod config;
pub mod report;
pub mod scenario;
