//! Text formatting for rotation values
//!
//! Each value becomes one or more lines of fixed-width numbers, followed by a
//! `: label` suffix so columns from different rows line up.

use rot3d_math::{Mat4, Quaternion, Vec3};

use crate::config::DisplayConfig;

/// Formats numbers with a fixed width and precision
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    width: usize,
    precision: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for Formatter {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            width: display.column_width,
            precision: display.precision,
        }
    }
}

impl Formatter {
    /// A single number
    pub fn number(&self, value: f32) -> String {
        format!("{:>w$.p$}", value, w = self.width, p = self.precision)
    }

    fn row(&self, values: &[f32]) -> String {
        values
            .iter()
            .map(|&v| self.number(v))
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// `x  y  z  w   : label`
    pub fn quaternion_line(&self, q: Quaternion, label: &str) -> String {
        format!("{}   : {}", self.row(&[q.x, q.y, q.z, q.w]), label)
    }

    /// `x  y  z   : label`
    pub fn vector_line(&self, v: Vec3, label: &str) -> String {
        format!("{}   : {}", self.row(&[v.x, v.y, v.z]), label)
    }

    /// `value   : label`
    pub fn scalar_line(&self, value: f32, label: &str) -> String {
        format!("{}   : {}", self.number(value), label)
    }

    /// Label line followed by the four matrix rows
    pub fn matrix_block(&self, m: Mat4, label: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(5);
        lines.push(label.to_string());
        lines.extend(m.iter().map(|r| self.row(r)));
        lines
    }
}
