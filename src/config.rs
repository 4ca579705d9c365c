//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ROT3D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Number formatting
    #[serde(default)]
    pub display: DisplayConfig,
    /// Quaternion primitive operands
    #[serde(default)]
    pub quaternion: QuaternionConfig,
    /// Axis-angle rotation scenario
    #[serde(default)]
    pub axis_angle: AxisAngleConfig,
    /// Direction-to-direction scenario
    #[serde(default)]
    pub direction: DirectionConfig,
    /// SLERP scenario
    #[serde(default)]
    pub interpolation: InterpolationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ROT3D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // ROT3D_DISPLAY__PRECISION=3 -> display.precision = 3
        figment = figment.merge(Env::prefixed("ROT3D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Number formatting for the text report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Digits after the decimal point
    pub precision: usize,
    /// Minimum field width per component
    pub column_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            column_width: 6,
        }
    }
}

/// Operands for the quaternion primitives, as [x, y, z, w]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuaternionConfig {
    pub q1: [f32; 4],
    pub q2: [f32; 4],
}

impl Default for QuaternionConfig {
    fn default() -> Self {
        Self {
            q1: [2.0, 3.0, 4.0, 1.0],
            q2: [1.0, 3.0, 5.0, 2.0],
        }
    }
}

/// Axis-angle scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisAngleConfig {
    /// Rotation axis [x, y, z], normalized before use
    pub axis: [f32; 3],
    /// Angle in radians
    pub angle: f32,
    /// Vector to rotate [x, y, z]
    pub probe: [f32; 3],
}

impl Default for AxisAngleConfig {
    fn default() -> Self {
        Self {
            axis: [1.0, 1.0, 1.0],
            angle: 0.44,
            probe: [1.0, 0.0, 0.0],
        }
    }
}

/// Direction-to-direction scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionConfig {
    pub from: [f32; 3],
    pub to: [f32; 3],
}

impl Default for DirectionConfig {
    fn default() -> Self {
        Self {
            from: [1.0, 0.0, 0.0],
            to: [-1.0, 0.0, 0.0],
        }
    }
}

/// SLERP scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// Start orientation [x, y, z, w]
    pub from: [f32; 4],
    /// End orientation [x, y, z, w]
    pub to: [f32; 4],
    /// Samples including both endpoints (at least 2)
    pub steps: u32,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        let h = std::f32::consts::FRAC_1_SQRT_2;
        Self {
            from: [0.0, 0.0, 0.0, 1.0],
            // 90° about Z
            to: [0.0, 0.0, h, h],
            steps: 5,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.display.precision, 2);
        assert_eq!(config.quaternion.q1, [2.0, 3.0, 4.0, 1.0]);
        assert_eq!(config.axis_angle.angle, 0.44);
        assert_eq!(config.interpolation.steps, 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("precision"));
        assert!(toml.contains("log_level"));
        assert!(toml.contains("[axis_angle]"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("[display]\nprecision = 4\ncolumn_width = 9\n").unwrap();
        assert_eq!(config.display.precision, 4);
        assert_eq!(config.direction.to, [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::from(figment::Error::from("bad value".to_string()));
        let msg = format!("{}", err);
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("bad value"));
    }
}
