//! Configuration system

pub use serde::{Deserialize, Serialize};

use crate::render::SeverityPolicy;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Native window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Default window width in pixels, used by [`Window::open_default`]
    ///
    /// [`Window::open_default`]: crate::render::Window::open_default
    pub width: u32,
    /// Default window height in pixels
    pub height: u32,
    /// Pace buffer swaps to the display refresh rate
    pub vsync: bool,
    /// Multisample anti-aliasing sample count
    pub msaa_samples: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            vsync: true,
            msaa_samples: 4,
        }
    }
}

/// Camera projection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 1.0,
            far: 10_000.0,
        }
    }
}

/// Top-level viewer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Window settings
    pub window: WindowSettings,
    /// Camera settings
    pub camera: CameraSettings,
    /// How high-severity OpenGL debug messages are handled
    pub debug_policy: SeverityPolicy,
}

impl Config for ViewerConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_viewer_conventions() {
        let config = ViewerConfig::default();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 768);
        assert!(config.window.vsync);
        assert!((config.camera.near - 1.0).abs() < f32::EPSILON);
        assert!((config.camera.far - 10_000.0).abs() < f32::EPSILON);
    }

    #[test]
    fn toml_round_trip() {
        let config = ViewerConfig::default();
        let text = toml::to_string_pretty(&config).expect("serialize");
        let back: ViewerConfig = toml::from_str(&text).expect("parse");
        assert_eq!(back.window.width, config.window.width);
        assert_eq!(back.debug_policy, config.debug_policy);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let back: ViewerConfig = toml::from_str("[window]\nwidth = 640\n").expect("parse");
        assert_eq!(back.window.width, 640);
        assert_eq!(back.window.height, 768);
    }
}
