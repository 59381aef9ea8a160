//! Application configuration module
//!
//! Per-panel initial map views and UI settings, persisted as RON in the
//! OS config directory.

mod manager;

pub use manager::{ConfigError, ConfigManager};

use serde::{Deserialize, Serialize};

/// Initial viewport for one map panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapViewConfig {
    /// Center longitude in degrees
    pub lon: f64,
    /// Center latitude in degrees
    pub lat: f64,
    /// Slippy-map zoom level
    pub zoom: f64,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            lon: 0.0,
            lat: 0.0,
            zoom: 2.0,
        }
    }
}

fn drawing_view_default() -> MapViewConfig {
    MapViewConfig {
        lon: 76.78,
        lat: 18.83,
        zoom: 6.0,
    }
}

fn measure_view_default() -> MapViewConfig {
    MapViewConfig {
        lon: -98.82,
        lat: 38.11,
        zoom: 10.0,
    }
}

/// UI theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UiTheme {
    #[default]
    Dark,
    Light,
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UiConfig {
    /// UI theme
    #[serde(default)]
    pub theme: UiTheme,
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// Initial view of the drawing panel
    #[serde(default = "drawing_view_default")]
    pub drawing: MapViewConfig,
    /// Initial view of the measuring panel
    #[serde(default = "measure_view_default")]
    pub measure: MapViewConfig,
    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 0,
            drawing: drawing_view_default(),
            measure: measure_view_default(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrips_through_ron() {
        let mut config = AppConfig::new();
        config.measure.zoom = 12.0;
        config.ui.theme = UiTheme::Light;

        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let back: AppConfig = ron::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: AppConfig = ron::from_str("(version: 1)").unwrap();
        assert_eq!(config.drawing, drawing_view_default());
        assert_eq!(config.measure, measure_view_default());
        assert_eq!(config.ui.theme, UiTheme::Dark);
    }
}
