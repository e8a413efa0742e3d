//! Engine configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::Result;

/// Card dimensions feeding the tetrahedron scale computation.
///
/// The tetrahedron derives its radius and height from these so that its
/// ten-row face template exactly spans the slant height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileMetrics {
    /// Card width in scene units
    pub card_width: f32,
    /// Card height in scene units
    pub card_height: f32,
    /// Spacing between adjacent cards
    pub gap: f32,
}

impl Default for TileMetrics {
    fn default() -> Self {
        Self {
            card_width: 160.0,
            card_height: 220.0,
            gap: 15.0,
        }
    }
}

impl TileMetrics {
    /// Footprint width of one tile including its gap
    pub fn tile_width(&self) -> f32 {
        self.card_width + self.gap
    }

    /// Footprint height of one tile including its gap
    pub fn tile_height(&self) -> f32 {
        self.card_height + self.gap
    }
}

/// Engine configuration: tile metrics plus transition defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub metrics: TileMetrics,
    /// Default transition duration in milliseconds
    pub default_duration_ms: u64,
    /// Easing applied to every per-tile tween
    pub easing: Easing,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            metrics: TileMetrics::default(),
            default_duration_ms: 2000,
            easing: Easing::EaseInOutExpo,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Default transition duration as a [`Duration`]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}
