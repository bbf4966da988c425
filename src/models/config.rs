use map_dither::{Color, Palette};
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "POSTER_WALL_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Hex colors replacing the reference map palette, in match order
    #[serde(default)]
    pub palette: Option<Vec<String>>,

    /// Edge length of one display frame in pixels
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Pad color for edge tiles that extend past the image
    #[serde(default = "default_fill")]
    pub fill: String,
}

fn default_tile_size() -> u32 {
    128
}

fn default_fill() -> String {
    "#000000".to_string()
}

impl AppConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// A file that cannot be read or parsed falls back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        custom_palette = config.palette.is_some(),
                        tile_size = config.tile_size,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Build the active palette.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        match &self.palette {
            Some(colors) => Ok(Palette::from_hex(colors)?),
            None => Ok(Palette::map_colors()),
        }
    }

    pub fn fill_color(&self) -> Result<Color, ConfigError> {
        self.fill.parse().map_err(|e: map_dither::ParseColorError| ConfigError::Fill {
            value: self.fill.clone(),
            reason: e.to_string(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: None,
            tile_size: default_tile_size(),
            fill: default_fill(),
        }
    }
}
