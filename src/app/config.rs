//! Configuration for the drawing tool

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Brush, Color, DEFAULT_GLYPH, MAX_AREA};

/// Drawing tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas size, fixed for the whole session
    pub canvas: CanvasConfig,
    /// Brush a new session starts with
    pub brush: BrushConfig,
    /// Display settings
    pub display: DisplayConfig,
    /// Save/load settings
    pub persistence: PersistenceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            brush: BrushConfig::default(),
            display: DisplayConfig::default(),
            persistence: PersistenceConfig::default(),
        }
    }
}

/// Canvas configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width in columns
    pub width: usize,
    /// Height in rows
    pub height: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 15,
        }
    }
}

/// Starting brush
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub glyph: char,
    pub color: Color,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            glyph: DEFAULT_GLYPH,
            color: Color::Default,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Paint glyphs with ANSI colors
    pub ansi_colors: bool,
    /// Redraw the canvas after every drawing command
    pub show_after_draw: bool,
    /// Print the column ruler and row numbers
    pub ruler: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            ansi_colors: true,
            show_after_draw: true,
            ruler: true,
        }
    }
}

/// Persistence configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Append the color section when saving
    pub save_colors: bool,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from the default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/mochi-paint/config.json
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must be at least 1 x 1, got {} x {}",
                self.canvas.width, self.canvas.height
            )));
        }
        let area = self.canvas.width.checked_mul(self.canvas.height);
        if area.map_or(true, |area| area > MAX_AREA) {
            return Err(ConfigError::Invalid(format!(
                "canvas {} x {} exceeds {MAX_AREA} cells",
                self.canvas.width, self.canvas.height
            )));
        }
        Brush::parse_glyph(&self.brush.glyph.to_string())
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// The brush a session starts with
    pub fn initial_brush(&self) -> Brush {
        Brush::new(self.brush.glyph, self.brush.color)
    }
}

/// Path of the default configuration file
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("mochi-paint")
            .join("config.json")
    })
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
