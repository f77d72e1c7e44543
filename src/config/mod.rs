//! Configuration file support for photomark.
//!
//! Settings are read from `~/.config/photomark/config.toml` (or an explicit path)
//! and cover drawing defaults and double-click/commit-key behavior. If no config
//! file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{DrawingConfig, InputConfig};

use crate::annotation::DrawingAttributes;
use crate::draw::FontDescriptor;
use crate::input::ClickCounter;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// stroke_thickness = 2.0
/// font_family = "Serif"
/// font_size = 18.0
///
/// [input]
/// double_click_ms = 400
/// commit_key = "return"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Ink color, stroke width and font for new annotations
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Double-click and keyboard behavior
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `stroke_thickness`: 1.0 - 20.0
    /// - `font_size`: 8.0 - 72.0
    /// - `double_click_ms`: 100 - 2000
    /// - `double_click_slop`: 0 - 50
    fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.stroke_thickness) {
            warn!(
                "Invalid stroke_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_thickness
            );
            self.drawing.stroke_thickness = self.drawing.stroke_thickness.clamp(1.0, 20.0);
        }

        if !(8.0..=72.0).contains(&self.drawing.font_size) {
            warn!(
                "Invalid font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.font_size
            );
            self.drawing.font_size = self.drawing.font_size.clamp(8.0, 72.0);
        }

        if !(100..=2000).contains(&self.input.double_click_ms) {
            warn!(
                "Invalid double_click_ms {}, clamping to 100-2000 range",
                self.input.double_click_ms
            );
            self.input.double_click_ms = self.input.double_click_ms.clamp(100, 2000);
        }

        if !(0..=50).contains(&self.input.double_click_slop) {
            warn!(
                "Invalid double_click_slop {}, clamping to 0-50 range",
                self.input.double_click_slop
            );
            self.input.double_click_slop = self.input.double_click_slop.clamp(0, 50);
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("photomark");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema of the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Drawing attributes every newly opened photo starts with.
    pub fn drawing_attributes(&self) -> DrawingAttributes {
        DrawingAttributes {
            color: self.drawing.default_color.to_color(),
            font: FontDescriptor::new(
                self.drawing.font_family.clone(),
                self.drawing.font_size,
                self.drawing.font_weight.clone(),
                self.drawing.font_style.clone(),
            ),
            stroke_thickness: self.drawing.stroke_thickness,
        }
    }

    /// Click counter using the configured double-click threshold and slop.
    pub fn click_counter(&self) -> ClickCounter {
        ClickCounter::new(
            Duration::from_millis(self.input.double_click_ms),
            self.input.double_click_slop,
        )
    }
}
