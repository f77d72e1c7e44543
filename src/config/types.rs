//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::CommitKey;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing defaults applied to every newly opened photo.
///
/// Users can change color and font at runtime; existing annotations keep the
/// attributes they were created with.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default ink color - either a named color (red, green, blue, yellow, orange,
    /// pink, gray, white, black) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_thickness")]
    pub stroke_thickness: f64,

    /// Font family for text annotations (e.g., "Sans", "Serif", "Pristina")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Font weight (e.g., "normal", "bold", "light", or 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style ("normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            stroke_thickness: default_stroke_thickness(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Pointer and keyboard behavior.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Maximum delay between two presses of a double-click in milliseconds
    /// (valid range: 100 - 2000)
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,

    /// Maximum pointer travel between the two presses in pixels (valid range: 0 - 50)
    #[serde(default = "default_double_click_slop")]
    pub double_click_slop: i32,

    /// Key that finishes the current text block (return, escape, tab)
    #[serde(default = "default_commit_key")]
    pub commit_key: CommitKey,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            double_click_ms: default_double_click_ms(),
            double_click_slop: default_double_click_slop(),
            commit_key: default_commit_key(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_thickness() -> f64 {
    2.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_size() -> f64 {
    16.0
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_double_click_ms() -> u64 {
    400
}

fn default_double_click_slop() -> i32 {
    4
}

fn default_commit_key() -> CommitKey {
    CommitKey::Return
}
