//! Color name helpers shared by configuration, scripts and logging.

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "gray"/"grey", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "gray" | "grey" => Some(GRAY),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching with a 0.1 tolerance and returns "Custom" for
/// anything outside the palette.
pub fn color_to_name(color: &Color) -> &'static str {
    let near = |v: f64, target: f64| (v - target).abs() < 0.1;
    let palette = [
        (RED, "Red"),
        (GREEN, "Green"),
        (BLUE, "Blue"),
        (YELLOW, "Yellow"),
        (ORANGE, "Orange"),
        (PINK, "Pink"),
        (GRAY, "Gray"),
        (WHITE, "White"),
        (BLACK, "Black"),
    ];
    palette
        .iter()
        .find(|(c, _)| near(color.r, c.r) && near(color.g, c.g) && near(color.b, c.b))
        .map(|(_, name)| *name)
        .unwrap_or("Custom")
}
