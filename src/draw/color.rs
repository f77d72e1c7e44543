//! RGBA color type and the named palette offered by the color menu.

/// Represents an RGBA color with floating-point components in 0.0..=1.0.
///
/// # Examples
///
/// ```
/// use photomark::draw::Color;
/// let ink = Color::rgb(0.2, 0.2, 0.8);
/// assert_eq!(ink.a, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Creates an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Sets this color as the source of the given cairo context.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
pub const PINK: Color = Color::rgb(1.0, 0.0, 1.0);
pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
/// Default ink for both strokes and text.
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
