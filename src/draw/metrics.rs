//! Font metrics providers used by the text layout engine.

use super::font::FontDescriptor;

/// Measures rendered text for a font.
///
/// Widths and heights are whole pixels. Implementations must be deterministic
/// for a given font and string so layout can be recomputed every frame.
pub trait FontMetrics {
    /// Rendered width of `text` in pixels.
    fn string_width(&self, font: &FontDescriptor, text: &str) -> i32;

    /// Distance between consecutive baselines in pixels.
    fn line_height(&self, font: &FontDescriptor) -> i32;
}

/// Fixed-advance metrics: every character is `advance` pixels wide.
///
/// Ignores the font entirely, which makes wrap points easy to predict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    pub advance: i32,
    pub line_height: i32,
}

impl MonospaceMetrics {
    pub fn new(advance: i32, line_height: i32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl FontMetrics for MonospaceMetrics {
    fn string_width(&self, _font: &FontDescriptor, text: &str) -> i32 {
        text.chars().count() as i32 * self.advance
    }

    fn line_height(&self, _font: &FontDescriptor) -> i32 {
        self.line_height
    }
}

/// Pango-backed metrics measured on an offscreen 1x1 surface.
pub struct PangoMetrics {
    layout: pango::Layout,
}

impl PangoMetrics {
    pub fn new() -> Result<Self, cairo::Error> {
        // A tiny image surface is enough; only the layout is used.
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1)?;
        let ctx = cairo::Context::new(&surface)?;
        ctx.set_antialias(cairo::Antialias::Best);
        Ok(Self {
            layout: pangocairo::functions::create_layout(&ctx),
        })
    }
}

impl FontMetrics for PangoMetrics {
    fn string_width(&self, font: &FontDescriptor, text: &str) -> i32 {
        self.layout.set_font_description(Some(&font.to_pango()));
        self.layout.set_text(text);
        self.layout.pixel_size().0
    }

    fn line_height(&self, font: &FontDescriptor) -> i32 {
        // Logical height of one laid-out line, leading included
        self.layout.set_font_description(Some(&font.to_pango()));
        self.layout.set_text("Xg");
        self.layout.pixel_size().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_counts_chars_not_bytes() {
        let metrics = MonospaceMetrics::new(10, 20);
        let font = FontDescriptor::default();
        assert_eq!(metrics.string_width(&font, "héllo"), 50);
        assert_eq!(metrics.line_height(&font), 20);
    }

    #[test]
    fn pango_widths_grow_with_text() {
        let metrics = PangoMetrics::new().expect("offscreen surface");
        let font = FontDescriptor::default();
        let short = metrics.string_width(&font, "ab");
        let long = metrics.string_width(&font, "abcdefgh");
        assert!(long > short);
        assert!(metrics.line_height(&font) > 0);
    }

    #[test]
    fn pango_line_height_covers_the_font_size() {
        let metrics = PangoMetrics::new().expect("offscreen surface");
        let small = FontDescriptor::new("Sans", 12.0, "normal", "normal");
        let large = FontDescriptor::new("Sans", 36.0, "normal", "normal");
        assert!(metrics.line_height(&large) > metrics.line_height(&small));
        assert!(metrics.line_height(&large) >= 36);
    }
}
