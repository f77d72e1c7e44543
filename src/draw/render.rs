//! Cairo-based rendering for the canvas side of a photo.

use super::color::{Color, WHITE};
use super::font::FontDescriptor;
use crate::annotation::StrokeSequence;
use crate::layout::LaidOutLine;

/// Fills the blank canvas shown on the back of a photo.
pub fn render_canvas(ctx: &cairo::Context, width: i32, height: i32) {
    WHITE.apply(ctx);
    ctx.rectangle(0.0, 0.0, width as f64, height as f64);
    let _ = ctx.fill();
}

/// Draws every stroke segment; pen-up breaks leave gaps.
pub fn render_strokes(ctx: &cairo::Context, strokes: &StrokeSequence) {
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    for segment in strokes.segments() {
        segment.style.color.apply(ctx);
        ctx.set_line_width(segment.style.thickness);
        ctx.move_to(segment.from.x as f64, segment.from.y as f64);
        ctx.line_to(segment.to.x as f64, segment.to.y as f64);
        let _ = ctx.stroke();
    }
}

/// Draws laid-out text lines using each line's own color and font.
pub fn render_text_lines<'a>(ctx: &cairo::Context, lines: impl IntoIterator<Item = LaidOutLine<'a>>) {
    for line in lines {
        render_text(
            ctx,
            line.x,
            line.y,
            &line.text,
            line.annotation.color,
            &line.annotation.font,
        );
    }
}

/// Renders a single line of text with its baseline at `(x, y)` using Pango.
pub fn render_text(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
    font: &FontDescriptor,
) {
    // Keep antialias and source settings from leaking into stroke rendering
    let _ = ctx.save();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font.to_pango()));
    layout.set_text(text);

    // Pango positions from the top-left; shift so y is the baseline
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(x as f64, y as f64 - baseline);
    color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    let _ = ctx.restore();
}
