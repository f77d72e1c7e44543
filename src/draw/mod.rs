//! Rendering primitives for photos and their annotations (Cairo/Pango-based).
//!
//! - [`Color`]: RGBA color with the named palette
//! - [`FontDescriptor`]: family, size, weight and style of text annotations
//! - [`FontMetrics`]: width/line-height measurement used by the layout engine
//! - [`PhotoSurface`]: the decoded photo painted on the front side
//! - Rendering functions for the canvas side

pub mod color;
pub mod font;
pub mod metrics;
pub mod photo;
pub mod render;

pub use color::Color;
pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
pub use font::FontDescriptor;
pub use metrics::{FontMetrics, MonospaceMetrics, PangoMetrics};
pub use photo::PhotoSurface;
pub use render::{render_canvas, render_strokes, render_text, render_text_lines};
