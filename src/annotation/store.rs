//! Per-photo annotation store.

use super::Point;
use super::strokes::{StrokeSequence, StrokeStyle};
use crate::draw::{Color, FontDescriptor};
use crate::error::AnnotationError;
use crate::util;
use log::debug;

/// Callback invoked synchronously after every mutation.
///
/// The shell typically schedules a repaint of the photo widget here.
pub type RepaintHook = Box<dyn FnMut()>;

/// Attributes applied to annotations created from now on.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingAttributes {
    pub color: Color,
    pub font: FontDescriptor,
    pub stroke_thickness: f64,
}

impl Default for DrawingAttributes {
    fn default() -> Self {
        Self {
            color: Color::default(),
            font: FontDescriptor::default(),
            stroke_thickness: StrokeStyle::default().thickness,
        }
    }
}

/// A text block anchored where the user clicked before typing.
///
/// Color and font are captured at creation so later attribute changes
/// never restyle it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    pub anchor: Point,
    pub text: String,
    pub color: Color,
    pub font: FontDescriptor,
}

/// Canonical annotation state for one open photo.
///
/// Holds the shared stroke sequence, the ordered text records (insertion order
/// preserved, anchors may repeat), and the drawing attributes. Nothing is ever
/// deleted; the store is dropped together with its photo.
pub struct AnnotationStore {
    strokes: StrokeSequence,
    texts: Vec<TextAnnotation>,
    /// Index into `texts` of the block currently receiving characters
    open_text: Option<usize>,
    attributes: DrawingAttributes,
    repaint: Option<RepaintHook>,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new(DrawingAttributes::default())
    }
}

impl std::fmt::Debug for AnnotationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationStore")
            .field("strokes", &self.strokes)
            .field("texts", &self.texts)
            .field("open_text", &self.open_text)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

impl AnnotationStore {
    /// Creates an empty store using `attributes` for the first annotations.
    pub fn new(attributes: DrawingAttributes) -> Self {
        Self {
            strokes: StrokeSequence::new(),
            texts: Vec::new(),
            open_text: None,
            attributes,
            repaint: None,
        }
    }

    /// Installs the callback fired after every mutation, replacing any previous one.
    pub fn set_repaint_hook(&mut self, hook: RepaintHook) {
        self.repaint = Some(hook);
    }

    /// Fires the repaint hook without mutating annotations.
    ///
    /// Used by the frame composer when the visible side changes.
    pub fn request_repaint(&mut self) {
        if let Some(hook) = self.repaint.as_mut() {
            hook();
        }
    }

    pub fn strokes(&self) -> &StrokeSequence {
        &self.strokes
    }

    /// Every text record in the order blocks were started, the open one included.
    pub fn text_annotations(&self) -> &[TextAnnotation] {
        &self.texts
    }

    /// The block currently receiving characters, if any.
    pub fn open_text_block(&self) -> Option<&TextAnnotation> {
        self.open_text.map(|i| &self.texts[i])
    }

    pub fn attributes(&self) -> &DrawingAttributes {
        &self.attributes
    }

    // ------------------------------------------------------------------
    // Strokes
    // ------------------------------------------------------------------

    pub fn begin_stroke(&mut self) -> Result<(), AnnotationError> {
        let style = StrokeStyle {
            color: self.attributes.color,
            thickness: self.attributes.stroke_thickness,
        };
        self.strokes.begin(style)?;
        debug!("Stroke {} started", self.strokes.stroke_count());
        self.request_repaint();
        Ok(())
    }

    pub fn add_stroke_point(&mut self, point: Point) -> Result<(), AnnotationError> {
        self.strokes.push(point)?;
        self.request_repaint();
        Ok(())
    }

    /// Closes the open stroke by appending a break marker.
    pub fn end_stroke(&mut self) -> Result<(), AnnotationError> {
        self.strokes.end()?;
        debug!("Stroke {} ended", self.strokes.stroke_count());
        self.request_repaint();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Text blocks
    // ------------------------------------------------------------------

    /// Starts a new, empty text block at `anchor` with the active color and font.
    pub fn begin_text_block(&mut self, anchor: Point) -> Result<(), AnnotationError> {
        if self.open_text.is_some() {
            return Err(AnnotationError::InvalidState("text block already open"));
        }
        self.texts.push(TextAnnotation {
            anchor,
            text: String::new(),
            color: self.attributes.color,
            font: self.attributes.font.clone(),
        });
        self.open_text = Some(self.texts.len() - 1);
        debug!("Text block {} started at ({}, {})", self.texts.len(), anchor.x, anchor.y);
        self.request_repaint();
        Ok(())
    }

    /// Appends a printable character to the open block.
    ///
    /// Control keys are filtered before reaching the store; `c` is stored verbatim.
    pub fn append_char(&mut self, c: char) -> Result<(), AnnotationError> {
        let index = self
            .open_text
            .ok_or(AnnotationError::InvalidState("no open text block"))?;
        self.texts[index].text.push(c);
        self.request_repaint();
        Ok(())
    }

    /// Closes the open block. Does nothing when no block is open.
    pub fn end_text_block(&mut self) {
        if let Some(index) = self.open_text.take() {
            debug!(
                "Text block {} closed with {} chars",
                index + 1,
                self.texts[index].text.chars().count()
            );
            self.request_repaint();
        }
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    /// Changes the color used by annotations created afterwards.
    pub fn set_draw_color(&mut self, color: Color) {
        debug!("Draw color set to {}", util::color_to_name(&color));
        self.attributes.color = color;
        self.request_repaint();
    }

    /// Changes the font used by text blocks created afterwards.
    pub fn set_draw_font(&mut self, font: FontDescriptor) {
        debug!("Draw font set to '{}'", font.to_pango_string());
        self.attributes.font = font;
        self.request_repaint();
    }

    pub fn set_stroke_thickness(&mut self, thickness: f64) {
        self.attributes.stroke_thickness = thickness;
        self.request_repaint();
    }
}
