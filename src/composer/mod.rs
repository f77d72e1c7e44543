//! Frame composer: the flip state machine that owns a photo's annotations.
//!
//! The composer decides whether the photo (front) or the annotation canvas
//! (back) is shown, routes input to the [`AnnotationStore`] only while the back
//! is visible, and paints the current side on demand.

use crate::annotation::{AnnotationStore, DrawingAttributes, Point, RepaintHook};
use crate::draw::{
    Color, FontDescriptor, FontMetrics, PhotoSurface, render_canvas, render_strokes,
    render_text_lines,
};
use crate::error::AnnotationError;
use crate::input::{CommitKey, InputEvent, Key};
use crate::layout::{self, Lines};
use log::{debug, info};


/// Which side of the photo is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// The photo itself (initial state)
    #[default]
    Front,
    /// Blank canvas carrying strokes and text
    Back,
}

impl Side {
    pub fn flipped(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

/// Horizontal placement of the photo component inside its parent.
///
/// Text wraps against `origin_x + width`; the shell updates this on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin_x: i32,
    pub width: i32,
}

impl Viewport {
    pub fn right_edge(&self) -> i32 {
        self.origin_x + self.width
    }
}

/// Flip state plus the exclusively owned annotation store of one photo.
#[derive(Debug)]
pub struct FrameComposer {
    side: Side,
    store: AnnotationStore,
    viewport: Viewport,
    commit_key: Key,
}

impl FrameComposer {
    /// Creates a composer showing the front side of a photo `width` pixels wide.
    pub fn new(attributes: DrawingAttributes, width: i32, commit_key: CommitKey) -> Self {
        Self {
            side: Side::Front,
            store: AnnotationStore::new(attributes),
            viewport: Viewport { origin_x: 0, width },
            commit_key: commit_key.key(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Key that closes the open text block.
    pub fn commit_key(&self) -> Key {
        self.commit_key
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.store.request_repaint();
        }
    }

    pub fn set_repaint_hook(&mut self, hook: RepaintHook) {
        self.store.set_repaint_hook(hook);
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.store.set_draw_color(color);
    }

    pub fn set_draw_font(&mut self, font: FontDescriptor) {
        self.store.set_draw_font(font);
    }

    pub fn set_stroke_thickness(&mut self, thickness: f64) {
        self.store.set_stroke_thickness(thickness);
    }

    /// Dispatches a generic input event to the matching handler.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), AnnotationError> {
        match event {
            InputEvent::PointerDown { x, y, clicks } => self.on_pointer_down(x, y, clicks),
            InputEvent::PointerDrag { x, y } => self.on_pointer_drag(x, y),
            InputEvent::PointerUp { x, y } => self.on_pointer_up(x, y),
            InputEvent::Key(key) => self.on_key_press(key),
        }
    }

    /// Processes a pointer press.
    ///
    /// # Behavior
    /// - Second click of a double-click: flips the side, no text operation
    /// - Other presses on the back: close the open text block and start a new
    ///   one at the press position
    /// - Other presses on the front: ignored
    pub fn on_pointer_down(&mut self, x: i32, y: i32, clicks: u32) -> Result<(), AnnotationError> {
        if clicks == 2 {
            self.flip()?;
            return Ok(());
        }

        if self.side == Side::Back {
            if self.store.strokes().is_open() {
                self.store.end_stroke()?;
            }
            self.store.end_text_block();
            self.store.begin_text_block(Point::new(x, y))?;
        }
        Ok(())
    }

    /// Processes pointer motion with the button held; extends the current stroke.
    ///
    /// The first drag event of a gesture closes the open text block and starts a stroke.
    pub fn on_pointer_drag(&mut self, x: i32, y: i32) -> Result<(), AnnotationError> {
        if self.side != Side::Back {
            return Ok(());
        }
        if !self.store.strokes().is_open() {
            self.store.end_text_block();
            self.store.begin_stroke()?;
        }
        self.store.add_stroke_point(Point::new(x, y))
    }

    /// Processes a pointer release; ends the stroke segment if one is open.
    pub fn on_pointer_up(&mut self, _x: i32, _y: i32) -> Result<(), AnnotationError> {
        if self.side == Side::Back && self.store.strokes().is_open() {
            self.store.end_stroke()?;
        }
        Ok(())
    }

    /// Processes a key press.
    ///
    /// Printable characters extend the open text block; the commit key closes
    /// it. Modifier, backspace and delete keys are swallowed.
    pub fn on_key_press(&mut self, key: Key) -> Result<(), AnnotationError> {
        if self.side != Side::Back || key.is_control() {
            return Ok(());
        }

        if key == self.commit_key {
            self.store.end_text_block();
            return Ok(());
        }

        if let Key::Char(c) = key {
            if self.store.open_text_block().is_some() {
                self.store.append_char(c)?;
            } else {
                debug!("Ignoring {c:?}: no text block open");
            }
        }
        Ok(())
    }

    /// Lays out the text annotations for the current viewport.
    pub fn layout<'a, M>(&'a self, metrics: &'a M) -> Lines<'a, M>
    where
        M: FontMetrics + ?Sized,
    {
        layout::layout(
            self.store.text_annotations(),
            metrics,
            self.viewport.origin_x,
            self.viewport.right_edge(),
        )
    }

    /// Paints the visible side of the photo.
    pub fn render<P, M>(&self, ctx: &cairo::Context, photo: &P, metrics: &M)
    where
        P: PhotoSurface + ?Sized,
        M: FontMetrics + ?Sized,
    {
        match self.side {
            Side::Front => photo.paint(ctx),
            Side::Back => {
                render_canvas(ctx, photo.width(), photo.height());
                render_strokes(ctx, self.store.strokes());
                render_text_lines(ctx, self.layout(metrics));
            }
        }
    }

    fn flip(&mut self) -> Result<(), AnnotationError> {
        // Nothing stays half-finished across a flip
        if self.store.strokes().is_open() {
            self.store.end_stroke()?;
        }
        self.store.end_text_block();

        self.side = self.side.flipped();
        info!("Photo flipped to {:?}", self.side);
        self.store.request_repaint();
        Ok(())
    }
}
