//! Annotation model for the back side of a photo.
//!
//! This module defines the canonical state recorded while the user annotates:
//! - [`StrokeSequence`]: freehand points with explicit pen-up breaks
//! - [`TextAnnotation`]: one independent text block anchored where it was started
//! - [`AnnotationStore`]: the per-photo owner of both, plus the active drawing attributes

mod store;
mod strokes;
#[cfg(test)]
mod tests;

pub use store::{AnnotationStore, DrawingAttributes, RepaintHook, TextAnnotation};
pub use strokes::{Segment, StrokeSequence, StrokeStyle};

/// Integer pixel position relative to the photo's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
