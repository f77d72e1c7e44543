//! Freehand stroke storage with pen-up breaks.

use super::Point;
use crate::draw::Color;
use crate::error::AnnotationError;

/// Color and width captured when a stroke starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub thickness: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::default(),
            thickness: 2.0,
        }
    }
}

/// A drawable line between two consecutive captured points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub style: StrokeStyle,
}

/// Ordered stroke points where `None` marks a pen-up break.
///
/// Point `i` is connected to point `i + 1` only when both are present.
#[derive(Debug, Default)]
pub struct StrokeSequence {
    entries: Vec<Option<Point>>,
    /// (index of the stroke's first entry, style) in ascending index order
    styles: Vec<(usize, StrokeStyle)>,
    open: bool,
}

impl StrokeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw entries, breaks included.
    pub fn entries(&self) -> &[Option<Point>] {
        &self.entries
    }

    /// Returns true while a stroke is between `begin` and `end`.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of strokes started so far.
    pub fn stroke_count(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn begin(&mut self, style: StrokeStyle) -> Result<(), AnnotationError> {
        if self.open {
            return Err(AnnotationError::InvalidState("stroke already in progress"));
        }
        self.styles.push((self.entries.len(), style));
        self.open = true;
        Ok(())
    }

    pub(crate) fn push(&mut self, point: Point) -> Result<(), AnnotationError> {
        if !self.open {
            return Err(AnnotationError::InvalidState("stroke point without open stroke"));
        }
        self.entries.push(Some(point));
        Ok(())
    }

    pub(crate) fn end(&mut self) -> Result<(), AnnotationError> {
        if !self.open {
            return Err(AnnotationError::InvalidState("no stroke to end"));
        }
        self.entries.push(None);
        self.open = false;
        Ok(())
    }

    /// Yields every segment between two present neighbours, never across a break.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.entries
            .windows(2)
            .enumerate()
            .filter_map(move |(i, pair)| match (pair[0], pair[1]) {
                (Some(from), Some(to)) => Some(Segment {
                    from,
                    to,
                    style: self.style_at(i),
                }),
                _ => None,
            })
    }

    fn style_at(&self, index: usize) -> StrokeStyle {
        let owner = self.styles.partition_point(|(start, _)| *start <= index);
        owner
            .checked_sub(1)
            .map(|i| self.styles[i].1)
            .unwrap_or_default()
    }
}
