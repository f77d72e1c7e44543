//! Text layout engine: turns text annotations into wrapped, positioned lines.
//!
//! Layout is recomputed from scratch on every paint. Nothing is cached, so a
//! resized drawing area simply produces new wrap points on the next frame.
//!
//! Each block wraps independently against the distance from its anchor to the
//! component's right edge, minus a fixed [`WRAP_MARGIN`]. Before a character is
//! placed, the block's text up to and including that character plus a
//! [`LOOKAHEAD_FILLER`] is measured. The budget already spent by the emitted
//! lines is subtracted, and if the rest is strictly wider than the budget the
//! line is emitted and the character starts the next one.

use crate::annotation::TextAnnotation;
use crate::draw::FontMetrics;
use std::iter::Peekable;
use std::str::Chars;


/// Pixels kept free between the longest line and the right edge.
pub const WRAP_MARGIN: i32 = 10;

/// Character appended when measuring so wrapping triggers one glyph early.
pub const LOOKAHEAD_FILLER: char = 'c';

/// One wrapped line ready to paint, positioned at its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutLine<'a> {
    pub x: i32,
    pub y: i32,
    pub text: String,
    /// Block the line belongs to; carries color and font.
    pub annotation: &'a TextAnnotation,
}

/// Lays out `blocks` lazily in block order.
///
/// `origin_x` is the component's left edge and `right_edge` its right edge, both
/// in the same coordinate space; anchors are relative to `origin_x`. Empty blocks
/// produce no lines. The computation is pure: calling it twice with the same
/// inputs yields the same lines.
pub fn layout<'a, M>(
    blocks: &'a [TextAnnotation],
    metrics: &'a M,
    origin_x: i32,
    right_edge: i32,
) -> Lines<'a, M>
where
    M: FontMetrics + ?Sized,
{
    Lines {
        blocks: blocks.iter(),
        metrics,
        origin_x,
        right_edge,
        current: None,
    }
}

/// Iterator returned by [`layout`].
pub struct Lines<'a, M: FontMetrics + ?Sized> {
    blocks: std::slice::Iter<'a, TextAnnotation>,
    metrics: &'a M,
    origin_x: i32,
    right_edge: i32,
    current: Option<BlockCursor<'a>>,
}

impl<'a, M: FontMetrics + ?Sized> Iterator for Lines<'a, M> {
    type Item = LaidOutLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current.is_none() {
                let block = self.blocks.next()?;
                self.current = Some(BlockCursor::new(
                    block,
                    self.metrics,
                    self.origin_x,
                    self.right_edge,
                ));
            }

            let cursor = self.current.as_mut()?;
            match cursor.next_line(self.metrics) {
                Some(line) => return Some(line),
                None => self.current = None,
            }
        }
    }
}

/// Wrapping progress through a single block.
struct BlockCursor<'a> {
    block: &'a TextAnnotation,
    chars: Peekable<Chars<'a>>,
    /// Every character placed so far, across all lines of the block
    prefix: String,
    line: String,
    emitted: i32,
    budget: i32,
    line_height: i32,
}

impl<'a> BlockCursor<'a> {
    fn new<M: FontMetrics + ?Sized>(
        block: &'a TextAnnotation,
        metrics: &M,
        origin_x: i32,
        right_edge: i32,
    ) -> Self {
        let distance_to_border = right_edge - (origin_x + block.anchor.x);
        Self {
            block,
            chars: block.text.chars().peekable(),
            prefix: String::new(),
            line: String::new(),
            emitted: 0,
            budget: distance_to_border - WRAP_MARGIN,
            line_height: metrics.line_height(&block.font),
        }
    }

    fn next_line<M: FontMetrics + ?Sized>(&mut self, metrics: &M) -> Option<LaidOutLine<'a>> {
        while let Some(&ch) = self.chars.peek() {
            // A line always keeps at least one character, so a zero or negative
            // budget degrades to one character per line.
            if !self.line.is_empty() && self.overflows(metrics, ch) {
                return Some(self.emit());
            }
            self.line.push(ch);
            self.prefix.push(ch);
            self.chars.next();
        }

        if self.line.is_empty() {
            None
        } else {
            Some(self.emit())
        }
    }

    fn overflows<M: FontMetrics + ?Sized>(&self, metrics: &M, next: char) -> bool {
        if self.budget <= 0 {
            return true;
        }
        let mut measured = String::with_capacity(self.prefix.len() + 8);
        measured.push_str(&self.prefix);
        measured.push(next);
        measured.push(LOOKAHEAD_FILLER);
        let spent = self.budget * self.emitted;
        metrics.string_width(&self.block.font, &measured) - spent > self.budget
    }

    fn emit(&mut self) -> LaidOutLine<'a> {
        self.emitted += 1;
        LaidOutLine {
            x: self.block.anchor.x,
            y: self.block.anchor.y + self.emitted * self.line_height,
            text: std::mem::take(&mut self.line),
            annotation: self.block,
        }
    }
}
