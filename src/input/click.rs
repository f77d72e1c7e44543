//! Click counting for shells that only report raw presses.

use std::time::{Duration, Instant};

/// Turns press timestamps into click counts.
///
/// A press within `threshold` of the previous one and within `slop` pixels on
/// both axes continues the sequence. After a double-click the next press starts
/// over at 1, so four quick presses report 1, 2, 1, 2.
#[derive(Debug, Clone)]
pub struct ClickCounter {
    threshold: Duration,
    slop: i32,
    last: Option<(Instant, i32, i32, u32)>,
}

impl ClickCounter {
    pub fn new(threshold: Duration, slop: i32) -> Self {
        Self {
            threshold,
            slop,
            last: None,
        }
    }

    /// Records a press and returns its click count (1 or 2).
    pub fn register(&mut self, at: Instant, x: i32, y: i32) -> u32 {
        let clicks = match self.last {
            Some((prev, px, py, 1))
                if at.saturating_duration_since(prev) <= self.threshold
                    && (x - px).abs() <= self.slop
                    && (y - py).abs() <= self.slop =>
            {
                2
            }
            _ => 1,
        };
        self.last = Some((at, x, y, clicks));
        clicks
    }
}
