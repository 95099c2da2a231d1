//! Cell → LED segment mapping and status colors.

use garden_core::evaluation::Status;
use garden_core::types::{Position, Rgb};
use serde::{Deserialize, Serialize};

/// An inclusive range of LED indices on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedSegment {
    pub start: usize,
    pub end: usize,
}

impl LedSegment {
    /// The segment used for positions that are not on the board.
    pub const ORIGIN: LedSegment = LedSegment { start: 0, end: 0 };
}

/// The strip is laid out row-major, `leds_per_cell` LEDs per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentMap {
    pub rows: usize,
    pub cols: usize,
    pub leds_per_cell: usize,
}

impl SegmentMap {
    pub fn new(rows: usize, cols: usize, leds_per_cell: usize) -> Self {
        Self {
            rows,
            cols,
            leds_per_cell: leds_per_cell.max(1),
        }
    }

    /// LEDs for `position`. Positions outside the board map to
    /// [`LedSegment::ORIGIN`].
    pub fn segment(&self, position: Position) -> LedSegment {
        if position.row >= self.rows || position.col >= self.cols {
            return LedSegment::ORIGIN;
        }
        let start = (position.row * self.cols + position.col) * self.leds_per_cell;
        LedSegment {
            start,
            end: start + self.leds_per_cell - 1,
        }
    }

    pub fn total_leds(&self) -> usize {
        self.rows * self.cols * self.leds_per_cell
    }
}

/// Happy is green, unhappy red, neutral white; anything else is off.
pub fn status_color(status: Status) -> Rgb {
    match status {
        Status::Happy => Rgb::GREEN,
        Status::Unhappy => Rgb::RED,
        Status::Neutral => Rgb::WHITE,
        Status::Error => Rgb::OFF,
    }
}
