#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{PERCENT_MAX, PERCENT_MIN};

/// A point in client (viewport) pixels or in board percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// An element's bounding rectangle in client pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Visual centre of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    /// Convert a client-space point into board percentages, clamped to
    /// `[0, 100]` on both axes.
    ///
    /// Returns `None` when the rectangle has no area (collapsed or not yet
    /// laid out).
    #[must_use]
    pub fn to_percent(&self, client: Point) -> Option<Point> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let x = (client.x - self.left) / self.width * 100.0;
        let y = (client.y - self.top) / self.height * 100.0;
        Some(Point { x: clamp_percent(x), y: clamp_percent(y) })
    }
}

/// Clamp a coordinate into the board's percentage range.
///
/// Non-finite input collapses to the nearest bound (`NaN` to the lower one)
/// so the result always satisfies the range invariant.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return PERCENT_MIN;
    }
    value.clamp(PERCENT_MIN, PERCENT_MAX)
}
