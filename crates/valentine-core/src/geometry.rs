//! Screen-space geometry primitives.
//!
//! All coordinates are in logical pixels, y growing downward, matching
//! what the host UI reports for pointer events and bounding rects.

use rand::Rng;

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An axis-aligned bounding box in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// A displacement applied on top of an element's natural layout
/// position. This is the value the evasion controller owns and emits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// This offset shifted by a polar step.
    pub fn stepped(&self, angle: f64, magnitude: f64) -> Offset {
        Offset::new(
            self.dx + angle.cos() * magnitude,
            self.dy + angle.sin() * magnitude,
        )
    }
}

/// Permitted range for an offset, per axis.
///
/// A span can be empty (max below min) when the container is smaller
/// than the element; clamping then degrades to the span's minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// True when the offset sits at or beyond the x limits.
    pub fn escapes_x(&self, offset: Offset) -> bool {
        offset.dx <= self.min_x || offset.dx >= self.max_x
    }

    /// True when the offset sits at or beyond the y limits.
    pub fn escapes_y(&self, offset: Offset) -> bool {
        offset.dy <= self.min_y || offset.dy >= self.max_y
    }

    pub fn contains(&self, offset: Offset) -> bool {
        offset.dx >= self.min_x.min(self.max_x)
            && offset.dx <= self.max_x.max(self.min_x)
            && offset.dy >= self.min_y.min(self.max_y)
            && offset.dy <= self.max_y.max(self.min_y)
    }

    /// Clamp the offset independently per axis.
    pub fn clamp(&self, offset: Offset) -> Offset {
        Offset::new(
            clamp_span(offset.dx, self.min_x, self.max_x),
            clamp_span(offset.dy, self.min_y, self.max_y),
        )
    }

    /// A uniformly random offset inside the bounds.
    pub fn random_offset(&self, rng: &mut impl Rng) -> Offset {
        Offset::new(
            random_in_span(rng, self.min_x, self.max_x),
            random_in_span(rng, self.min_y, self.max_y),
        )
    }
}

fn clamp_span(value: f64, min: f64, max: f64) -> f64 {
    if max < min {
        // Degenerate span, pin to its start.
        min
    } else {
        value.clamp(min, max)
    }
}

fn random_in_span(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    if max > min {
        rng.random_range(min..=max)
    } else {
        min
    }
}
