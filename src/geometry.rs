//! Geometry primitives and hit-testing.
//!
//! Everything here is pure: no scene state, no transforms. Coordinates are
//! world-space unless a caller says otherwise.

use serde::{Deserialize, Serialize};

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }

    /// This point moved by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Euclidean distance.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// True when `point` lies within `radius` of `vertex` (inclusive).
pub fn near_vertex(point: Point, vertex: Point, radius: f64) -> bool {
    distance(point, vertex) <= radius
}

/// Index of the first vertex within `radius` of `point`.
pub fn find_vertex_near(vertices: &[Point], point: Point, radius: f64) -> Option<usize> {
    vertices.iter().position(|v| near_vertex(point, *v, radius))
}

/// Even-odd ray casting test.
///
/// Fewer than three vertices is never "inside". Self-intersecting input gets
/// whatever the even-odd rule yields. The crossing test is half-open, so for an
/// axis-aligned square the left and bottom (low-y) edges count as inside and the
/// right and top (high-y) edges as outside: on the square `(0,0)-(10,10)`,
/// `(0,5)` is inside and `(10,10)` is outside.
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

// ============================================================================
// Rectangles
// ============================================================================

/// An axis-aligned rectangle with non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two opposite corners in any order.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            x: p1.x.min(p2.x),
            y: p1.y.min(p2.y),
            width: (p1.x - p2.x).abs(),
            height: (p1.y - p2.y).abs(),
        }
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }
}

/// A marquee being dragged out, in screen space.
///
/// Width and height are signed: dragging up or left makes them negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionRect {
    pub start_x: f64,
    pub start_y: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    /// Zero-sized marquee anchored at `start`.
    pub fn at(start: Point) -> Self {
        Self {
            start_x: start.x,
            start_y: start.y,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Stretch the marquee so its moving corner sits at `to`.
    pub fn drag_to(&mut self, to: Point) {
        self.width = to.x - self.start_x;
        self.height = to.y - self.start_y;
    }

    /// Larger than `min` along at least one axis.
    pub fn exceeds(&self, min: f64) -> bool {
        self.width.abs() > min || self.height.abs() > min
    }

    pub fn normalized(&self) -> Rect {
        Rect::from_corners(
            Point::new(self.start_x, self.start_y),
            Point::new(self.start_x + self.width, self.start_y + self.height),
        )
    }
}
