// Point helpers shared by the touch tracker and the transform.
use serde::{Deserialize, Serialize};

/// A location in pixels. Touch input arrives in client space; the tracker
/// shifts pinch centers into surface-local space with an offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn delta_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn negated(self) -> Point {
        Point::new(-self.x, -self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Midpoint of `a` and `b`, shifted by `offset`.
pub fn midpoint(a: Point, b: Point, offset: Point) -> Point {
    Point {
        x: (a.x + b.x) / 2.0 + offset.x,
        y: (a.y + b.y) / 2.0 + offset.y,
    }
}

/// Euclidean distance. Only ever compared against another distance, so the
/// unit does not matter as long as both samples share it.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
