//! Typed polygon model: points, rings, polygons and the triangle index buffer.
//!
//! Design rule: values in this module are checked when they are built and never
//! change afterwards. Nothing here knows about bindings or transports.

mod buffer;
pub(crate) mod predicates;
mod ring;

pub use buffer::TriangleIndexBuffer;
pub use predicates::EPSILON;
pub use ring::{Polygon, Ring};

/// A 2D coordinate pair. Compared by value only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Both axes within [`EPSILON`] of each other.
    #[inline(always)]
    pub(crate) fn approx_eq(self, other: Point) -> bool {
        (self.x - other.x).abs() <= EPSILON && (self.y - other.y).abs() <= EPSILON
    }

    #[inline(always)]
    pub(crate) fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<[f64; 2]> for Point {
    #[inline(always)]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline(always)]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
