use crate::types::{Axis, Orientation, Point};
use serde::{Deserialize, Serialize};

/// Axis-aligned segment. Purely horizontal (shared y) or purely vertical
/// (shared x); constructors are the only way to build one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
    pub orientation: Orientation,
}

impl Segment {
    /// Horizontal segment at `y` from `x1` to `x2`.
    pub fn horizontal(y: f32, x1: f32, x2: f32) -> Self {
        Self {
            p1: Point::new(x1, y),
            p2: Point::new(x2, y),
            orientation: Orientation::Horizontal,
        }
    }

    /// Vertical segment at `x` from `y1` to `y2`.
    pub fn vertical(x: f32, y1: f32, y2: f32) -> Self {
        Self {
            p1: Point::new(x, y1),
            p2: Point::new(x, y2),
            orientation: Orientation::Vertical,
        }
    }

    /// Line at `coordinate` on `orientation.fixed_axis()`, spanning
    /// `start..end` along the other axis.
    pub fn with_orientation(orientation: Orientation, coordinate: f32, start: f32, end: f32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::horizontal(coordinate, start, end),
            Orientation::Vertical => Self::vertical(coordinate, start, end),
        }
    }

    /// The constant coordinate (y for horizontal, x for vertical).
    pub fn coordinate(&self) -> f32 {
        self.p1.coord(self.orientation.fixed_axis())
    }

    /// Ordered `(min, max)` extent along the segment's direction.
    pub fn extent(&self) -> (f32, f32) {
        let axis = self.orientation.fixed_axis().orthogonal();
        let a = self.p1.coord(axis);
        let b = self.p2.coord(axis);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Inclusive test whether the segment's extent covers `value`.
    pub fn spans(&self, value: f32) -> bool {
        let (lo, hi) = self.extent();
        lo <= value && value <= hi
    }

    pub fn length(&self) -> f32 {
        self.p1.distance(&self.p2)
    }

    pub fn endpoints(&self) -> [Point; 2] {
        [self.p1, self.p2]
    }

    /// Coordinate of the segment's endpoints along `axis`.
    pub fn endpoint_coords(&self, axis: Axis) -> [f32; 2] {
        [self.p1.coord(axis), self.p2.coord(axis)]
    }
}
