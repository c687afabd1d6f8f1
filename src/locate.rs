//! Point location: the minimal arrangement cell around a query point.
//!
//! For a query `p` the locator picks, in each of the four directions, the
//! nearest arrangement line that actually crosses `p`'s row or column:
//!
//! - north: horizontal lines with `y < p.y` (plus the top border),
//!   maximum `y`;
//! - south: horizontal lines with `y >= p.y` (plus the bottom border),
//!   minimum `y`;
//! - west/east: the same with vertical lines and `p.x`.
//!
//! The cell bounds are then read off the endpoints of those four
//! segments: left is the largest x `<= p.x`, right the smallest x `> p.x`,
//! and likewise for top/bottom. When a query sits on a line whose crossing
//! north/south (or west/east) segments both end on it, no endpoint lies
//! beyond the query; the far bound then comes from the nearest crossing
//! line strictly beyond it, which the border always provides. Queries on
//! the far canvas edge (`x == W` or `y == H`) are moved one pixel inward
//! first.

use crate::arrangement::Arrangement;
use crate::error::GridError;
use crate::segments::Segment;
use crate::types::{Axis, Cell, Orientation, Point};

/// Read-only point locator over a finished arrangement.
#[derive(Clone, Copy, Debug)]
pub struct CellLocator<'a> {
    arrangement: &'a Arrangement,
}

#[derive(Clone, Copy)]
enum Side {
    /// Strictly before the query coordinate, nearest = maximum.
    Before,
    /// At or after the query coordinate, nearest = minimum.
    AtOrAfter,
    /// Strictly after the query coordinate, nearest = minimum.
    After,
}

impl<'a> CellLocator<'a> {
    pub fn new(arrangement: &'a Arrangement) -> Self {
        Self { arrangement }
    }

    /// Minimal cell enclosing `p`, as origin plus size.
    pub fn locate(&self, p: Point) -> Result<Cell, GridError> {
        let canvas = self.arrangement.canvas;
        let w = canvas.width as f32;
        let h = canvas.height as f32;
        if !(p.x >= 0.0 && p.x <= w && p.y >= 0.0 && p.y <= h) {
            return Err(GridError::PointOutsideCanvas { point: p });
        }
        let q = Point::new(
            if p.x == w { w - 1.0 } else { p.x },
            if p.y == h { h - 1.0 } else { p.y },
        );

        let north = self.nearest(Orientation::Horizontal, q, Side::Before, 0.0);
        let south = self.nearest(Orientation::Horizontal, q, Side::AtOrAfter, h);
        let west = self.nearest(Orientation::Vertical, q, Side::Before, 0.0);
        let east = self.nearest(Orientation::Vertical, q, Side::AtOrAfter, w);

        let points: Vec<Point> = [north, south, west, east]
            .iter()
            .flat_map(Segment::endpoints)
            .collect();

        let x1 = lower_bound(&points, Axis::X, q.x, west.coordinate());
        let y1 = lower_bound(&points, Axis::Y, q.y, north.coordinate());
        let x2 = upper_bound(&points, Axis::X, q.x).unwrap_or_else(|| {
            self.nearest(Orientation::Vertical, q, Side::After, w)
                .coordinate()
        });
        let y2 = upper_bound(&points, Axis::Y, q.y).unwrap_or_else(|| {
            self.nearest(Orientation::Horizontal, q, Side::After, h)
                .coordinate()
        });
        Ok(Cell::from_bounds(x1, y1, x2, y2))
    }

    /// Locate every point; fails on the first point outside the canvas.
    pub fn locate_many(&self, points: &[Point]) -> Result<Vec<Cell>, GridError> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            points.par_iter().map(|&p| self.locate(p)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            points.iter().map(|&p| self.locate(p)).collect()
        }
    }

    /// Nearest line of `orientation` on `side` of `q` that crosses `q`.
    /// The canvas border at `sentinel` spans every query, so it is the
    /// starting candidate and the result always exists.
    fn nearest(&self, orientation: Orientation, q: Point, side: Side, sentinel: f32) -> Segment {
        let fixed = orientation.fixed_axis();
        let target = q.coord(fixed);
        let along = q.coord(fixed.orthogonal());
        let span = self.arrangement.canvas.extent(fixed.orthogonal());

        let mut best = Segment::with_orientation(orientation, sentinel, 0.0, span);
        for line in self.arrangement.lines(orientation) {
            let c = line.coordinate();
            let (on_side, better) = match side {
                Side::Before => (c < target, c > best.coordinate()),
                Side::AtOrAfter => (c >= target, c < best.coordinate()),
                Side::After => (c > target, c < best.coordinate()),
            };
            if on_side && better && line.spans(along) {
                best = *line;
            }
        }
        best
    }
}

/// Largest coordinate `<= value` among `points`, never below `floor`.
/// `floor` is the west or north line, which never lies beyond the query.
fn lower_bound(points: &[Point], axis: Axis, value: f32, floor: f32) -> f32 {
    points
        .iter()
        .map(|p| p.coord(axis))
        .filter(|&c| c <= value)
        .fold(floor, f32::max)
}

/// Smallest coordinate `> value` among `points`.
fn upper_bound(points: &[Point], axis: Axis, value: f32) -> Option<f32> {
    points
        .iter()
        .map(|p| p.coord(axis))
        .filter(|&c| c > value)
        .reduce(f32::min)
}
