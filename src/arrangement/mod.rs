//! Border-seeded rectilinear arrangement and the snapping builder.
//!
//! The arrangement starts with the four canvas border segments. Raw
//! segments are then inserted longest first; each one keeps its line
//! coordinate but has both endpoints moved onto the nearest crossing lines
//! of the opposite orientation already present:
//!
//! - Only orthogonal lines whose extent covers the segment's coordinate
//!   (inclusive) are candidates.
//! - The first endpoint snaps to the candidate nearest to it.
//! - The second endpoint snaps to the candidate nearest to it among those
//!   at a different coordinate than the first, so a segment never
//!   collapses to a point.
//! - Distance ties resolve to the earliest candidate in insertion order.
//!
//! Since every inserted segment ends on lines that were already present,
//! the finished arrangement is closed: no endpoint floats.

mod builder;

pub use builder::{build_arrangement, order_by_length, snap_in_order, ArrangementBuilder};

use crate::segments::Segment;
use crate::types::{Axis, Canvas, Orientation};
use serde::Serialize;

/// Number of border segments per orientation.
pub const BORDERS_PER_ORIENTATION: usize = 2;

/// Horizontal and vertical segment collections. The first two entries of
/// each collection are the canvas border and are never modified.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    pub canvas: Canvas,
    pub vertical: Vec<Segment>,
    pub horizontal: Vec<Segment>,
}

impl Arrangement {
    /// Border-only arrangement: x = 0 and x = W spanning `[0, H]`,
    /// y = 0 and y = H spanning `[0, W]`.
    pub fn with_border(canvas: Canvas) -> Self {
        let w = canvas.width as f32;
        let h = canvas.height as f32;
        Self {
            canvas,
            vertical: vec![Segment::vertical(0.0, 0.0, h), Segment::vertical(w, 0.0, h)],
            horizontal: vec![
                Segment::horizontal(0.0, 0.0, w),
                Segment::horizontal(h, 0.0, w),
            ],
        }
    }

    pub fn lines(&self, orientation: Orientation) -> &[Segment] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    pub(crate) fn lines_mut(&mut self, orientation: Orientation) -> &mut Vec<Segment> {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    pub fn border(&self) -> impl Iterator<Item = &Segment> {
        self.vertical[..BORDERS_PER_ORIENTATION]
            .iter()
            .chain(&self.horizontal[..BORDERS_PER_ORIENTATION])
    }

    pub fn border_count(&self) -> usize {
        self.border().count()
    }

    /// Non-border segments, vertical first, each in insertion order.
    pub fn internal_segments(&self) -> impl Iterator<Item = &Segment> {
        self.vertical[BORDERS_PER_ORIENTATION..]
            .iter()
            .chain(&self.horizontal[BORDERS_PER_ORIENTATION..])
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.vertical.iter().chain(&self.horizontal)
    }

    /// True when the border is intact and every internal segment ends on a
    /// crossing line of the opposite orientation at both endpoints.
    pub fn is_closed(&self) -> bool {
        let reference = Arrangement::with_border(self.canvas);
        if !self.border().eq(reference.border()) {
            return false;
        }
        self.internal_segments().all(|seg| {
            let coord = seg.coordinate();
            let along = seg.orientation.fixed_axis().orthogonal();
            seg.endpoint_coords(along).iter().all(|&end| {
                self.lines(seg.orientation.orthogonal())
                    .iter()
                    .any(|other| other.coordinate() == end && other.spans(coord))
            })
        })
    }

    /// Distinct line coordinates along `axis`, ascending.
    pub fn coordinates(&self, axis: Axis) -> Vec<f32> {
        let orientation = axis.line_orientation();
        let mut coords: Vec<f32> = self.lines(orientation).iter().map(Segment::coordinate).collect();
        coords.sort_by(f32::total_cmp);
        coords.dedup();
        coords
    }
}

#[cfg(test)]
mod tests;
