use super::Arrangement;
use crate::error::GridError;
use crate::segments::{RawSegment, Segment};
use crate::types::Canvas;
use log::debug;

/// Stable sort by descending length; equal lengths keep insertion order.
pub fn order_by_length(raw: &mut [RawSegment]) {
    raw.sort_by(|a, b| b.length().total_cmp(&a.length()));
}

/// Grows an [`Arrangement`] one snapped segment at a time.
#[derive(Clone, Debug)]
pub struct ArrangementBuilder {
    arrangement: Arrangement,
}

impl ArrangementBuilder {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            arrangement: Arrangement::with_border(canvas),
        }
    }

    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Snap `raw` onto the crossing lines placed so far and append it.
    pub fn insert(&mut self, raw: &Segment) -> Result<Segment, GridError> {
        let orientation = raw.orientation;
        let coordinate = raw.coordinate();
        let (start, end) = raw.extent();
        let crossing: Vec<f32> = self
            .arrangement
            .lines(orientation.orthogonal())
            .iter()
            .filter(|line| line.spans(coordinate))
            .map(Segment::coordinate)
            .collect();

        let violation = |reason| GridError::ArrangementInvariantViolation {
            orientation,
            coordinate,
            reason,
        };
        let new_start = nearest(crossing.iter().copied(), start)
            .ok_or_else(|| violation("no crossing line for first endpoint"))?;
        let new_end = nearest(crossing.iter().copied().filter(|&c| c != new_start), end)
            .ok_or_else(|| violation("no second crossing line"))?;

        let snapped = Segment::with_orientation(orientation, coordinate, new_start, new_end);
        self.arrangement.lines_mut(orientation).push(snapped);
        Ok(snapped)
    }

    pub fn finish(self) -> Arrangement {
        self.arrangement
    }
}

/// Candidate closest to `target`; the first one wins ties.
fn nearest(candidates: impl Iterator<Item = f32>, target: f32) -> Option<f32> {
    let mut best: Option<(f32, f32)> = None;
    for c in candidates {
        let d = (c - target).abs();
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((c, d)),
        }
    }
    best.map(|(c, _)| c)
}

/// Order `raw` longest first and snap every segment into a border-seeded
/// arrangement. Any failed snap aborts the whole construction.
pub fn build_arrangement(
    canvas: Canvas,
    mut raw: Vec<RawSegment>,
) -> Result<Arrangement, GridError> {
    order_by_length(&mut raw);
    snap_in_order(canvas, &raw)
}

/// Snap `ordered` into a border-seeded arrangement in the given order.
/// Callers pass segments already sorted by [`order_by_length`].
pub fn snap_in_order(canvas: Canvas, ordered: &[RawSegment]) -> Result<Arrangement, GridError> {
    let mut builder = ArrangementBuilder::new(canvas);
    for r in ordered {
        builder.insert(&r.segment)?;
    }
    let arrangement = builder.finish();
    debug!(
        "snap_in_order: raw={} vertical={} horizontal={}",
        ordered.len(),
        arrangement.vertical.len(),
        arrangement.horizontal.len()
    );
    Ok(arrangement)
}
