use super::options::RawSegmentParams;
use super::runs::split_runs;
use super::segment::Segment;
use super::stats::{mode, quantile_sorted};
use crate::cluster1d::AxisClustering;
use crate::types::{Axis, Canvas};
use log::debug;
use serde::Serialize;

/// Bounded segment derived from one axis cluster, before snapping.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegment {
    pub segment: Segment,
    /// Axis whose coordinates were clustered.
    pub axis: Axis,
    /// Cluster label within that axis' clustering.
    pub cluster: usize,
    /// Number of samples in the run that produced the segment.
    pub support: usize,
}

impl RawSegment {
    pub fn length(&self) -> f32 {
        self.segment.length()
    }
}

/// Raw segments of one axis plus the clusters that yielded none.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegmentSet {
    pub segments: Vec<RawSegment>,
    pub degenerate_clusters: Vec<usize>,
}

/// Turns one axis' clusters into raw segments.
pub struct RawSegmentBuilder<'a> {
    canvas: Canvas,
    pixels: &'a [[u32; 2]],
    params: RawSegmentParams,
}

impl<'a> RawSegmentBuilder<'a> {
    /// `pixels` must be the `(x, y)` pairs whose own-axis coordinates were
    /// clustered, in the same order.
    pub fn new(canvas: Canvas, pixels: &'a [[u32; 2]], params: RawSegmentParams) -> Self {
        Self {
            canvas,
            pixels,
            params,
        }
    }

    pub fn build(&self, clustering: &AxisClustering) -> RawSegmentSet {
        let axis = clustering.axis;
        let own = axis_index(axis);
        let ortho = axis_index(axis.orthogonal());
        let gap = self
            .params
            .gap_threshold(self.canvas.extent(axis.orthogonal()));

        let mut out = RawSegmentSet::default();
        for (label, members) in clustering.members().into_iter().enumerate() {
            let own_values: Vec<u32> = members.iter().map(|&i| self.pixels[i][own]).collect();
            let Some(representative) = mode(&own_values) else {
                out.degenerate_clusters.push(label);
                continue;
            };
            let mut extent: Vec<f32> = members
                .iter()
                .map(|&i| self.pixels[i][ortho] as f32)
                .collect();
            extent.sort_by(f32::total_cmp);

            let before = out.segments.len();
            for run in split_runs(&extent, gap) {
                if let Some(segment) = self.run_segment(axis, representative as f32, run) {
                    out.segments.push(RawSegment {
                        segment,
                        axis,
                        cluster: label,
                        support: run.len(),
                    });
                }
            }
            if out.segments.len() == before {
                out.degenerate_clusters.push(label);
            }
        }

        debug!(
            "RawSegmentBuilder({axis}): clusters={} segments={} degenerate={} gap={gap:.2}",
            clustering.k(),
            out.segments.len(),
            out.degenerate_clusters.len()
        );
        out
    }

    /// Quantile-trimmed segment over `run`, or `None` when the trimmed
    /// endpoints coincide.
    fn run_segment(&self, axis: Axis, representative: f32, run: &[f32]) -> Option<Segment> {
        let q = self.params.buffer_quantile;
        let start = quantile_sorted(run, q)?;
        let end = quantile_sorted(run, 1.0 - q)?;
        if end <= start {
            return None;
        }
        Some(Segment::with_orientation(
            axis.line_orientation(),
            representative,
            start,
            end,
        ))
    }
}

fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
    }
}
