use crate::arrangement::Arrangement;
use crate::diagnostics::{AxisClusteringTrace, TimingBreakdown};
use crate::segments::RawSegment;
use crate::types::Canvas;
use serde::Serialize;

/// Result of [`GridBuilder::build`](crate::GridBuilder::build): the finished
/// arrangement plus a trace of the stages that produced it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub arrangement: Arrangement,
    pub trace: BuildTrace,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub clustering_x: AxisClusteringTrace,
    pub clustering_y: AxisClusteringTrace,
    /// Raw segments in insertion (longest-first) order.
    pub raw_segments: Vec<RawSegment>,
    pub degenerate_clusters_x: Vec<usize>,
    pub degenerate_clusters_y: Vec<usize>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub canvas: Canvas,
    pub edge_pixels: usize,
}
