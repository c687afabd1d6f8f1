use super::params::GridBuilderParams;
use crate::arrangement::{order_by_length, snap_in_order};
use crate::cluster1d::{cluster_axis, AxisClustering};
use crate::diagnostics::{
    elapsed_ms, AxisClusteringTrace, BuildReport, BuildTrace, InputDescriptor, TimingBreakdown,
};
use crate::edges::EdgePixels;
use crate::error::GridError;
use crate::segments::RawSegmentBuilder;
use crate::types::Axis;
use log::debug;
use std::time::Instant;

/// Runs the full edge-pixels-to-arrangement pipeline.
#[derive(Clone, Debug, Default)]
pub struct GridBuilder {
    params: GridBuilderParams,
}

impl GridBuilder {
    pub fn new(params: GridBuilderParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GridBuilderParams {
        &self.params
    }

    /// Cluster both axes, derive raw segments and snap them into a
    /// border-seeded arrangement. Nothing partial is returned on failure.
    pub fn build(&self, edges: &EdgePixels) -> Result<BuildReport, GridError> {
        self.params.validate()?;
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let canvas = edges.canvas();

        let cluster_start = Instant::now();
        let (clustering_x, clustering_y) = self.cluster_axes(edges);
        timings.push("cluster_axes", elapsed_ms(cluster_start));
        let clustering_x = clustering_x?;
        let clustering_y = clustering_y?;

        let segment_builder =
            RawSegmentBuilder::new(canvas, edges.pixels(), self.params.raw_segments);
        let (raw_x, raw_y) = timings.measure("raw_segments", || {
            (
                segment_builder.build(&clustering_x),
                segment_builder.build(&clustering_y),
            )
        });

        let mut raw_segments = raw_x.segments;
        raw_segments.extend(raw_y.segments);
        order_by_length(&mut raw_segments);

        let arrangement =
            timings.measure("arrangement", || snap_in_order(canvas, &raw_segments))?;
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "GridBuilder::build pixels={} kx={} ky={} raw={} internal={} snap_ms={:.3} total_ms={:.3}",
            edges.len(),
            clustering_x.k(),
            clustering_y.k(),
            raw_segments.len(),
            arrangement.internal_segments().count(),
            timings.stage_ms("arrangement").unwrap_or_default(),
            timings.total_ms
        );

        Ok(BuildReport {
            arrangement,
            trace: BuildTrace {
                input: InputDescriptor {
                    canvas,
                    edge_pixels: edges.len(),
                },
                timings,
                clustering_x: AxisClusteringTrace::from(&clustering_x),
                clustering_y: AxisClusteringTrace::from(&clustering_y),
                raw_segments,
                degenerate_clusters_x: raw_x.degenerate_clusters,
                degenerate_clusters_y: raw_y.degenerate_clusters,
            },
        })
    }

    fn cluster_axes(
        &self,
        edges: &EdgePixels,
    ) -> (
        Result<AxisClustering, GridError>,
        Result<AxisClustering, GridError>,
    ) {
        let params = &self.params.cluster;
        let run = |axis: Axis| cluster_axis(axis, &edges.coordinates(axis), params);

        #[cfg(feature = "parallel")]
        {
            if self.params.parallel_axes {
                return rayon::join(|| run(Axis::X), || run(Axis::Y));
            }
        }

        (run(Axis::X), run(Axis::Y))
    }
}
