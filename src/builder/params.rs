//! Parameter types configuring the build stages.
//!
//! Defaults reproduce the reference heuristic: k searched in `[2, 7)`, runs
//! split on gaps above 10% of the canvas extent, and endpoints trimmed to
//! the 5th/95th percentiles.

use crate::cluster1d::ClusterParams;
use crate::error::GridError;
use crate::segments::RawSegmentParams;
use serde::{Deserialize, Serialize};

/// Immutable configuration threaded through every stage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridBuilderParams {
    /// Per-axis k-means search.
    pub cluster: ClusterParams,
    /// Cluster-to-segment conversion.
    pub raw_segments: RawSegmentParams,
    /// Cluster x and y concurrently. Only effective with the `parallel`
    /// feature; results are identical either way.
    pub parallel_axes: bool,
}

impl Default for GridBuilderParams {
    fn default() -> Self {
        Self {
            cluster: ClusterParams::default(),
            raw_segments: RawSegmentParams::default(),
            parallel_axes: true,
        }
    }
}

impl GridBuilderParams {
    pub fn validate(&self) -> Result<(), GridError> {
        self.cluster.validate().map_err(GridError::InvalidParams)?;
        self.raw_segments
            .validate()
            .map_err(GridError::InvalidParams)?;
        Ok(())
    }
}
