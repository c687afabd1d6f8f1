use crate::cluster1d::{AxisClustering, CandidateModel};
use crate::types::Axis;
use serde::Serialize;

/// Elbow search outcome for one axis.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisClusteringTrace {
    pub axis: Axis,
    pub candidates: Vec<CandidateModel>,
    pub drops: Vec<f64>,
    pub accelerations: Vec<f64>,
    pub chosen_k: usize,
    pub centroids: Vec<f32>,
    pub sample_count: usize,
}

impl From<&AxisClustering> for AxisClusteringTrace {
    fn from(c: &AxisClustering) -> Self {
        Self {
            axis: c.axis,
            candidates: c.candidates.clone(),
            drops: c.curve.drops.clone(),
            accelerations: c.curve.accelerations.clone(),
            chosen_k: c.k(),
            centroids: c.centroids.clone(),
            sample_count: c.labels.len(),
        }
    }
}
