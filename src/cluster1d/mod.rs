//! Per-axis clustering of edge-pixel coordinates.
//!
//! All x's (or all y's) of the edge pixels are clustered with a
//! deterministic 1-D k-means for every k in `[k_min, k_max)`. The model
//! count is chosen at the elbow of the inertia curve: relative inertia
//! drops between consecutive models are differenced, and the model right
//! after the largest such acceleration wins.
//!
//! Candidate counts above the number of distinct values are skipped, so
//! callers may receive fewer clusters than `k_min` asked for.

mod elbow;
pub mod kmeans;
mod options;

pub use elbow::{relative_drop, ElbowCurve};
pub use kmeans::{KMeansFit, WeightedValue};
pub use options::ClusterParams;

use crate::error::GridError;
use crate::types::Axis;
use log::{debug, warn};
use serde::Serialize;

/// One fitted candidate of the k search.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateModel {
    pub requested_k: usize,
    pub k: usize,
    pub inertia: f64,
    /// Lloyd iterations until labels settled (or the cap).
    pub iterations: usize,
}

impl CandidateModel {
    fn new(requested_k: usize, fit: &KMeansFit) -> Self {
        Self {
            requested_k,
            k: fit.k(),
            inertia: fit.inertia,
            iterations: fit.iterations,
        }
    }
}

/// Chosen partition of one axis' samples.
#[derive(Clone, Debug)]
pub struct AxisClustering {
    pub axis: Axis,
    /// Cluster label of each input sample, aligned with the input slice.
    pub labels: Vec<usize>,
    /// Cluster centroids by label, increasing.
    pub centroids: Vec<f32>,
    pub inertia: f64,
    pub candidates: Vec<CandidateModel>,
    pub curve: ElbowCurve,
    /// Index into `candidates` of the selected model.
    pub selected: usize,
}

impl AxisClustering {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Sample indices grouped by label.
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.k()];
        for (i, &label) in self.labels.iter().enumerate() {
            groups[label].push(i);
        }
        groups
    }
}

/// Cluster the coordinates of one axis and pick k at the inertia elbow.
pub fn cluster_axis(
    axis: Axis,
    samples: &[u32],
    params: &ClusterParams,
) -> Result<AxisClustering, GridError> {
    params.validate().map_err(GridError::InvalidParams)?;
    let values = kmeans::weighted_values(samples);
    if values.len() < 2 {
        return Err(GridError::InsufficientSamples {
            axis,
            unique: values.len(),
        });
    }

    let mut candidates = Vec::new();
    let mut fits: Vec<KMeansFit> = Vec::new();
    for requested_k in params.k_min..params.k_max {
        if requested_k > values.len() {
            break;
        }
        let fit = kmeans::fit(&values, requested_k, params.max_iterations);
        candidates.push(CandidateModel::new(requested_k, &fit));
        fits.push(fit);
    }
    if values.len() < params.k_min {
        // Fewer distinct values than k_min: one cluster per distinct value.
        let fit = kmeans::fit(&values, values.len(), params.max_iterations);
        candidates.push(CandidateModel::new(values.len(), &fit));
        fits.push(fit);
    }
    if candidates.len() < params.k_max.saturating_sub(params.k_min) {
        warn!(
            "cluster_axis({axis}): {} unique values, only {} of {} candidate models fitted",
            values.len(),
            candidates.len(),
            params.k_max.saturating_sub(params.k_min)
        );
    }

    let inertias: Vec<f64> = fits.iter().map(|f| f.inertia).collect();
    let curve = ElbowCurve::from_inertias(&inertias);
    let selected = curve.select(fits.len());
    let fit = fits.swap_remove(selected);

    debug!(
        "cluster_axis({axis}): samples={} unique={} inertias={:?} selected k={}",
        samples.len(),
        values.len(),
        inertias,
        fit.k()
    );

    let labels = samples
        .iter()
        .map(|&s| {
            let idx = values
                .binary_search_by(|wv| wv.value.total_cmp(&(s as f64)))
                .unwrap_or_else(|i| i.min(values.len() - 1));
            fit.labels[idx]
        })
        .collect();

    Ok(AxisClustering {
        axis,
        labels,
        centroids: fit.centroids.iter().map(|&c| c as f32).collect(),
        inertia: fit.inertia,
        candidates,
        curve,
        selected,
    })
}
