use serde::{Deserialize, Serialize};

/// Search range and iteration cap for the per-axis k-means.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterParams {
    /// Smallest candidate cluster count (inclusive, >= 2).
    pub k_min: usize,
    /// Largest candidate cluster count (exclusive).
    pub k_max: usize,
    /// Lloyd iteration cap per fit.
    pub max_iterations: usize,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            k_min: 2,
            k_max: 7,
            max_iterations: 100,
        }
    }
}

impl ClusterParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.k_min < 2 {
            return Err(format!("k_min must be >= 2, got {}", self.k_min));
        }
        if self.k_max <= self.k_min {
            return Err(format!(
                "k_max ({}) must exceed k_min ({})",
                self.k_max, self.k_min
            ));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be >= 1".to_string());
        }
        Ok(())
    }
}
