use serde::{Deserialize, Serialize};

/// Options controlling how clusters are turned into raw segments.
///
/// - `min_percent_split`: gap threshold as a fraction of the canvas extent
///   along the segment direction; sorted orthogonal coordinates further
///   apart than this start a new run.
/// - `buffer_quantile`: lower trim quantile; endpoints sit at
///   `buffer_quantile` and `1 - buffer_quantile` of each run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSegmentParams {
    pub min_percent_split: f32,
    pub buffer_quantile: f32,
}

impl Default for RawSegmentParams {
    fn default() -> Self {
        Self {
            min_percent_split: 0.10,
            buffer_quantile: 0.05,
        }
    }
}

impl RawSegmentParams {
    /// Maximum gap kept inside one run for a canvas `extent`.
    pub fn gap_threshold(&self, extent: f32) -> f32 {
        self.min_percent_split * extent
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_percent_split > 0.0 && self.min_percent_split <= 1.0) {
            return Err(format!(
                "min_percent_split must be in (0, 1], got {}",
                self.min_percent_split
            ));
        }
        if !(self.buffer_quantile >= 0.0 && self.buffer_quantile < 0.5) {
            return Err(format!(
                "buffer_quantile must be in [0, 0.5), got {}",
                self.buffer_quantile
            ));
        }
        Ok(())
    }
}
