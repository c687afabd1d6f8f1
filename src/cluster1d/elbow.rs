//! Inertia-elbow model selection.

/// Relative difference `|a - b| / mean(a, b)`; zero when both are zero.
pub fn relative_drop(a: f64, b: f64) -> f64 {
    let mean = (a + b) * 0.5;
    if mean > 0.0 {
        (a - b).abs() / mean
    } else {
        0.0
    }
}

/// Per-candidate elbow statistics, in ascending-k order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElbowCurve {
    /// `drops[i]` compares model `i` with model `i + 1`.
    pub drops: Vec<f64>,
    /// `accelerations[i] = drops[i] - drops[i + 1]`.
    pub accelerations: Vec<f64>,
}

impl ElbowCurve {
    pub fn from_inertias(inertias: &[f64]) -> Self {
        let drops: Vec<f64> = inertias
            .windows(2)
            .map(|w| relative_drop(w[0], w[1]))
            .collect();
        let accelerations = drops.windows(2).map(|w| w[0] - w[1]).collect();
        Self {
            drops,
            accelerations,
        }
    }

    /// Index of the model right after the largest acceleration; the first
    /// maximum wins. With fewer than three models there is no acceleration
    /// and the last (largest k) model is selected.
    pub fn select(&self, model_count: usize) -> usize {
        let mut best: Option<(usize, f64)> = None;
        for (i, &a) in self.accelerations.iter().enumerate() {
            match best {
                Some((_, b)) if a <= b => {}
                _ => best = Some((i, a)),
            }
        }
        match best {
            Some((i, _)) => i + 1,
            None => model_count.saturating_sub(1),
        }
    }
}
