//! Deterministic 1-D k-means over weighted distinct values.
//!
//! Samples are collapsed into `(value, count)` pairs before fitting so the
//! cost of a Lloyd iteration scales with the number of distinct coordinates
//! rather than the number of edge pixels. Centroids are seeded at the
//! midpoints of equal-size bins over the sorted distinct values, so a fit is
//! a pure function of its input.

/// Distinct sample value with its multiplicity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedValue {
    pub value: f64,
    pub weight: f64,
}

/// Collapse integer samples into sorted distinct weighted values.
pub fn weighted_values(samples: &[u32]) -> Vec<WeightedValue> {
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    let mut out: Vec<WeightedValue> = Vec::new();
    for v in sorted {
        let value = v as f64;
        match out.last_mut() {
            Some(last) if last.value == value => last.weight += 1.0,
            _ => out.push(WeightedValue { value, weight: 1.0 }),
        }
    }
    out
}

/// Result of one k-means fit. `labels[i]` is the cluster of the i-th
/// distinct value; clusters are numbered by increasing centroid.
#[derive(Clone, Debug)]
pub struct KMeansFit {
    pub labels: Vec<usize>,
    pub centroids: Vec<f64>,
    /// Weighted sum of squared distances to the assigned centroid.
    pub inertia: f64,
    pub iterations: usize,
}

impl KMeansFit {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
}

/// Fit `k` clusters to sorted distinct `values`.
///
/// `k` is capped at the number of distinct values; clusters that end up
/// empty are dropped, so the returned fit may hold fewer than `k` centroids.
pub fn fit(values: &[WeightedValue], k: usize, max_iterations: usize) -> KMeansFit {
    let n = values.len();
    let k = k.min(n).max(1);
    if n == 0 {
        return KMeansFit {
            labels: Vec::new(),
            centroids: Vec::new(),
            inertia: 0.0,
            iterations: 0,
        };
    }

    let mut centroids: Vec<f64> = (0..k).map(|i| values[(2 * i + 1) * n / (2 * k)].value).collect();
    let mut labels = vec![usize::MAX; n];
    let mut iterations = 0;

    while iterations < max_iterations.max(1) {
        iterations += 1;
        let changed = assign(values, &centroids, &mut labels);
        if !changed {
            break;
        }
        update_centroids(values, &labels, &mut centroids);
    }
    // Final assignment against the last centroid update.
    assign(values, &centroids, &mut labels);

    compact(values, labels, centroids, iterations)
}

/// Nearest-centroid assignment; ties go to the lower index.
fn assign(values: &[WeightedValue], centroids: &[f64], labels: &mut [usize]) -> bool {
    let mut changed = false;
    for (wv, label) in values.iter().zip(labels.iter_mut()) {
        let mut best = 0usize;
        let mut best_d = f64::INFINITY;
        for (j, &c) in centroids.iter().enumerate() {
            let d = (wv.value - c).abs();
            if d < best_d {
                best_d = d;
                best = j;
            }
        }
        if *label != best {
            *label = best;
            changed = true;
        }
    }
    changed
}

/// Weighted means; an empty cluster keeps its previous centroid.
fn update_centroids(values: &[WeightedValue], labels: &[usize], centroids: &mut [f64]) {
    let k = centroids.len();
    let mut sum = vec![0.0f64; k];
    let mut weight = vec![0.0f64; k];
    for (wv, &label) in values.iter().zip(labels) {
        sum[label] += wv.value * wv.weight;
        weight[label] += wv.weight;
    }
    for j in 0..k {
        if weight[j] > 0.0 {
            centroids[j] = sum[j] / weight[j];
        }
    }
}

/// Drop empty clusters, renumber by increasing centroid and compute inertia.
fn compact(
    values: &[WeightedValue],
    labels: Vec<usize>,
    centroids: Vec<f64>,
    iterations: usize,
) -> KMeansFit {
    let mut used = vec![false; centroids.len()];
    for &label in &labels {
        used[label] = true;
    }
    let mut order: Vec<usize> = (0..centroids.len()).filter(|&j| used[j]).collect();
    order.sort_by(|&a, &b| centroids[a].total_cmp(&centroids[b]).then(a.cmp(&b)));

    let mut remap = vec![usize::MAX; centroids.len()];
    for (new, &old) in order.iter().enumerate() {
        remap[old] = new;
    }
    let new_centroids: Vec<f64> = order.iter().map(|&j| centroids[j]).collect();
    let new_labels: Vec<usize> = labels.iter().map(|&l| remap[l]).collect();

    let inertia = values
        .iter()
        .zip(&new_labels)
        .map(|(wv, &l)| {
            let d = wv.value - new_centroids[l];
            d * d * wv.weight
        })
        .sum();

    KMeansFit {
        labels: new_labels,
        centroids: new_centroids,
        inertia,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(samples: &[u32]) -> Vec<WeightedValue> {
        weighted_values(samples)
    }

    #[test]
    fn weighted_values_collapse_duplicates() {
        let wv = values(&[5, 3, 5, 5, 9]);
        assert_eq!(wv.len(), 3);
        assert_eq!(wv[0], WeightedValue { value: 3.0, weight: 1.0 });
        assert_eq!(wv[1], WeightedValue { value: 5.0, weight: 3.0 });
        assert_eq!(wv[2], WeightedValue { value: 9.0, weight: 1.0 });
    }

    #[test]
    fn separates_two_well_spaced_groups() {
        let samples = [10, 11, 12, 10, 11, 80, 81, 82, 81];
        let fit = fit(&values(&samples), 2, 50);
        assert_eq!(fit.k(), 2);
        assert!((fit.centroids[0] - 10.8).abs() < 1e-9, "{:?}", fit.centroids);
        assert!((fit.centroids[1] - 81.0).abs() < 1e-9, "{:?}", fit.centroids);
        assert_eq!(fit.labels, vec![0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn k_is_capped_by_distinct_values() {
        let fit = fit(&values(&[4, 4, 7]), 5, 10);
        assert_eq!(fit.k(), 2);
        assert_eq!(fit.inertia, 0.0);
    }

    #[test]
    fn fit_is_deterministic() {
        let samples: Vec<u32> = (0..200).map(|i| (i * 37 % 101) as u32).collect();
        let a = fit(&values(&samples), 4, 100);
        let b = fit(&values(&samples), 4, 100);
        assert_eq!(a.labels, b.labels);
        assert_eq!(a.centroids, b.centroids);
        assert_eq!(a.inertia.to_bits(), b.inertia.to_bits());
    }

    #[test]
    fn inertia_does_not_increase_with_k() {
        let samples: Vec<u32> = [5u32, 6, 7, 30, 31, 32, 60, 61, 90, 91, 92, 93].to_vec();
        let wv = values(&samples);
        let mut prev = f64::INFINITY;
        for k in 1..=5 {
            let f = fit(&wv, k, 100);
            assert!(f.inertia <= prev + 1e-9, "k={k} inertia={} prev={prev}", f.inertia);
            prev = f.inertia;
        }
    }
}
