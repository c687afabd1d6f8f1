//! Order statistics with pinned tie-break and interpolation rules.

/// Most frequent value; ties resolve to the smallest value.
pub fn mode(values: &[u32]) -> Option<u32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mut best: Option<(u32, usize)> = None;
    let mut i = 0;
    while i < sorted.len() {
        let v = sorted[i];
        let mut j = i;
        while j < sorted.len() && sorted[j] == v {
            j += 1;
        }
        let count = j - i;
        // Strict comparison keeps the smaller value on ties (ascending scan).
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((v, count));
        }
        i = j;
    }
    best.map(|(v, _)| v)
}

/// Quantile of ascending `sorted` with linear interpolation between the
/// closest ranks at position `q * (n - 1)`.
pub fn quantile_sorted(sorted: &[f32], q: f32) -> Option<f32> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let pos = q as f64 * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    let a = sorted[lo] as f64;
    let b = sorted[hi.min(n - 1)] as f64;
    Some((a + (b - a) * frac) as f32)
}
