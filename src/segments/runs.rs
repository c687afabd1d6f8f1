/// Split ascending `sorted` into maximal runs whose consecutive values
/// differ by at most `max_gap`. Runs with fewer than two members are
/// dropped since they cannot span a segment.
pub fn split_runs(sorted: &[f32], max_gap: f32) -> Vec<&[f32]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=sorted.len() {
        let boundary = i == sorted.len() || sorted[i] - sorted[i - 1] > max_gap;
        if boundary {
            if i - start >= 2 {
                runs.push(&sorted[start..i]);
            }
            start = i;
        }
    }
    runs
}
