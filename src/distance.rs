use ndarray::{ArrayView1, ArrayView2};

/// Squared L2 distance between two vectors of equal length.
///
/// Accumulates in `f64` so identical vectors always yield exactly `0.0`.
#[inline]
pub fn squared_euclidean(a: &ArrayView1<f32>, b: &ArrayView1<f32>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum()
}

/// Euclidean distance from `point` to every centroid, in centroid-index order.
pub fn distances_to_centroids(point: &ArrayView1<f32>, centroids: &ArrayView2<f32>) -> Vec<f32> {
    centroids
        .outer_iter()
        .map(|c| squared_euclidean(point, &c).sqrt() as f32)
        .collect()
}

/// Find the nearest centroid for a single point.
///
/// Returns the centroid index and the squared distance to it. On ties the
/// lowest index wins.
pub fn nearest_centroid(point: &ArrayView1<f32>, centroids: &ArrayView2<f32>) -> (usize, f64) {
    let mut best_label = 0;
    let mut best_dist = f64::INFINITY;

    for (j, c) in centroids.outer_iter().enumerate() {
        let dist = squared_euclidean(point, &c);
        if dist < best_dist {
            best_dist = dist;
            best_label = j;
        }
    }

    (best_label, best_dist)
}

/// Index of the smallest value, lowest index on ties. NaN entries are never
/// chosen unless every entry is NaN (or the slice is empty), in which case 0
/// is returned.
pub fn argmin(values: &[f32]) -> usize {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some(b) if values[b] <= v => {}
            _ => best = Some(i),
        }
    }
    best.unwrap_or(0)
}

/// Largest L2 movement of any single centroid between two iterations
pub fn max_centroid_shift(old_centroids: &ArrayView2<f32>, new_centroids: &ArrayView2<f32>) -> f64 {
    old_centroids
        .outer_iter()
        .zip(new_centroids.outer_iter())
        .map(|(old_c, new_c)| squared_euclidean(&old_c, &new_c).sqrt())
        .fold(0.0, f64::max)
}
