use crate::config::{Init, KMeansConfig};
use crate::distance::{max_centroid_shift, nearest_centroid, squared_euclidean};
use crate::error::KMeansError;
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::time::Instant;

/// Result of the k-means algorithm
#[derive(Debug, Clone)]
pub struct KMeansResult {
    pub centroids: Array2<f32>,
    pub labels: Vec<usize>,
    pub n_iterations: usize,
    /// Sum of squared distances from each point to its assigned centroid
    pub inertia: f64,
    pub converged: bool,
}

/// Run Lloyd's k-means algorithm.
///
/// Each iteration assigns every point to its nearest centroid (lowest index on
/// ties), then moves every centroid to the mean of its points. Clusters that
/// end up empty are re-seeded with the point farthest from its own centroid.
/// The loop stops when no assignment changes, when the largest centroid
/// movement drops below `config.tol`, or after `config.max_iters` iterations.
pub fn kmeans_lloyd(
    data: &ArrayView2<f32>,
    config: &KMeansConfig,
) -> Result<KMeansResult, KMeansError> {
    let n_samples = data.nrows();
    let n_features = data.ncols();
    let k = config.k;

    // Validate inputs
    if k == 0 {
        return Err(KMeansError::InvalidK(
            "k must be greater than 0".to_string(),
        ));
    }

    if n_samples == 0 {
        return Err(KMeansError::EmptyInput);
    }

    if n_features == 0 {
        return Err(KMeansError::InvalidDimensions(
            "data has no feature columns".to_string(),
        ));
    }

    let distinct = distinct_rows(data);
    if distinct.len() < k {
        return Err(KMeansError::InsufficientData(format!(
            "Number of distinct samples ({}) is less than k ({})",
            distinct.len(),
            k
        )));
    }

    let progress = if config.verbose {
        log::Level::Info
    } else {
        log::Level::Debug
    };

    log::info!(
        "Training k-means: {} samples ({} distinct), {} features, {} clusters, seed {}, {:?} init",
        n_samples,
        distinct.len(),
        n_features,
        k,
        config.seed,
        config.init
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut centroids = match config.init {
        Init::Random => initialize_random(data, &distinct, k, &mut rng),
        Init::KMeansPlusPlus => initialize_plusplus(data, &distinct, k, &mut rng),
    };

    let mut labels = vec![usize::MAX; n_samples];
    let mut point_dists = vec![0.0f64; n_samples];
    let mut n_iterations = 0;
    let mut converged = false;

    for iteration in 0..config.max_iters {
        let iter_start = Instant::now();
        n_iterations = iteration + 1;

        // Assignment step, accumulating cluster sums as we go
        let mut cluster_sums: Array2<f64> = Array2::zeros((k, n_features));
        let mut cluster_counts = vec![0usize; k];
        let mut n_changed = 0;

        for (i, point) in data.outer_iter().enumerate() {
            let (label, dist) = nearest_centroid(&point, &centroids.view());
            if labels[i] != label {
                labels[i] = label;
                n_changed += 1;
            }
            point_dists[i] = dist;

            cluster_counts[label] += 1;
            for (sum, &x) in cluster_sums.row_mut(label).iter_mut().zip(point.iter()) {
                *sum += x as f64;
            }
        }

        if n_changed == 0 {
            log::log!(
                progress,
                "  Converged after {} iterations (no assignment changed)",
                iteration + 1
            );
            converged = true;
            break;
        }

        // Update step
        let prev_centroids = centroids.clone();
        let mut empty_clusters = Vec::new();

        for (cluster_idx, &count) in cluster_counts.iter().enumerate() {
            if count > 0 {
                for j in 0..n_features {
                    centroids[[cluster_idx, j]] =
                        (cluster_sums[[cluster_idx, j]] / count as f64) as f32;
                }
            } else {
                empty_clusters.push(cluster_idx);
            }
        }

        if !empty_clusters.is_empty() {
            reseed_empty_clusters(data, &mut centroids, &empty_clusters, &point_dists);
            log::warn!(
                "Re-seeded {} empty clusters at iteration {}",
                empty_clusters.len(),
                iteration + 1
            );
        }

        // Check convergence
        let shift = max_centroid_shift(&prev_centroids.view(), &centroids.view());

        log::log!(
            progress,
            "  Iteration {}/{}: {} reassigned, shift = {:.6}, time = {:.4}s",
            iteration + 1,
            config.max_iters,
            n_changed,
            shift,
            iter_start.elapsed().as_secs_f64()
        );

        if config.tol >= 0.0 && shift < config.tol {
            log::log!(
                progress,
                "  Converged after {} iterations (shift {:.6} < tol {:.6})",
                iteration + 1,
                shift,
                config.tol
            );
            converged = true;
            break;
        }
    }

    if !converged {
        log::warn!(
            "k-means stopped at the iteration cap ({}) without converging",
            config.max_iters
        );
    }

    // Final labels against the centroids actually returned
    let mut inertia = 0.0;
    for (i, point) in data.outer_iter().enumerate() {
        let (label, dist) = nearest_centroid(&point, &centroids.view());
        labels[i] = label;
        inertia += dist;
    }

    log::info!(
        "Finished k-means after {} iterations, inertia {:.6}",
        n_iterations,
        inertia
    );

    Ok(KMeansResult {
        centroids,
        labels,
        n_iterations,
        inertia,
        converged,
    })
}

/// Indices of the first occurrence of every distinct row, in row order.
fn distinct_rows(data: &ArrayView2<f32>) -> Vec<usize> {
    let mut seen = HashSet::new();
    data.outer_iter()
        .enumerate()
        .filter(|(_, row)| seen.insert(row_key(row)))
        .map(|(i, _)| i)
        .collect()
}

fn row_key(row: &ArrayView1<f32>) -> Vec<u32> {
    // -0.0 and 0.0 are the same point
    row.iter()
        .map(|&x| if x == 0.0 { 0 } else { x.to_bits() })
        .collect()
}

fn centroids_from_rows(data: &ArrayView2<f32>, rows: &[usize]) -> Array2<f32> {
    let mut centroids = Array2::zeros((rows.len(), data.ncols()));
    for (mut centroid, &data_idx) in centroids.outer_iter_mut().zip(rows) {
        centroid.assign(&data.row(data_idx));
    }
    centroids
}

/// Initialize centroids by sampling k distinct data points
fn initialize_random(
    data: &ArrayView2<f32>,
    distinct: &[usize],
    k: usize,
    rng: &mut ChaCha8Rng,
) -> Array2<f32> {
    let selected: Vec<usize> = distinct.choose_multiple(rng, k).cloned().collect();
    centroids_from_rows(data, &selected)
}

/// k-means++ initialization over the distinct data points
fn initialize_plusplus(
    data: &ArrayView2<f32>,
    distinct: &[usize],
    k: usize,
    rng: &mut ChaCha8Rng,
) -> Array2<f32> {
    let mut selected = Vec::with_capacity(k);
    selected.push(distinct[rng.gen_range(0..distinct.len())]);

    let mut min_distances = vec![f64::INFINITY; distinct.len()];

    while selected.len() < k {
        let last = data.row(selected[selected.len() - 1]);
        for (min_dist, &idx) in min_distances.iter_mut().zip(distinct) {
            *min_dist = min_dist.min(squared_euclidean(&data.row(idx), &last));
        }

        let next = match WeightedIndex::new(&min_distances) {
            Ok(dist) => distinct[dist.sample(rng)],
            // Every remaining weight underflowed to zero; any unchosen point will do
            Err(_) => match distinct.iter().find(|idx| !selected.contains(*idx)) {
                Some(&idx) => idx,
                None => break,
            },
        };
        selected.push(next);
    }

    centroids_from_rows(data, &selected)
}

/// Move each empty cluster onto the point currently farthest from its centroid.
///
/// Points are taken in order of decreasing distance (lowest index on ties), and
/// no point is used twice.
fn reseed_empty_clusters(
    data: &ArrayView2<f32>,
    centroids: &mut Array2<f32>,
    empty_clusters: &[usize],
    point_dists: &[f64],
) {
    let mut order: Vec<usize> = (0..point_dists.len()).collect();
    order.sort_by(|&a, &b| point_dists[b].total_cmp(&point_dists[a]));

    for (&cluster_idx, &data_idx) in empty_clusters.iter().zip(&order) {
        centroids.row_mut(cluster_idx).assign(&data.row(data_idx));
    }
}
