use crate::algorithm::kmeans_lloyd;
use crate::config::KMeansConfig;
use crate::distance::distances_to_centroids;
use crate::error::KMeansError;
use crate::prediction::Prediction;
use ndarray::{Array2, ArrayView1, ArrayView2};

/// K-means clustering model over `f32` feature vectors.
///
/// Training runs Lloyd's algorithm with seeded initialization, so two models
/// trained with the same configuration on the same data hold identical
/// centroids. Prediction only reads the model.
///
/// # Example
///
/// ```
/// use cube_kmeans::KMeans;
/// use ndarray::array;
///
/// let data = array![[0.0f32, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
///
/// let mut kmeans = KMeans::new(2, 2);
/// kmeans.train(&data.view()).unwrap();
///
/// let predictions = kmeans.predict(&data.view()).unwrap();
/// assert_eq!(predictions[0].cluster_id, predictions[1].cluster_id);
/// assert_ne!(predictions[0].cluster_id, predictions[2].cluster_id);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Model configuration
    config: KMeansConfig,

    /// Number of features (dimensions)
    d: usize,

    /// Trained centroids (None if not yet fitted)
    centroids: Option<Array2<f32>>,

    /// Cluster of each training point
    labels: Vec<usize>,

    n_iterations: usize,
    inertia: f64,
    converged: bool,
}

impl KMeans {
    /// Create a new KMeans instance with default configuration.
    ///
    /// # Arguments
    ///
    /// * `d` - Number of features (dimensions) in the data
    /// * `k` - Number of clusters; `train()` rejects 0 with
    ///   [`KMeansError::InvalidK`]
    pub fn new(d: usize, k: usize) -> Self {
        Self {
            d,
            ..Self::with_config(KMeansConfig::new(k))
        }
    }

    /// Create a new KMeans instance with custom configuration.
    pub fn with_config(config: KMeansConfig) -> Self {
        Self {
            d: 0, // Will be set on first train call
            config,
            centroids: None,
            labels: Vec::new(),
            n_iterations: 0,
            inertia: 0.0,
            converged: false,
        }
    }

    /// Train the model on the given data of shape (n_samples, n_features).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - k is 0
    /// - The data is empty
    /// - There are fewer distinct samples than k
    /// - Data dimensions don't match the model
    pub fn train(&mut self, data: &ArrayView2<f32>) -> Result<(), KMeansError> {
        let n_features = data.ncols();

        // Set dimensions on first call, validate on subsequent calls
        if self.d == 0 {
            self.d = n_features;
        } else if n_features != self.d {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        let result = kmeans_lloyd(data, &self.config)?;

        self.centroids = Some(result.centroids);
        self.labels = result.labels;
        self.n_iterations = result.n_iterations;
        self.inertia = result.inertia;
        self.converged = result.converged;
        Ok(())
    }

    /// Fit the model to the data. Equivalent to `train()`, returning
    /// `&mut Self` for method chaining.
    pub fn fit(&mut self, data: &ArrayView2<f32>) -> Result<&mut Self, KMeansError> {
        self.train(data)?;
        Ok(self)
    }

    /// Predict the cluster of a single feature vector, together with its
    /// distance to every centroid.
    ///
    /// # Errors
    ///
    /// Returns an error if the model has not been fitted, or if the vector's
    /// length differs from the training data's feature count.
    pub fn predict_one(&self, vector: &ArrayView1<f32>) -> Result<Prediction, KMeansError> {
        let centroids = self.fitted_centroids()?;

        if vector.len() != self.d {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d,
                vector.len()
            )));
        }

        Ok(Prediction::from_distances(distances_to_centroids(
            vector,
            &centroids.view(),
        )))
    }

    /// Predict cluster assignments for every row of `data`, in row order.
    pub fn predict(&self, data: &ArrayView2<f32>) -> Result<Vec<Prediction>, KMeansError> {
        let centroids = self.fitted_centroids()?;

        let n_features = data.ncols();
        if n_features != self.d {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        Ok(data
            .outer_iter()
            .map(|row| Prediction::from_distances(distances_to_centroids(&row, &centroids.view())))
            .collect())
    }

    /// Fit the model and predict cluster assignments in one call.
    pub fn fit_predict(&mut self, data: &ArrayView2<f32>) -> Result<Vec<Prediction>, KMeansError> {
        self.train(data)?;
        self.predict(data)
    }

    fn fitted_centroids(&self) -> Result<&Array2<f32>, KMeansError> {
        self.centroids.as_ref().ok_or(KMeansError::NotFitted)
    }

    /// Get the centroids of the fitted model, `None` before training.
    pub fn centroids(&self) -> Option<&Array2<f32>> {
        self.centroids.as_ref()
    }

    /// Cluster assigned to each training point by the last `train()` call.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of features (dimensions).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }

    /// Lloyd iterations run by the last `train()` call.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Sum of squared distances from each training point to its centroid.
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Whether the last `train()` call stopped before the iteration cap.
    pub fn converged(&self) -> bool {
        self.converged
    }
}
