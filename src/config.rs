/// Number of clusters used for cube data: one per face.
pub const CUBE_FACES: usize = 6;

/// Strategy used to pick the starting centroids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Init {
    /// Sample k distinct data points uniformly without replacement
    #[default]
    Random,

    /// k-means++ seeding: each new centroid is drawn with probability
    /// proportional to its squared distance from the nearest chosen one
    KMeansPlusPlus,
}

/// Configuration for the k-means algorithm
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Maximum number of Lloyd iterations
    pub max_iters: usize,

    /// Convergence tolerance. When the largest centroid movement is below this
    /// threshold, the algorithm stops early. Set to a negative value to only
    /// stop once assignments no longer change.
    pub tol: f64,

    /// Random seed for centroid initialization
    pub seed: u64,

    /// Centroid initialization strategy
    pub init: Init,

    /// Log per-iteration progress at info level instead of debug
    pub verbose: bool,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: CUBE_FACES,
            max_iters: 100,
            tol: 1e-4,
            seed: 0,
            init: Init::Random,
            verbose: false,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the maximum number of iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the initialization strategy
    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
