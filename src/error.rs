use std::path::PathBuf;
use thiserror::Error;

/// Error types for the cube-kmeans library
#[derive(Error, Debug)]
pub enum KMeansError {
    /// The input file could not be read, or the report sink failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the input file is malformed
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The number of clusters k is invalid (must be > 0)
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// There is nothing to cluster
    #[error("Cannot fit k-means on an empty data set")]
    EmptyInput,

    /// Not enough distinct data points for the requested number of clusters
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call train() or fit() first.")]
    NotFitted,

    /// Dimension mismatch between data and model
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),
}

impl KMeansError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KMeansError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        KMeansError::Parse {
            line,
            reason: reason.into(),
        }
    }
}
