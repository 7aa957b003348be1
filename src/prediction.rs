use crate::distance::argmin;
use std::fmt;

/// Cluster assignment for one feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Index of the nearest centroid
    pub cluster_id: usize,

    /// Euclidean distance to every centroid, in centroid-index order
    pub distances: Vec<f32>,
}

impl Prediction {
    /// Build a prediction from a non-empty distance vector; the cluster id is
    /// the index of the smallest distance, lowest index on ties. NaN distances
    /// are never picked while a number is available.
    pub fn from_distances(distances: Vec<f32>) -> Self {
        Self {
            cluster_id: argmin(&distances),
            distances,
        }
    }

    /// Distance to the assigned centroid
    ///
    /// # Panics
    ///
    /// Panics if the prediction was built from an empty distance vector.
    pub fn distance(&self) -> f32 {
        self.distances[self.cluster_id]
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cluster: {}", self.cluster_id)?;
        write!(f, "Distances:")?;
        for d in &self.distances {
            write!(f, " {}", d)?;
        }
        Ok(())
    }
}
