//! # cube-kmeans
//!
//! K-means clustering of color-vector records, compatible with ndarray.
//!
//! Each record is one line of a headerless, comma-separated file holding three
//! color channels and one auxiliary value. The crate loads those records,
//! fits a K-means model (six clusters by default, one per face of a cube) and
//! reports, for every record, the nearest cluster and its distance to every
//! centroid.
//!
//! ## Features
//!
//! - **Lloyd's algorithm**: nearest-centroid assignment (lowest index on ties)
//!   alternating with mean updates, until assignments settle or centroids stop
//!   moving
//! - **Reproducible**: initialization is driven by an explicit seed
//!   (`ChaCha8Rng`), either uniform sampling of distinct points or k-means++
//! - **Empty clusters**: re-seeded with the point farthest from its centroid
//! - **scikit-learn style API**: `train()`, `fit()`, `predict()`, `fit_predict()`
//!
//! ## Example
//!
//! ```rust
//! use cube_kmeans::{assemble, parse_records, KMeans, KMeansConfig};
//! use std::io::Cursor;
//!
//! let input = "0,0,0,0\n0,0,0,0\n255,255,255,1\n255,255,255,1\n";
//! let records = parse_records(Cursor::new(input)).unwrap();
//! let data = assemble(&records);
//!
//! let mut kmeans = KMeans::with_config(KMeansConfig::new(2).with_seed(7));
//! let predictions = kmeans.fit_predict(&data.view()).unwrap();
//!
//! assert_eq!(predictions.len(), 4);
//! for p in &predictions {
//!     assert_eq!(p.distances.len(), 2);
//!     assert_eq!(p.distance(), 0.0);
//! }
//! ```

mod algorithm;
mod config;
mod distance;
mod error;
mod kmeans;
mod load;
mod prediction;
mod record;
mod report;

pub use config::{Init, KMeansConfig, CUBE_FACES};
pub use error::KMeansError;
pub use kmeans::KMeans;
pub use load::{load_records, parse_records, DEFAULT_INPUT};
pub use prediction::Prediction;
pub use record::{assemble, Record, N_FEATURES};
pub use report::{report, write_predictions};
