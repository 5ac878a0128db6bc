//! # rigcrate Algorithms
//!
//! The bone generation pipeline: for every labeled point cloud, remove the
//! centroid, estimate the covariance matrix, extract its dominant eigenvector
//! by power iteration, project the points onto that axis and keep the two
//! extremal projections as the bone endpoints.
//!
//! ```rust
//! use rigcrate_core::{Label, PointCloud3d, PointCloudSet};
//! use rigcrate_algorithms::generate;
//!
//! let mut clouds = PointCloudSet::new();
//! clouds.insert(
//!     Label::Body,
//!     PointCloud3d::from_arrays([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 2.0, 0.0], [0.0, 3.0, 0.0]]),
//! );
//!
//! let bones = generate(&clouds).unwrap();
//! assert_eq!(bones.len(), 1);
//! ```

pub mod centroid;
pub mod covariance;
pub mod eigen;
pub mod projection;
pub mod world;
pub mod options;
pub mod observer;
pub mod generation;

// Re-export commonly used items
pub use centroid::*;
pub use covariance::*;
pub use eigen::*;
pub use projection::*;
pub use world::*;
pub use options::*;
pub use observer::*;
pub use generation::*;
