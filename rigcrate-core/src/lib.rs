//! Core data structures and error types for rigcrate
//!
//! This crate provides the fundamental types shared by the bone generation
//! pipeline: points, point clouds, body-part labels, per-label maps and
//! the common error type.

pub mod point;
pub mod point_cloud;
pub mod label;
pub mod label_map;
pub mod bone;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use label::*;
pub use label_map::*;
pub use bone::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix3};

/// Point cloud for every labeled body part of a run
pub type PointCloudSet = LabelMap<PointCloud3d>;

/// Generated endpoints for every labeled body part of a run
pub type BoneEndpointsSet = LabelMap<BoneEndpoints>;
