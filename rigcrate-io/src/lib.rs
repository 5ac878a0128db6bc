//! I/O operations for labeled point cloud sets
//!
//! This crate saves and loads the label → point cloud mapping consumed by
//! the bone generation pipeline, and serializes generated endpoints.

pub mod settings;

#[cfg(test)]
mod tests;

pub use settings::*;

use rigcrate_core::{Error, PointCloudSet, Result};
use std::path::Path;

/// Trait for reading point cloud sets from files
pub trait PointCloudSetReader {
    fn read_point_cloud_set<P: AsRef<Path>>(path: P) -> Result<PointCloudSet>;
}

/// Trait for writing point cloud sets to files
pub trait PointCloudSetWriter {
    fn write_point_cloud_set<P: AsRef<Path>>(set: &PointCloudSet, path: P) -> Result<()>;
}

/// Auto-detect format and read a point cloud set
pub fn read_point_cloud_set<P: AsRef<Path>>(path: P) -> Result<PointCloudSet> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("json") => JsonSettings::read_point_cloud_set(path),
        _ => Err(Error::UnsupportedFormat(format!(
            "Unsupported settings format: {:?}",
            path.extension()
        ))),
    }
}

/// Auto-detect format and write a point cloud set
pub fn write_point_cloud_set<P: AsRef<Path>>(set: &PointCloudSet, path: P) -> Result<()> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("json") => JsonSettings::write_point_cloud_set(set, path),
        _ => Err(Error::UnsupportedFormat(format!(
            "Unsupported settings format: {:?}",
            path.extension()
        ))),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
}
