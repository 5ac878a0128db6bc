//! Centroid computation and recentering

use rigcrate_core::{Error, Point3d, PointCloud3d, Result, Vector3d};

/// Arithmetic mean of all points in the cloud
///
/// # Errors
/// * `Error::InsufficientPoints` if the cloud is empty
pub fn centroid(cloud: &PointCloud3d) -> Result<Point3d> {
    if cloud.is_empty() {
        return Err(Error::InsufficientPoints { required: 1, actual: 0 });
    }

    let sum: Vector3d = cloud.iter().map(|p| p.coords).sum();
    Ok(Point3d::from(sum / cloud.len() as f64))
}

/// Express every point relative to `origin`, keeping order and count
pub fn recenter(origin: &Point3d, cloud: &PointCloud3d) -> PointCloud3d {
    cloud.iter().map(|p| Point3d::from(p - origin)).collect()
}
