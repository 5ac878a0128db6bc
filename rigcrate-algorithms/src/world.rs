//! Mapping local extremities back to world space

use rigcrate_core::{BoneEndpoints, Point3d};

/// Translate a pair of centroid-relative points back by `origin`
pub fn to_world(origin: &Point3d, local: (Point3d, Point3d)) -> BoneEndpoints {
    let (first, second) = local;
    BoneEndpoints::new(origin + first.coords, origin + second.coords)
}
