//! Point, vector and matrix types

use nalgebra::{Matrix3, Point3, Vector3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A 3x3 matrix with double precision entries
pub type Matrix3d = Matrix3<f64>;

/// Build a point from a `[x, y, z]` triple
pub fn point_from_array(coords: [f64; 3]) -> Point3d {
    Point3d::new(coords[0], coords[1], coords[2])
}

/// Flatten a point into a `[x, y, z]` triple
pub fn point_to_array(point: &Point3d) -> [f64; 3] {
    [point.x, point.y, point.z]
}
