//! Point cloud data structures and functionality

use crate::point::*;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A generic point cloud container
///
/// Insertion order is preserved; extremity selection breaks ties by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud<T> {
    pub points: Vec<T>,
}

/// A point cloud with double precision 3D points
pub type PointCloud3d = PointCloud<Point3d>;

impl<T> PointCloud<T> {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
        }
    }

    /// Create a new point cloud with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a point cloud from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the cloud
    pub fn push(&mut self, point: T) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    /// Borrow the points as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.points
    }
}

impl<T> Default for PointCloud<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for PointCloud<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IndexMut<usize> for PointCloud<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.points[index]
    }
}

impl<T> From<Vec<T>> for PointCloud<T> {
    fn from(points: Vec<T>) -> Self {
        Self::from_points(points)
    }
}

impl<T> IntoIterator for PointCloud<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PointCloud<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> Extend<T> for PointCloud<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<T> FromIterator<T> for PointCloud<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

impl PointCloud<Point3d> {
    /// Build a cloud from `[x, y, z]` triples
    pub fn from_arrays<I: IntoIterator<Item = [f64; 3]>>(coords: I) -> Self {
        coords.into_iter().map(point_from_array).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let mut cloud = PointCloud3d::new();
        cloud.push(Point3d::new(2.0, 0.0, 0.0));
        cloud.push(Point3d::new(1.0, 0.0, 0.0));
        cloud.extend([Point3d::new(3.0, 0.0, 0.0)]);

        let xs: Vec<f64> = cloud.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 1.0, 3.0]);
        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud[1], Point3d::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_arrays() {
        let cloud = PointCloud3d::from_arrays([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]);
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud[1], Point3d::new(3.0, 4.0, 5.0));
        assert!(!cloud.is_empty());
        assert!(PointCloud3d::default().is_empty());
    }
}
