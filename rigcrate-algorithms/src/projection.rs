//! Axis projection and extremity selection

use rigcrate_core::{Error, Point3d, PointCloud3d, Result, Vector3d};

use crate::options::ExtremitySelection;

/// Project every centered point onto the line spanned by `axis`
///
/// `proj(p) = (p · axis / axis · axis) * axis`. The axis must be non-zero;
/// the eigen solver never returns a zero vector.
pub fn project(centered: &PointCloud3d, axis: &Vector3d) -> PointCloud3d {
    let denom = axis.dot(axis);
    centered
        .iter()
        .map(|p| Point3d::from(axis * (p.coords.dot(axis) / denom)))
        .collect()
}

/// The projected points with the largest and the smallest Euclidean norm
///
/// Ties go to the first point in input order.
///
/// # Errors
/// * `Error::InsufficientPoints` if `projected` is empty
pub fn extremities(projected: &PointCloud3d) -> Result<(Point3d, Point3d)> {
    select_by_key(projected, |p| p.coords.norm())
}

/// The projected points with the largest and the smallest signed coordinate
/// along `axis`
///
/// Ties go to the first point in input order.
///
/// # Errors
/// * `Error::InsufficientPoints` if `projected` is empty
pub fn signed_extremities(projected: &PointCloud3d, axis: &Vector3d) -> Result<(Point3d, Point3d)> {
    select_by_key(projected, |p| p.coords.dot(axis))
}

/// Dispatch on the configured selection rule
pub fn select_extremities(
    projected: &PointCloud3d,
    axis: &Vector3d,
    selection: ExtremitySelection,
) -> Result<(Point3d, Point3d)> {
    match selection {
        ExtremitySelection::Magnitude => extremities(projected),
        ExtremitySelection::SignedAxis => signed_extremities(projected, axis),
    }
}

/// Returns `(argmax, argmin)` of `key`, first occurrence on ties
fn select_by_key<F>(points: &PointCloud3d, key: F) -> Result<(Point3d, Point3d)>
where
    F: Fn(&Point3d) -> f64,
{
    let mut iter = points.iter();
    let first = iter.next().ok_or(Error::InsufficientPoints { required: 1, actual: 0 })?;

    let first_key = key(first);
    let (mut max_point, mut max_key) = (*first, first_key);
    let (mut min_point, mut min_key) = (*first, first_key);

    for point in iter {
        let k = key(point);
        if k > max_key {
            max_point = *point;
            max_key = k;
        }
        if k < min_key {
            min_point = *point;
            min_key = k;
        }
    }

    Ok((max_point, min_point))
}
