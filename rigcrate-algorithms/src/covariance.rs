//! Sample covariance estimation

use rigcrate_core::{Error, Matrix3d, PointCloud3d, Result, Vector3d};

/// Sample covariance matrix of a centered point cloud
///
/// `M[i][j] = Σ_p (mean_i - p_i)(mean_j - p_j) / (n - 1)`, where `mean` is the
/// mean of the given cloud (zero for a properly centered one). The sum is
/// accumulated in full and divided once at the end.
///
/// # Errors
/// * `Error::InsufficientPoints` if the cloud has fewer than 2 points
pub fn covariance(centered: &PointCloud3d) -> Result<Matrix3d> {
    let n = centered.len();
    if n < 2 {
        return Err(Error::InsufficientPoints { required: 2, actual: n });
    }

    let mean: Vector3d = centered.iter().map(|p| p.coords).sum::<Vector3d>() / n as f64;

    let mut sum = Matrix3d::zeros();
    for p in centered {
        let d = mean - p.coords;
        for i in 0..3 {
            for j in 0..3 {
                sum[(i, j)] += d[i] * d[j];
            }
        }
    }

    Ok(sum / (n - 1) as f64)
}
