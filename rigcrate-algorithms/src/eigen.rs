//! Dominant eigen-pair extraction by power iteration
//!
//! The eigenvalue estimate at each step is the component of `M·v` with the
//! largest absolute value rather than the Rayleigh quotient. It is cheap and
//! enough to recover the principal axis, but it is not the eigenvalue itself
//! unless the eigenvector is axis-aligned. The iteration count is the only
//! termination criterion; there is no tolerance check.
//!
//! Known limitations: repeated or near-equal top eigenvalues (a spherical
//! cloud) are not detected, and a seed that is already an eigenvector of a
//! smaller eigenvalue stays there.

use rigcrate_core::{Error, Matrix3d, Result, Vector3d};
use serde::{Deserialize, Serialize};

/// Default number of power iterations
pub const DEFAULT_ITERATIONS: usize = 100;

/// Starting vectors, tried in order when a seed lies in the null space
const SEEDS: [[f64; 3]; 3] = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]];

/// Approximate dominant eigen-pair of a matrix
///
/// The eigenvector is scaled so that its largest-magnitude component is 1;
/// its length carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenEstimate {
    pub eigenvalue: f64,
    pub eigenvector: Vector3d,
}

impl EigenEstimate {
    /// Unit-length copy of the eigenvector
    pub fn direction(&self) -> Vector3d {
        self.eigenvector.normalize()
    }
}

/// Why a single power-iteration run stopped early
#[derive(Debug, Clone, Copy, PartialEq)]
enum Collapse {
    ZeroNorm,
    ZeroEstimate,
    NonFinite,
}

/// Extract the dominant eigen-pair of `m` with a fixed number of iterations
///
/// Iteration starts from `(0, 0, 1)`. If that seed is mapped to the zero
/// vector the run restarts from `(0, 1, 0)` and then `(1, 0, 0)`.
///
/// # Errors
/// * `Error::InvalidData` if `iterations` is zero
/// * `Error::NumericalDegeneracy` if every seed collapses to a zero estimate
///   (e.g. the zero matrix), or the matrix contains non-finite values
pub fn dominant_eigen(m: &Matrix3d, iterations: usize) -> Result<EigenEstimate> {
    if iterations == 0 {
        return Err(Error::InvalidData("Iterations must be positive".to_string()));
    }

    for seed in SEEDS {
        match power_iteration(m, Vector3d::from(seed), iterations) {
            Ok(estimate) => return Ok(estimate),
            Err(Collapse::ZeroEstimate) => continue,
            Err(Collapse::ZeroNorm) => {
                return Err(Error::NumericalDegeneracy(
                    "cannot normalize a zero vector".to_string(),
                ))
            }
            Err(Collapse::NonFinite) => {
                return Err(Error::NumericalDegeneracy(
                    "non-finite value during power iteration".to_string(),
                ))
            }
        }
    }

    Err(Error::NumericalDegeneracy(
        "dominant value estimate is zero from every seed; matrix has no dominant direction".to_string(),
    ))
}

fn power_iteration(
    m: &Matrix3d,
    seed: Vector3d,
    iterations: usize,
) -> std::result::Result<EigenEstimate, Collapse> {
    let mut v = seed;
    let mut lambda = 0.0;

    for _ in 0..iterations {
        let norm = v.norm();
        if !norm.is_finite() {
            return Err(Collapse::NonFinite);
        }
        if norm == 0.0 {
            return Err(Collapse::ZeroNorm);
        }

        let w = m * (v / norm);
        lambda = max_abs_component(&w);

        if !lambda.is_finite() {
            return Err(Collapse::NonFinite);
        }
        if lambda == 0.0 {
            return Err(Collapse::ZeroEstimate);
        }

        v = w / lambda;
    }

    Ok(EigenEstimate {
        eigenvalue: lambda,
        eigenvector: v,
    })
}

/// Signed component with the largest magnitude; the first one wins ties
fn max_abs_component(w: &Vector3d) -> f64 {
    let mut best = w[0];
    for &component in w.iter().skip(1) {
        if component.is_nan() || component.abs() > best.abs() {
            best = component;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_line_along_y_recovers_axis() {
        let m = Matrix3d::new(
            0.0, 0.0, 0.0,
            0.0, 2.5, 0.0,
            0.0, 0.0, 0.0,
        );

        let estimate = dominant_eigen(&m, DEFAULT_ITERATIONS).unwrap();
        assert_relative_eq!(estimate.eigenvalue, 2.5);
        assert_relative_eq!(estimate.eigenvector, Vector3d::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_first_seed_is_used_when_it_works() {
        let m = Matrix3d::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 4.0,
        );

        let estimate = dominant_eigen(&m, 1).unwrap();
        assert_eq!(estimate.eigenvalue, 4.0);
        assert_eq!(estimate.eigenvector, Vector3d::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_matches_symmetric_eigen_direction() {
        let m = Matrix3d::new(
            4.0, 1.0, 0.5,
            1.0, 3.0, 0.2,
            0.5, 0.2, 1.0,
        );

        let estimate = dominant_eigen(&m, DEFAULT_ITERATIONS).unwrap();

        let reference = m.symmetric_eigen();
        let index = reference.eigenvalues.imax();
        let expected = reference.eigenvectors.column(index).into_owned();

        let alignment = estimate.direction().dot(&expected).abs();
        assert_abs_diff_eq!(alignment, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_eigenvalue_is_max_abs_component() {
        let m = Matrix3d::new(
            4.0, 1.0, 0.5,
            1.0, 3.0, 0.2,
            0.5, 0.2, 1.0,
        );

        let estimate = dominant_eigen(&m, DEFAULT_ITERATIONS).unwrap();

        // Not the Rayleigh quotient: the estimate is the largest component of M·v̂
        let w = m * estimate.direction();
        assert_abs_diff_eq!(estimate.eigenvalue, w.amax(), epsilon = 1e-9);

        // The returned vector is scaled so that its largest component is 1
        assert_abs_diff_eq!(estimate.eigenvector.amax(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_seed_eigenvector_is_a_fixed_point() {
        // (0, 0, 1) is already an eigenvector of the smallest eigenvalue
        let m = Matrix3d::new(
            3.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 0.5,
        );

        let estimate = dominant_eigen(&m, DEFAULT_ITERATIONS).unwrap();
        assert_eq!(estimate.eigenvalue, 0.5);
        assert_eq!(estimate.eigenvector, Vector3d::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_zero_matrix_is_degenerate() {
        let result = dominant_eigen(&Matrix3d::zeros(), DEFAULT_ITERATIONS);
        assert!(matches!(result, Err(Error::NumericalDegeneracy(_))));
    }

    #[test]
    fn test_non_finite_matrix_is_degenerate() {
        let mut m = Matrix3d::identity();
        m[(2, 2)] = f64::NAN;

        let result = dominant_eigen(&m, DEFAULT_ITERATIONS);
        assert!(matches!(result, Err(Error::NumericalDegeneracy(_))));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = dominant_eigen(&Matrix3d::identity(), 0);
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_max_abs_component_keeps_sign_and_first_tie() {
        assert_eq!(max_abs_component(&Vector3d::new(1.0, -3.0, 2.0)), -3.0);
        assert_eq!(max_abs_component(&Vector3d::new(-2.0, 2.0, 1.0)), -2.0);
    }
}
