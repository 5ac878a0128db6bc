//! Per-label bone generation
//!
//! Every label is run through the same pipeline, independently of the
//! others: centroid → recenter → covariance → dominant eigenvector →
//! projection → extremities → world space.

use rayon::prelude::*;
use rigcrate_core::{
    BoneEndpoints, BoneEndpointsSet, Label, Matrix3d, Point3d, PointCloud3d, PointCloudSet, Result,
};

use crate::centroid::{centroid, recenter};
use crate::covariance::covariance;
use crate::eigen::{dominant_eigen, EigenEstimate};
use crate::observer::{GenerationObserver, NoopObserver};
use crate::options::{Execution, GenerationOptions};
use crate::projection::{project, select_extremities};
use crate::world::to_world;

/// Everything computed for one label
#[derive(Debug, Clone, PartialEq)]
pub struct BoneFit {
    /// Centroid of the input cloud
    pub centroid: Point3d,
    /// Sample covariance of the centered cloud
    pub covariance: Matrix3d,
    /// Dominant eigen-pair of the covariance
    pub eigen: EigenEstimate,
    /// Extremal projections mapped back to world space
    pub endpoints: BoneEndpoints,
}

/// Run the full pipeline on a single point cloud
///
/// # Errors
/// * `Error::InsufficientPoints` if the cloud has fewer than 2 points
/// * `Error::NumericalDegeneracy` if the covariance has no dominant direction
/// * `Error::InvalidData` if `options.iterations` is zero
pub fn fit_bone(cloud: &PointCloud3d, options: &GenerationOptions) -> Result<BoneFit> {
    let origin = centroid(cloud)?;
    let centered = recenter(&origin, cloud);
    let covariance = covariance(&centered)?;
    let eigen = dominant_eigen(&covariance, options.iterations)?;

    let projected = project(&centered, &eigen.eigenvector);
    let local = select_extremities(&projected, &eigen.eigenvector, options.selection)?;

    Ok(BoneFit {
        centroid: origin,
        covariance,
        eigen,
        endpoints: to_world(&origin, local),
    })
}

/// Generate bone endpoints for every label with the default options
///
/// See [`generate_with`].
pub fn generate(clouds: &PointCloudSet) -> Result<BoneEndpointsSet> {
    generate_with(clouds, &GenerationOptions::default(), &NoopObserver)
}

/// Generate bone endpoints for every label in `clouds`
///
/// The output has exactly the keys of the input. The call is all-or-nothing:
/// the first label to fail (in label order) aborts the run, and the returned
/// error is wrapped in `Error::Label` naming that label. Parallel execution
/// reports the same error as sequential execution would.
pub fn generate_with(
    clouds: &PointCloudSet,
    options: &GenerationOptions,
    observer: &dyn GenerationObserver,
) -> Result<BoneEndpointsSet> {
    let jobs: Vec<(Label, &PointCloud3d)> = clouds.iter().collect();

    let results: Vec<(Label, Result<BoneFit>)> = match options.execution {
        Execution::Sequential => {
            let mut results = Vec::with_capacity(jobs.len());
            for (label, cloud) in jobs {
                let result = fit_label(label, cloud, options, observer);
                let failed = result.is_err();
                results.push((label, result));
                if failed {
                    break;
                }
            }
            results
        }
        Execution::Parallel => jobs
            .into_par_iter()
            .map(|(label, cloud)| (label, fit_label(label, cloud, options, observer)))
            .collect(),
    };

    let mut bones = BoneEndpointsSet::new();
    for (label, result) in results {
        let fit = result.map_err(|e| e.for_label(label))?;
        bones.insert(label, fit.endpoints);
    }

    Ok(bones)
}

fn fit_label(
    label: Label,
    cloud: &PointCloud3d,
    options: &GenerationOptions,
    observer: &dyn GenerationObserver,
) -> Result<BoneFit> {
    observer.label_started(label, cloud.len());

    match fit_bone(cloud, options) {
        Ok(fit) => {
            observer.label_finished(label, &fit);
            Ok(fit)
        }
        Err(e) => {
            observer.label_failed(label, &e);
            Err(e)
        }
    }
}
