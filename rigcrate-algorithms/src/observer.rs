//! Diagnostics hooks for bone generation
//!
//! The pipeline never logs on its own. Callers pass an observer to
//! [`generate_with`](crate::generate_with) and decide where the events go.

use rigcrate_core::{Error, Label};
use tracing::{debug, warn};

use crate::generation::BoneFit;

/// Receives per-label progress events from the generation pipeline
///
/// All methods default to doing nothing. Observers must be `Sync` because
/// labels may be processed on the rayon pool.
pub trait GenerationObserver: Sync {
    /// A label is about to be processed
    fn label_started(&self, _label: Label, _point_count: usize) {}

    /// A label produced its bone
    fn label_finished(&self, _label: Label, _fit: &BoneFit) {}

    /// A label failed; the run will abort with this error
    fn label_failed(&self, _label: Label, _error: &Error) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}

/// Observer that forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GenerationObserver for TracingObserver {
    fn label_started(&self, label: Label, point_count: usize) {
        debug!(label = %label, points = point_count, "generating bone");
    }

    fn label_finished(&self, label: Label, fit: &BoneFit) {
        let v = fit.eigen.eigenvector;
        let eigenvector = [v.x, v.y, v.z];
        debug!(
            label = %label,
            eigenvalue = fit.eigen.eigenvalue,
            eigenvector = ?eigenvector,
            length = fit.endpoints.length(),
            "bone generated"
        );
    }

    fn label_failed(&self, label: Label, error: &Error) {
        warn!(label = %label, error = %error, "bone generation failed");
    }
}
