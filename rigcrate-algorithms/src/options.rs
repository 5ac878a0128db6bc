//! Configuration for bone generation

use serde::{Deserialize, Serialize};

use crate::eigen::DEFAULT_ITERATIONS;

/// How the two bone endpoints are picked from the projected points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremitySelection {
    /// The projections with the largest and the smallest Euclidean norm.
    ///
    /// Both can lie on the same side of the centroid for a skewed cloud.
    #[default]
    Magnitude,
    /// The projections with the largest and the smallest signed coordinate
    /// along the axis.
    SignedAxis,
}

/// Whether labels are processed one after another or on the rayon pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Execution {
    #[default]
    Sequential,
    Parallel,
}

/// Configuration for [`generate_with`](crate::generate_with)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Number of power iterations per label
    pub iterations: usize,
    /// Endpoint selection rule
    pub selection: ExtremitySelection,
    /// Sequential or parallel processing of labels
    pub execution: Execution,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            selection: ExtremitySelection::Magnitude,
            execution: Execution::Sequential,
        }
    }
}

impl GenerationOptions {
    /// Default options with labels processed in parallel
    pub fn parallel() -> Self {
        Self {
            execution: Execution::Parallel,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_selection(mut self, selection: ExtremitySelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }
}
