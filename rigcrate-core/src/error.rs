//! Error types for rigcrate

use thiserror::Error;

use crate::label::Label;

/// Main error type for rigcrate operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("Numerical degeneracy: {0}")]
    NumericalDegeneracy(String),

    #[error("Missing label: {0}")]
    MissingLabel(Label),

    #[error("Bone generation failed for {label}: {source}")]
    Label {
        label: Label,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the label whose point cloud caused this error
    pub fn for_label(self, label: Label) -> Self {
        Error::Label {
            label,
            source: Box::new(self),
        }
    }

    /// The label this error is attributed to, if any
    pub fn label(&self) -> Option<Label> {
        match self {
            Error::Label { label, .. } => Some(*label),
            Error::MissingLabel(label) => Some(*label),
            _ => None,
        }
    }

    /// The underlying error with any label attribution stripped
    pub fn root(&self) -> &Error {
        match self {
            Error::Label { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for rigcrate operations
pub type Result<T> = std::result::Result<T, Error>;
