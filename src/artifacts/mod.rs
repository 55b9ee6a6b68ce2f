//! Trained-model artifacts
//!
//! The upstream training pipeline serializes two artifacts: the classifier
//! itself and the ordered list of feature columns it was trained against.
//! This module deserializes both, validates their shapes agree, and caches
//! them process-wide. They are immutable after the first load.

mod classifier;
mod load;

pub use classifier::{Classifier, ClassifierMetadata, ClassifierState, ShapeMismatch};
pub use load::{load_classifier, load_columns, Assets, COLUMNS_FILE, MODEL_FILE};

use thiserror::Error;

/// Artifact loading errors.
///
/// All of these are fatal at the application layer: a missing or corrupt
/// artifact means startup must abort, there is nothing to retry.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Shape error: {0}")]
    Shape(String),
}

/// Result type for artifact operations.
pub type Result<T> = std::result::Result<T, ArtifactError>;
