//! Artifact loading and the process-wide asset cache

use super::classifier::{Classifier, ClassifierState};
use super::{ArtifactError, Result};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// File name of the serialized classifier artifact.
pub const MODEL_FILE: &str = "modelo_obesidade.json";

/// File name of the serialized feature-column-order artifact.
pub const COLUMNS_FILE: &str = "colunas_modelo.json";

static ASSETS: OnceLock<Assets> = OnceLock::new();

/// Load the classifier artifact from a file.
///
/// # Arguments
///
/// * `path` - Input file path (JSON, written by the training pipeline)
///
/// # Example
///
/// ```no_run
/// use prever::artifacts::load_classifier;
///
/// let clf = load_classifier("modelo_obesidade.json").expect("failed to load classifier");
/// println!("Loaded model: {}", clf.metadata().name);
/// ```
pub fn load_classifier(path: impl AsRef<Path>) -> Result<Classifier> {
    let content = fs::read_to_string(path.as_ref())?;
    let state: ClassifierState = serde_json::from_str(&content).map_err(|e| {
        ArtifactError::Serialization(format!("classifier deserialization failed: {e}"))
    })?;
    Classifier::from_state(state)
}

/// Load the feature-column-order artifact from a file.
///
/// The order in this list is exactly the order the classifier was trained
/// against; row assembly must follow it, never the encoder's own order.
pub fn load_columns(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;
    let columns: Vec<String> = serde_json::from_str(&content).map_err(|e| {
        ArtifactError::Serialization(format!("column-order deserialization failed: {e}"))
    })?;
    if columns.is_empty() {
        return Err(ArtifactError::Shape(
            "column-order artifact is empty".to_string(),
        ));
    }
    Ok(columns)
}

/// The two trained artifacts, loaded together and validated against each
/// other. Immutable after construction.
#[derive(Debug)]
pub struct Assets {
    /// The trained classifier
    pub classifier: Classifier,
    /// Feature columns in training order
    pub columns: Vec<String>,
}

impl Assets {
    /// Load both artifacts from a directory containing [`MODEL_FILE`] and
    /// [`COLUMNS_FILE`].
    ///
    /// Fails if either file is missing, corrupt, or if the column count does
    /// not match the classifier's trained width. All such failures are fatal
    /// to startup; there is no fallback model.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let classifier = load_classifier(dir.join(MODEL_FILE))?;
        let columns = load_columns(dir.join(COLUMNS_FILE))?;
        if columns.len() != classifier.n_features() {
            return Err(ArtifactError::Shape(format!(
                "column-order artifact lists {} columns, classifier expects {}",
                columns.len(),
                classifier.n_features()
            )));
        }
        Ok(Self { classifier, columns })
    }

    /// Process-wide cached assets, loaded lazily on first call.
    ///
    /// The cache is written at most once; later calls return the cached
    /// instance without touching storage. Loading the same directory twice
    /// yields equivalent immutable objects, so a racing double-load is
    /// harmless.
    pub fn global(dir: impl AsRef<Path>) -> Result<&'static Assets> {
        if let Some(assets) = ASSETS.get() {
            return Ok(assets);
        }
        let loaded = Self::load(dir)?;
        Ok(ASSETS.get_or_init(|| loaded))
    }
}
