//! Classifier structure for deserialization and inference
//!
//! A multinomial linear classifier: one coefficient row plus intercept per
//! class, scored against a fixed-order feature vector. `predict` is the
//! argmax class label, `predict_proba` the softmax distribution over the
//! class scores. The coefficients come from the upstream training run and
//! are never mutated here.

use super::ArtifactError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Feature vector length does not match the width the classifier was
/// trained with. Request-level: the caller surfaces it, the process lives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("feature vector has {got} values, classifier expects {expected}")]
pub struct ShapeMismatch {
    pub expected: usize,
    pub got: usize,
}

/// Metadata carried alongside the trained coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierMetadata {
    /// Model name/identifier
    pub name: String,

    /// Training algorithm (e.g., "multinomial_logistic_regression")
    pub algorithm: String,

    /// Artifact version
    pub version: String,

    /// Held-out accuracy reported by the training run, in [0, 1]
    pub accuracy: Option<f64>,
}

/// Serializable classifier state as written by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierState {
    /// Model metadata
    pub metadata: ClassifierMetadata,

    /// Expected feature vector length
    pub n_features: usize,

    /// Number of output classes
    pub n_classes: usize,

    /// Row-major `n_classes x n_features` coefficient matrix
    pub coefficients: Vec<f32>,

    /// Per-class intercepts, length `n_classes`
    pub intercepts: Vec<f32>,
}

/// A validated, ready-to-score classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    state: ClassifierState,
}

impl Classifier {
    /// Validate a deserialized state and wrap it for inference.
    ///
    /// Coefficient and intercept lengths must agree with the declared
    /// dimensions; anything else means the artifact is corrupt.
    pub fn from_state(state: ClassifierState) -> Result<Self, ArtifactError> {
        if state.n_classes == 0 || state.n_features == 0 {
            return Err(ArtifactError::Shape(format!(
                "classifier declares {} classes x {} features",
                state.n_classes, state.n_features
            )));
        }
        let expected = state.n_classes * state.n_features;
        if state.coefficients.len() != expected {
            return Err(ArtifactError::Shape(format!(
                "coefficient matrix has {} values, expected {expected} ({} classes x {} features)",
                state.coefficients.len(),
                state.n_classes,
                state.n_features
            )));
        }
        if state.intercepts.len() != state.n_classes {
            return Err(ArtifactError::Shape(format!(
                "intercept vector has {} values, expected {}",
                state.intercepts.len(),
                state.n_classes
            )));
        }
        Ok(Self { state })
    }

    /// Model metadata as written by the training pipeline.
    pub fn metadata(&self) -> &ClassifierMetadata {
        &self.state.metadata
    }

    /// Expected feature vector length.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.state.n_features
    }

    /// Number of output classes.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.state.n_classes
    }

    /// Per-class decision scores `W.x + b`.
    fn scores(&self, features: &[f32]) -> Result<Vec<f32>, ShapeMismatch> {
        if features.len() != self.state.n_features {
            return Err(ShapeMismatch {
                expected: self.state.n_features,
                got: features.len(),
            });
        }
        let scores = self
            .state
            .coefficients
            .chunks_exact(self.state.n_features)
            .zip(&self.state.intercepts)
            .map(|(row, b)| row.iter().zip(features).map(|(w, x)| w * x).sum::<f32>() + b)
            .collect();
        Ok(scores)
    }

    /// Predict the class label for a feature vector (argmax score).
    ///
    /// Ties break toward the lower label, so identical inputs always yield
    /// identical labels.
    pub fn predict(&self, features: &[f32]) -> Result<usize, ShapeMismatch> {
        let scores = self.scores(features)?;
        let label = scores
            .iter()
            .enumerate()
            .fold((0, f32::NEG_INFINITY), |best, (i, &s)| {
                if s > best.1 {
                    (i, s)
                } else {
                    best
                }
            })
            .0;
        Ok(label)
    }

    /// Predict the probability distribution over classes (softmax of the
    /// decision scores, max-shifted for numerical stability).
    pub fn predict_proba(&self, features: &[f32]) -> Result<Vec<f32>, ShapeMismatch> {
        let scores = self.scores(features)?;
        let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f32 = exps.iter().sum();
        Ok(exps.into_iter().map(|e| e / total).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_class_state() -> ClassifierState {
        ClassifierState {
            metadata: ClassifierMetadata {
                name: "test".to_string(),
                algorithm: "multinomial_logistic_regression".to_string(),
                version: "1.0.0".to_string(),
                accuracy: Some(0.9),
            },
            n_features: 2,
            n_classes: 2,
            coefficients: vec![1.0, 0.0, 0.0, 1.0],
            intercepts: vec![0.0, 0.0],
        }
    }

    #[test]
    fn test_from_state_accepts_consistent_shapes() {
        assert!(Classifier::from_state(two_class_state()).is_ok());
    }

    #[test]
    fn test_from_state_rejects_bad_coefficient_count() {
        let mut state = two_class_state();
        state.coefficients.pop();
        let err = Classifier::from_state(state).unwrap_err();
        assert!(matches!(err, ArtifactError::Shape(_)));
    }

    #[test]
    fn test_from_state_rejects_bad_intercept_count() {
        let mut state = two_class_state();
        state.intercepts.push(0.5);
        assert!(Classifier::from_state(state).is_err());
    }

    #[test]
    fn test_from_state_rejects_zero_dimensions() {
        let mut state = two_class_state();
        state.n_classes = 0;
        state.coefficients.clear();
        state.intercepts.clear();
        assert!(Classifier::from_state(state).is_err());
    }

    #[test]
    fn test_predict_picks_highest_score() {
        let clf = Classifier::from_state(two_class_state()).unwrap();
        assert_eq!(clf.predict(&[2.0, 1.0]).unwrap(), 0);
        assert_eq!(clf.predict(&[1.0, 2.0]).unwrap(), 1);
    }

    #[test]
    fn test_predict_tie_breaks_to_lower_label() {
        let clf = Classifier::from_state(two_class_state()).unwrap();
        assert_eq!(clf.predict(&[1.0, 1.0]).unwrap(), 0);
    }

    #[test]
    fn test_predict_proba_sums_to_one() {
        let clf = Classifier::from_state(two_class_state()).unwrap();
        let proba = clf.predict_proba(&[3.0, -1.0]).unwrap();
        let total: f32 = proba.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(proba.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_predict_agrees_with_proba_argmax() {
        let clf = Classifier::from_state(two_class_state()).unwrap();
        let features = [0.3, 1.7];
        let label = clf.predict(&features).unwrap();
        let proba = clf.predict_proba(&features).unwrap();
        let argmax = proba
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(label, argmax);
    }

    #[test]
    fn test_wrong_width_is_shape_mismatch() {
        let clf = Classifier::from_state(two_class_state()).unwrap();
        let err = clf.predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, ShapeMismatch { expected: 2, got: 3 });
        assert!(clf.predict_proba(&[1.0]).is_err());
    }

    #[test]
    fn test_softmax_stable_for_large_scores() {
        let mut state = two_class_state();
        state.coefficients = vec![100.0, 0.0, 0.0, 100.0];
        let clf = Classifier::from_state(state).unwrap();
        let proba = clf.predict_proba(&[10.0, 0.0]).unwrap();
        assert!(proba.iter().all(|p| p.is_finite()));
        assert!((proba.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    }
}
