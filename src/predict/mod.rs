//! Prediction invocation
//!
//! Assembles the encoded feature row in the exact column order the
//! classifier was trained against, scores it, and maps the numeric class
//! label to its display category. Failures here are request-level: the
//! caller surfaces them and the session keeps running.

use crate::artifacts::{Assets, ShapeMismatch};
use crate::encode::{encode, FeatureRow, SurveyResponse};
use std::fmt;
use thiserror::Error;

/// Prediction errors. None of these abort the process; the user corrects
/// the inputs and retries.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("feature row has {got} columns, column-order artifact lists {expected}")]
    ColumnMismatch { expected: usize, got: usize },

    #[error("column-order artifact names unknown column '{0}'")]
    UnknownColumn(String),

    #[error(transparent)]
    Shape(#[from] ShapeMismatch),

    #[error("classifier returned out-of-range class label {0}")]
    UnknownClass(usize),
}

/// Result type for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;

/// The seven ordinal obesity-level categories the classifier was trained
/// on, in label order 0 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ObesityLevel {
    PesoInsuficiente,
    PesoNormal,
    SobrepesoI,
    SobrepesoII,
    ObesidadeI,
    ObesidadeII,
    ObesidadeIII,
}

impl ObesityLevel {
    /// All levels, in label order.
    pub const ALL: [ObesityLevel; 7] = [
        ObesityLevel::PesoInsuficiente,
        ObesityLevel::PesoNormal,
        ObesityLevel::SobrepesoI,
        ObesityLevel::SobrepesoII,
        ObesityLevel::ObesidadeI,
        ObesityLevel::ObesidadeII,
        ObesityLevel::ObesidadeIII,
    ];

    /// Map a numeric class label to its category.
    pub fn from_label(label: usize) -> Result<Self> {
        Self::ALL
            .get(label)
            .copied()
            .ok_or(PredictError::UnknownClass(label))
    }

    /// The numeric class label this category was trained as.
    #[must_use]
    pub fn label(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ObesityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObesityLevel::PesoInsuficiente => "Peso Insuficiente",
            ObesityLevel::PesoNormal => "Peso Normal",
            ObesityLevel::SobrepesoI => "Sobrepeso I",
            ObesityLevel::SobrepesoII => "Sobrepeso II",
            ObesityLevel::ObesidadeI => "Obesidade I",
            ObesityLevel::ObesidadeII => "Obesidade II",
            ObesityLevel::ObesidadeIII => "Obesidade III",
        };
        write!(f, "{name}")
    }
}

/// One diagnosis: the predicted category and the maximum class probability
/// reported as confidence. No calibration is applied; this is the raw
/// argmax probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    pub level: ObesityLevel,
    /// Maximum class probability, in [0, 1]
    pub confidence: f32,
}

impl Diagnosis {
    /// Confidence formatted for display, e.g. "87.32%".
    #[must_use]
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

/// Select the row's values in the exact order the column artifact lists.
///
/// The row's column set must equal the artifact's column set; a size
/// mismatch or a column the encoder never produced is a hard error, never
/// silently skipped.
pub fn assemble(row: &FeatureRow, columns: &[String]) -> Result<Vec<f32>> {
    if row.len() != columns.len() {
        return Err(PredictError::ColumnMismatch {
            expected: columns.len(),
            got: row.len(),
        });
    }
    columns
        .iter()
        .map(|column| {
            row.get(column)
                .ok_or_else(|| PredictError::UnknownColumn(column.clone()))
        })
        .collect()
}

/// Run the full pipeline for one survey response: encode, assemble in
/// training column order, score, and map the label to its category.
///
/// Deterministic and idempotent: unchanged inputs yield the same category
/// and confidence every time.
pub fn diagnose(assets: &Assets, survey: &SurveyResponse) -> Result<Diagnosis> {
    let row = encode(survey);
    let features = assemble(&row, &assets.columns)?;
    let label = assets.classifier.predict(&features)?;
    let proba = assets.classifier.predict_proba(&features)?;
    let confidence = proba.iter().copied().fold(0.0_f32, f32::max);
    Ok(Diagnosis {
        level: ObesityLevel::from_label(label)?,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode, Frequency, Gender, SurveyResponse, YesNo};

    fn sample_survey() -> SurveyResponse {
        SurveyResponse {
            gender: Gender::Feminino,
            age: 30,
            family_history: YesNo::Nao,
            snacking: Frequency::Nao,
            activity_days: 2,
            high_calorie_food: YesNo::Nao,
            vegetable_level: 3,
            water_intake: 2,
            calorie_monitoring: YesNo::Sim,
            alcohol: Frequency::AsVezes,
        }
    }

    #[test]
    fn test_level_display_names() {
        assert_eq!(
            ObesityLevel::PesoInsuficiente.to_string(),
            "Peso Insuficiente"
        );
        assert_eq!(ObesityLevel::ObesidadeIII.to_string(), "Obesidade III");
    }

    #[test]
    fn test_level_label_roundtrip() {
        for level in ObesityLevel::ALL {
            assert_eq!(ObesityLevel::from_label(level.label()).unwrap(), level);
        }
    }

    #[test]
    fn test_label_out_of_range() {
        assert!(matches!(
            ObesityLevel::from_label(7),
            Err(PredictError::UnknownClass(7))
        ));
    }

    #[test]
    fn test_assemble_follows_artifact_order() {
        let row = encode(&sample_survey());
        let columns: Vec<String> = vec!["FAF".into(), "Age".into(), "Gender".into()];
        // Narrowed artifact for the test: same-width invariant is checked
        // against the full row elsewhere.
        let err = assemble(&row, &columns).unwrap_err();
        assert!(matches!(err, PredictError::ColumnMismatch { .. }));

        let mut full: Vec<String> = row.columns().map(String::from).collect();
        full.reverse();
        let features = assemble(&row, &full).unwrap();
        assert_eq!(features[0], row.get("transporte_Walking").unwrap());
        assert_eq!(*features.last().unwrap(), row.get("Gender").unwrap());
    }

    #[test]
    fn test_assemble_rejects_unknown_column() {
        let row = encode(&sample_survey());
        let mut columns: Vec<String> = row.columns().map(String::from).collect();
        columns[0] = "Height".to_string();
        assert!(matches!(
            assemble(&row, &columns).unwrap_err(),
            PredictError::UnknownColumn(c) if c == "Height"
        ));
    }

    #[test]
    fn test_confidence_percent_formatting() {
        let d = Diagnosis {
            level: ObesityLevel::PesoNormal,
            confidence: 0.8732,
        };
        assert_eq!(d.confidence_percent(), "87.32%");
    }
}
