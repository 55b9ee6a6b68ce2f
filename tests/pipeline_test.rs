//! End-to-end pipeline tests
//!
//! Artifacts are written to a temp directory exactly as the training
//! pipeline would serialize them, then loaded and scored through the
//! public API.

use prever::artifacts::{
    Assets, ClassifierMetadata, ClassifierState, COLUMNS_FILE, MODEL_FILE,
};
use prever::encode::{encode, Frequency, Gender, SurveyResponse, Transport, YesNo};
use prever::predict::{assemble, diagnose, ObesityLevel};
use tempfile::TempDir;

const N_FEATURES: usize = 18;
const N_CLASSES: usize = 7;

fn canonical_columns() -> Vec<String> {
    let mut columns: Vec<String> = [
        "Gender",
        "Age",
        "family_history",
        "FAVC",
        "FCVC",
        "NCP",
        "CAEC",
        "SMOKE",
        "CH2O",
        "SCC",
        "FAF",
        "TUE",
        "CALC",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect();
    columns.extend(Transport::ALL.iter().map(|t| t.column().to_string()));
    columns
}

/// A classifier whose scores depend only on the intercepts, so the argmax
/// class is known in advance.
fn intercept_only_state(intercepts: Vec<f32>) -> ClassifierState {
    ClassifierState {
        metadata: ClassifierMetadata {
            name: "modelo_obesidade".to_string(),
            algorithm: "multinomial_logistic_regression".to_string(),
            version: "1.0.0".to_string(),
            accuracy: Some(0.7751),
        },
        n_features: N_FEATURES,
        n_classes: N_CLASSES,
        coefficients: vec![0.0; N_FEATURES * N_CLASSES],
        intercepts,
    }
}

fn write_artifacts(dir: &TempDir, state: &ClassifierState, columns: &[String]) {
    std::fs::write(
        dir.path().join(MODEL_FILE),
        serde_json::to_string_pretty(state).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.path().join(COLUMNS_FILE),
        serde_json::to_string(columns).unwrap(),
    )
    .unwrap();
}

fn reference_survey() -> SurveyResponse {
    SurveyResponse {
        gender: Gender::Masculino,
        age: 25,
        family_history: YesNo::Sim,
        snacking: Frequency::AsVezes,
        activity_days: 1,
        high_calorie_food: YesNo::Sim,
        vegetable_level: 2,
        water_intake: 2,
        calorie_monitoring: YesNo::Nao,
        alcohol: Frequency::Nao,
    }
}

#[test]
fn test_encoding_contract_in_artifact_order() {
    let row = encode(&reference_survey());
    let features = assemble(&row, &canonical_columns()).unwrap();
    assert_eq!(
        features,
        vec![
            1.0, 25.0, 1.0, 1.0, 2.0, 3.0, 1.0, 0.0, 2.0, 0.0, 1.0, 1.0, 0.0, // survey
            0.0, 0.0, 0.0, 1.0, 0.0 // transport one-hot defaults
        ]
    );
}

#[test]
fn test_diagnose_end_to_end() {
    let dir = TempDir::new().unwrap();
    let mut intercepts = vec![0.0; N_CLASSES];
    intercepts[4] = 2.0;
    write_artifacts(&dir, &intercept_only_state(intercepts), &canonical_columns());

    let assets = Assets::load(dir.path()).unwrap();
    let diagnosis = diagnose(&assets, &reference_survey()).unwrap();
    assert_eq!(diagnosis.level, ObesityLevel::ObesidadeI);
    // softmax: e^2 / (e^2 + 6)
    let expected = 2.0_f32.exp() / (2.0_f32.exp() + 6.0);
    assert!((diagnosis.confidence - expected).abs() < 1e-5);
}

#[test]
fn test_diagnose_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write_artifacts(
        &dir,
        &intercept_only_state(vec![0.3, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0]),
        &canonical_columns(),
    );
    let assets = Assets::load(dir.path()).unwrap();

    let survey = reference_survey();
    let first = diagnose(&assets, &survey).unwrap();
    let second = diagnose(&assets, &survey).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_shuffled_column_artifact_still_assembles() {
    let dir = TempDir::new().unwrap();
    let mut columns = canonical_columns();
    columns.reverse();
    write_artifacts(
        &dir,
        &intercept_only_state(vec![0.0; N_CLASSES]),
        &columns,
    );
    let assets = Assets::load(dir.path()).unwrap();

    // Row assembly follows the artifact order, whatever it is.
    let row = encode(&reference_survey());
    let features = assemble(&row, &assets.columns).unwrap();
    assert_eq!(features[0], row.get("transporte_Walking").unwrap());
    assert!(diagnose(&assets, &reference_survey()).is_ok());
}

#[test]
fn test_missing_artifact_fails_before_any_prediction() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(COLUMNS_FILE),
        serde_json::to_string(&canonical_columns()).unwrap(),
    )
    .unwrap();
    assert!(Assets::load(dir.path()).is_err());
}

#[test]
fn test_truncated_model_artifact_rejected() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::to_string(&intercept_only_state(vec![0.0; N_CLASSES])).unwrap();
    std::fs::write(dir.path().join(MODEL_FILE), &json[..json.len() / 2]).unwrap();
    std::fs::write(
        dir.path().join(COLUMNS_FILE),
        serde_json::to_string(&canonical_columns()).unwrap(),
    )
    .unwrap();
    assert!(Assets::load(dir.path()).is_err());
}

#[test]
fn test_column_artifact_narrower_than_model_rejected() {
    let dir = TempDir::new().unwrap();
    let mut columns = canonical_columns();
    columns.truncate(13);
    write_artifacts(
        &dir,
        &intercept_only_state(vec![0.0; N_CLASSES]),
        &columns,
    );
    assert!(Assets::load(dir.path()).is_err());
}

#[test]
fn test_proba_distribution_well_formed() {
    let dir = TempDir::new().unwrap();
    write_artifacts(
        &dir,
        &intercept_only_state(vec![1.0, -2.0, 0.5, 0.0, 3.0, -1.0, 0.25]),
        &canonical_columns(),
    );
    let assets = Assets::load(dir.path()).unwrap();

    let row = encode(&reference_survey());
    let features = assemble(&row, &assets.columns).unwrap();
    let proba = assets.classifier.predict_proba(&features).unwrap();
    assert_eq!(proba.len(), N_CLASSES);
    assert!((proba.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    assert!(proba.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p)));

    let label = assets.classifier.predict(&features).unwrap();
    let argmax = proba
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    assert_eq!(label, argmax);
}
