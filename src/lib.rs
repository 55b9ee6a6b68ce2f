//! prever — obesity-risk screening from lifestyle survey answers
//!
//! Loads a pre-trained classifier artifact together with the feature-column
//! order it was trained against, encodes survey answers into the numeric
//! row the classifier expects, and produces an obesity-level diagnosis with
//! a confidence score. An interactive terminal session exposes the survey
//! form and a static analytics panel for the medical team.
//!
//! The training pipeline lives upstream; this crate only consumes its
//! serialized artifacts and must treat any deserialization failure as fatal
//! at startup.
//!
//! # Example
//!
//! ```no_run
//! use prever::artifacts::Assets;
//! use prever::encode::{Frequency, Gender, SurveyResponse, YesNo};
//! use prever::predict::diagnose;
//!
//! let assets = Assets::load(".").expect("artifacts missing");
//! let survey = SurveyResponse {
//!     gender: Gender::Masculino,
//!     age: 25,
//!     family_history: YesNo::Sim,
//!     snacking: Frequency::AsVezes,
//!     activity_days: 1,
//!     high_calorie_food: YesNo::Sim,
//!     vegetable_level: 2,
//!     water_intake: 2,
//!     calorie_monitoring: YesNo::Nao,
//!     alcohol: Frequency::Nao,
//! };
//! let diagnosis = diagnose(&assets, &survey).expect("prediction failed");
//! println!("{} ({})", diagnosis.level, diagnosis.confidence_percent());
//! ```

pub mod artifacts;
pub mod encode;
pub mod predict;
pub mod ui;

pub use artifacts::{ArtifactError, Assets, Classifier};
pub use encode::{encode, EncodeError, FeatureRow, SurveyResponse};
pub use predict::{diagnose, Diagnosis, ObesityLevel, PredictError};

use thiserror::Error;

/// Crate-level error covering every failure the library can surface.
///
/// Artifact errors are fatal at the application layer; prediction errors are
/// request-level and leave the session usable.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Predict(#[from] PredictError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;
