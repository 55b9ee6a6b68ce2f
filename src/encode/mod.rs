//! Survey-answer encoding
//!
//! Maps the human-readable form selections to the numeric encoding the
//! classifier was trained on. Every categorical field is an exhaustive enum
//! with a fixed code, so the mapping is compile-time checked; there is no
//! runtime dictionary to fall through silently. Fields the form does not
//! collect get fixed defaults inherited from the training set.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A form label that does not belong to the field's domain.
///
/// Unreachable while answers come from the form's own controls; it exists
/// for callers that parse free text into a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized value '{value}' for {field}")]
pub struct EncodeError {
    pub field: &'static str,
    pub value: String,
}

/// Gender as collected by the form. Training encoded Masculino as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Feminino,
    Masculino,
}

impl Gender {
    /// Numeric code used at training time.
    #[must_use]
    pub fn code(self) -> f32 {
        match self {
            Gender::Feminino => 0.0,
            Gender::Masculino => 1.0,
        }
    }

    /// All options, in form display order.
    pub const ALL: [Gender; 2] = [Gender::Feminino, Gender::Masculino];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Feminino => write!(f, "Feminino"),
            Gender::Masculino => write!(f, "Masculino"),
        }
    }
}

impl FromStr for Gender {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Feminino" => Ok(Gender::Feminino),
            "Masculino" => Ok(Gender::Masculino),
            other => Err(EncodeError {
                field: "Gênero",
                value: other.to_string(),
            }),
        }
    }
}

/// Yes/no answer. Training encoded Sim as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Nao,
    Sim,
}

impl YesNo {
    /// Numeric code used at training time.
    #[must_use]
    pub fn code(self) -> f32 {
        match self {
            YesNo::Nao => 0.0,
            YesNo::Sim => 1.0,
        }
    }

    /// All options, in form display order (the form lists Sim first).
    pub const ALL: [YesNo; 2] = [YesNo::Sim, YesNo::Nao];
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Nao => write!(f, "Não"),
            YesNo::Sim => write!(f, "Sim"),
        }
    }
}

impl FromStr for YesNo {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sim" => Ok(YesNo::Sim),
            "Não" => Ok(YesNo::Nao),
            other => Err(EncodeError {
                field: "Sim/Não",
                value: other.to_string(),
            }),
        }
    }
}

/// Ordinal frequency scale shared by the eating-between-meals and alcohol
/// fields. The rank order Não < Às vezes < Frequentemente < Sempre is a
/// modeling assumption inherited from training and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Frequency {
    Nao,
    AsVezes,
    Frequentemente,
    Sempre,
}

impl Frequency {
    /// Ordinal code used at training time: 0, 1, 2, 3 in rank order.
    #[must_use]
    pub fn code(self) -> f32 {
        match self {
            Frequency::Nao => 0.0,
            Frequency::AsVezes => 1.0,
            Frequency::Frequentemente => 2.0,
            Frequency::Sempre => 3.0,
        }
    }

    /// All options, in rank (and form display) order.
    pub const ALL: [Frequency; 4] = [
        Frequency::Nao,
        Frequency::AsVezes,
        Frequency::Frequentemente,
        Frequency::Sempre,
    ];
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Nao => write!(f, "Não"),
            Frequency::AsVezes => write!(f, "Às vezes"),
            Frequency::Frequentemente => write!(f, "Frequentemente"),
            Frequency::Sempre => write!(f, "Sempre"),
        }
    }
}

impl FromStr for Frequency {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Não" => Ok(Frequency::Nao),
            "Às vezes" => Ok(Frequency::AsVezes),
            "Frequentemente" => Ok(Frequency::Frequentemente),
            "Sempre" => Ok(Frequency::Sempre),
            other => Err(EncodeError {
                field: "frequência",
                value: other.to_string(),
            }),
        }
    }
}

/// Transportation mode, one-hot encoded at training time. Not collected by
/// the form; the default stands in for every respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Automobile,
    Bike,
    Motorbike,
    PublicTransportation,
    Walking,
}

impl Transport {
    /// Training column name for this mode's one-hot indicator.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Transport::Automobile => "transporte_Automobile",
            Transport::Bike => "transporte_Bike",
            Transport::Motorbike => "transporte_Motorbike",
            Transport::PublicTransportation => "transporte_Public_Transportation",
            Transport::Walking => "transporte_Walking",
        }
    }

    /// All modes, in training column order.
    pub const ALL: [Transport; 5] = [
        Transport::Automobile,
        Transport::Bike,
        Transport::Motorbike,
        Transport::PublicTransportation,
        Transport::Walking,
    ];
}

// Fixed defaults for fields the form does not collect. These are policy
// values inherited from the training set (typical/average respondent), not
// derived per user.

/// NCP: main meals per day.
pub const DEFAULT_MEALS_PER_DAY: f32 = 3.0;

/// SMOKE: non-smoker.
pub const DEFAULT_SMOKER: f32 = 0.0;

/// TUE: daily screen-time band.
pub const DEFAULT_SCREEN_TIME: f32 = 1.0;

/// Transportation mode assumed for every respondent.
pub const DEFAULT_TRANSPORT: Transport = Transport::PublicTransportation;

/// Form range for the age slider, inclusive.
pub const AGE_RANGE: (u8, u8) = (14, 65);

/// Form range for weekly physical-activity days, inclusive.
pub const ACTIVITY_RANGE: (u8, u8) = (0, 3);

/// Form range for the vegetable-consumption level, inclusive.
pub const VEGETABLE_RANGE: (u8, u8) = (1, 3);

/// Form range for water intake in liters/day, inclusive.
pub const WATER_RANGE: (u8, u8) = (1, 3);

/// One form submission's raw answers. Transient: created on submission,
/// discarded once the diagnosis is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    pub gender: Gender,
    /// Age in years, form-bounded to [`AGE_RANGE`]
    pub age: u8,
    /// Family history of overweight
    pub family_history: YesNo,
    /// Eating between meals (CAEC)
    pub snacking: Frequency,
    /// Physical activity days per week, form-bounded to [`ACTIVITY_RANGE`]
    pub activity_days: u8,
    /// Frequent high-calorie food consumption (FAVC)
    pub high_calorie_food: YesNo,
    /// Vegetable consumption level, form-bounded to [`VEGETABLE_RANGE`]
    pub vegetable_level: u8,
    /// Water intake in liters/day, form-bounded to [`WATER_RANGE`]
    pub water_intake: u8,
    /// Calorie monitoring habit (SCC)
    pub calorie_monitoring: YesNo,
    /// Alcohol consumption (CALC)
    pub alcohol: Frequency,
}

/// An encoded feature row: named numeric values in the encoder's canonical
/// order. The prediction invoker reorders them to the column-order artifact
/// before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Vec<(&'static str, f32)>,
}

impl FeatureRow {
    /// Value for a named column, if the row carries it.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<f32> {
        self.values
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, v)| *v)
    }

    /// Column names in encoder order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(name, _)| *name)
    }

    /// Number of columns in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(column, value)` pairs in encoder order.
    pub fn iter(&self) -> std::slice::Iter<'_, (&'static str, f32)> {
        self.values.iter()
    }
}

fn clamp_range(value: u8, (lo, hi): (u8, u8)) -> f32 {
    f32::from(value.clamp(lo, hi))
}

/// Encode one survey response into the numeric row the classifier expects.
///
/// Deterministic: identical responses always produce identical rows.
/// Sliders are clamped to their form ranges; categorical fields carry their
/// fixed training codes; uncollected fields get the training defaults.
#[must_use]
pub fn encode(survey: &SurveyResponse) -> FeatureRow {
    let mut values = vec![
        ("Gender", survey.gender.code()),
        ("Age", clamp_range(survey.age, AGE_RANGE)),
        ("family_history", survey.family_history.code()),
        ("FAVC", survey.high_calorie_food.code()),
        ("FCVC", clamp_range(survey.vegetable_level, VEGETABLE_RANGE)),
        ("NCP", DEFAULT_MEALS_PER_DAY),
        ("CAEC", survey.snacking.code()),
        ("SMOKE", DEFAULT_SMOKER),
        ("CH2O", clamp_range(survey.water_intake, WATER_RANGE)),
        ("SCC", survey.calorie_monitoring.code()),
        ("FAF", clamp_range(survey.activity_days, ACTIVITY_RANGE)),
        ("TUE", DEFAULT_SCREEN_TIME),
        ("CALC", survey.alcohol.code()),
    ];
    for mode in Transport::ALL {
        let indicator = if mode == DEFAULT_TRANSPORT { 1.0 } else { 0.0 };
        values.push((mode.column(), indicator));
    }
    FeatureRow { values }
}
