use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::mode::Mode;
use super::vitals::Vitals;
use crate::numeric::parse_lenient;

/// Everything the suggestion resolver looks at for one consultation.
///
/// `history` travels with the request so it can be shown to a model or
/// printed, but rules never match against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestionRequest {
    pub mode: Mode,
    /// Age in years. Accepts a number or free text (`"8 yrs"`) on input;
    /// unreadable text becomes `0`.
    #[serde(default, deserialize_with = "deserialize_age")]
    #[ts(type = "number | string")]
    pub age: f64,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub vitals: Option<Vitals>,
    #[serde(default)]
    pub history: Option<String>,
}

impl SuggestionRequest {
    pub fn new(mode: Mode, symptoms: impl Into<String>) -> Self {
        Self {
            mode,
            age: 0.0,
            symptoms: symptoms.into(),
            vitals: None,
            history: None,
        }
    }

    pub fn with_age(mut self, age: impl Into<AgeInput>) -> Self {
        self.age = age.into().years();
        self
    }

    pub fn with_vitals(mut self, vitals: Vitals) -> Self {
        self.vitals = Some(vitals);
        self
    }

    pub fn with_history(mut self, history: impl Into<String>) -> Self {
        self.history = Some(history.into());
        self
    }
}

/// An age as handed over by the caller: already numeric, or typed text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Years(f64),
    Text(String),
}

impl AgeInput {
    /// Years as a number. Negative and non-finite inputs read as `0`.
    pub fn years(&self) -> f64 {
        let years = match self {
            AgeInput::Years(y) => *y,
            AgeInput::Text(t) => parse_lenient(t),
        };
        if years.is_finite() && years > 0.0 {
            years
        } else {
            0.0
        }
    }
}

impl From<f64> for AgeInput {
    fn from(years: f64) -> Self {
        AgeInput::Years(years)
    }
}

impl From<u32> for AgeInput {
    fn from(years: u32) -> Self {
        AgeInput::Years(f64::from(years))
    }
}

impl From<&str> for AgeInput {
    fn from(text: &str) -> Self {
        AgeInput::Text(text.to_string())
    }
}

impl From<String> for AgeInput {
    fn from(text: String) -> Self {
        AgeInput::Text(text)
    }
}

fn deserialize_age<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<AgeInput>::deserialize(deserializer)?;
    Ok(input.map(|a| a.years()).unwrap_or(0.0))
}
