use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A saved consultation. One row of the daily visit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisitRecord {
    /// Desk-assigned patient ID, e.g. `A12`.
    pub patient_id: String,
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    /// Weight in kilograms.
    pub weight: f64,
    #[serde(default)]
    pub bp: String,
    #[serde(default)]
    pub pulse: String,
    /// Oxygen saturation in percent, as typed.
    #[serde(default)]
    pub o2: String,
    #[serde(default)]
    pub symptoms: String,
    pub diagnosis: String,
    /// Final prescription text after the doctor's edits.
    #[serde(default)]
    pub rx: String,
    pub visit_date: jiff::civil::Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[default]
    F,
    M,
    Other,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::F => "F",
            Sex::M => "M",
            Sex::Other => "Other",
        })
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f" | "female" => Ok(Sex::F),
            "m" | "male" => Ok(Sex::M),
            "other" | "o" => Ok(Sex::Other),
            _ => Err(CoreError::InvalidSex(s.to_string())),
        }
    }
}
