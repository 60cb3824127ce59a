use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::{parse_blood_pressure, parse_lenient};

/// Vitals exactly as typed at the desk. Every field is optional and may
/// hold non-numeric text such as `"AFEBRILE"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vitals {
    /// Blood pressure as `"systolic/diastolic"`, e.g. `"120/80"`.
    #[serde(default)]
    pub bp: Option<String>,
    #[serde(default)]
    pub pulse: Option<String>,
    #[serde(default, alias = "tmp")]
    pub temperature: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    /// Oxygen saturation in percent.
    #[serde(default, alias = "o2")]
    pub spo2: Option<String>,
}

impl Vitals {
    pub fn with_bp(mut self, bp: impl Into<String>) -> Self {
        self.bp = Some(bp.into());
        self
    }

    pub fn with_pulse(mut self, pulse: impl Into<String>) -> Self {
        self.pulse = Some(pulse.into());
        self
    }

    pub fn with_temperature(mut self, temperature: impl Into<String>) -> Self {
        self.temperature = Some(temperature.into());
        self
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn with_spo2(mut self, spo2: impl Into<String>) -> Self {
        self.spo2 = Some(spo2.into());
        self
    }

    /// Read every field leniently. Absent or garbled fields become `0.0`.
    pub fn parse(&self) -> ParsedVitals {
        let (systolic, diastolic) = self
            .bp
            .as_deref()
            .map(parse_blood_pressure)
            .unwrap_or((0.0, 0.0));
        let read = |field: &Option<String>| field.as_deref().map(parse_lenient).unwrap_or(0.0);

        ParsedVitals {
            systolic,
            diastolic,
            pulse: read(&self.pulse),
            temperature: read(&self.temperature),
            weight: read(&self.weight),
            spo2: read(&self.spo2),
        }
    }
}

/// Numeric view of [`Vitals`]. Zero means absent or unreadable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParsedVitals {
    pub systolic: f64,
    pub diastolic: f64,
    pub pulse: f64,
    pub temperature: f64,
    pub weight: f64,
    pub spo2: f64,
}
