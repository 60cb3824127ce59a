//! Resolver configuration.
//!
//! Thresholds and keyword sets drifted between the clinic's copies of the
//! intake form (fever at 99 vs 100 °F, hypertension at 140 vs 145 mmHg). One
//! canonical set lives here as defaults; every value can be overridden from
//! a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ResolverConfig {
    /// Schema version. Missing or 0 is stamped with the current version.
    pub config_version: u32,
    /// Unit temperatures are typed in and `fever_threshold` is expressed in.
    pub temperature_unit: TemperatureUnit,
    /// Readings strictly above this count as fever. Unset means the unit's
    /// default (see [`TemperatureUnit::default_fever_threshold`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fever_threshold: Option<f64>,
    /// Systolic pressure strictly above this triggers the hypertension rule.
    pub hypertension_systolic: f64,
    /// Ages strictly below this get pediatric dosing.
    pub pediatric_age_below: f64,
    pub keywords: KeywordConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn default_fever_threshold(&self) -> f64 {
        match self {
            TemperatureUnit::Fahrenheit => 99.0,
            TemperatureUnit::Celsius => 37.2,
        }
    }
}

/// Symptom keywords per rule. Matching is plain substring containment over
/// the lowercased symptom text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct KeywordConfig {
    pub fever: Vec<String>,
    pub respiratory: Vec<String>,
    pub gastric: Vec<String>,
    /// Subset of gastric complaints routed to the gastroenteritis branch.
    pub diarrhea: Vec<String>,
    pub musculoskeletal: Vec<String>,
    pub anxiety: Vec<String>,
    pub trauma: Vec<String>,
    pub homeopathic_gastric: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            fever: words(&["fever"]),
            respiratory: words(&["cough", "cold", "throat", "sinus"]),
            gastric: words(&["acidity", "gas", "stomach", "diarrhea", "loose"]),
            diarrhea: words(&["diarrhea", "loose"]),
            musculoskeletal: words(&["pain", "back", "joint", "injury"]),
            anxiety: words(&["fear", "anxiety"]),
            trauma: words(&["injury", "trauma", "soreness"]),
            homeopathic_gastric: words(&["acidity", "gas"]),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            temperature_unit: TemperatureUnit::default(),
            fever_threshold: None,
            hypertension_systolic: 140.0,
            pediatric_age_below: 12.0,
            keywords: KeywordConfig::default(),
        }
    }
}

impl ResolverConfig {
    /// Effective fever threshold in [`Self::temperature_unit`].
    pub fn fever_threshold(&self) -> f64 {
        self.fever_threshold
            .unwrap_or_else(|| self.temperature_unit.default_fever_threshold())
    }

    /// Parse, migrate and validate a config from JSON text.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        // Parse as raw JSON so we can run migrations before deserializing.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
            Some(v) => u32::try_from(v).map_err(|_| ConfigError::UnsupportedVersion {
                found: v,
                supported: CURRENT_VERSION,
            })?,
            None => 0,
        };

        let migrated = migrate(json, on_disk_version)?;
        let config: ResolverConfig = serde_json::from_value(migrated)?;
        config.validate()?;
        Ok(config.normalized())
    }

    /// Reject values that would make a rule fire on every request or never
    /// compare sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("fever_threshold", self.fever_threshold()),
            ("hypertension_systolic", self.hypertension_systolic),
            ("pediatric_age_below", self.pediatric_age_below),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        for (set, list) in self.keywords.named_sets() {
            if list.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "keywords.{set} contains a blank keyword"
                )));
            }
        }
        Ok(())
    }

    /// Lowercase and trim every keyword; drop blanks.
    pub fn normalized(mut self) -> Self {
        for list in self.keywords.sets_mut() {
            *list = list
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
        }
        self
    }
}

impl KeywordConfig {
    fn named_sets(&self) -> [(&'static str, &Vec<String>); 8] {
        [
            ("fever", &self.fever),
            ("respiratory", &self.respiratory),
            ("gastric", &self.gastric),
            ("diarrhea", &self.diarrhea),
            ("musculoskeletal", &self.musculoskeletal),
            ("anxiety", &self.anxiety),
            ("trauma", &self.trauma),
            ("homeopathic_gastric", &self.homeopathic_gastric),
        ]
    }

    fn sets_mut(&mut self) -> [&mut Vec<String>; 8] {
        [
            &mut self.fever,
            &mut self.respiratory,
            &mut self.gastric,
            &mut self.diarrhea,
            &mut self.musculoskeletal,
            &mut self.anxiety,
            &mut self.trauma,
            &mut self.homeopathic_gastric,
        ]
    }
}

/// Load a config file from disk.
pub fn load_config(path: &Path) -> Result<ResolverConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ResolverConfig::from_json_str(&contents)?;
    tracing::info!(path = %path.display(), "resolver config loaded");
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: u64::from(from_version),
            supported: CURRENT_VERSION,
        });
    }

    // Stamp missing version.
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(ConfigError::NotAnObject)?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("stamped missing resolver config version");
    }

    Ok(json)
}
