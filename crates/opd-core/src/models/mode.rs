use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Treatment paradigm selected at the desk. Decides which rule table and
/// which result shape apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Mode {
    /// Acute care with conventional drugs.
    Allopathic,
    /// Constitutional care with homeopathic remedies.
    Homeopathic,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Allopathic, Mode::Homeopathic];

    /// Label shown on the protocol selector.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Allopathic => "Allopathic (Acute)",
            Mode::Homeopathic => "Homeopathic (Constitutional)",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    /// Accepts the bare name (`"allopathic"`) or a selector label
    /// (`"Homeopathic (Constitutional)"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        if lowered.starts_with("allopath") {
            Ok(Mode::Allopathic)
        } else if lowered.starts_with("homeopath") || lowered.starts_with("homoeopath") {
            Ok(Mode::Homeopathic)
        } else {
            Err(CoreError::InvalidMode(s.to_string()))
        }
    }
}
