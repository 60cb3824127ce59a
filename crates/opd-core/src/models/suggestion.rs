use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::mode::Mode;

/// A structured diagnosis and treatment suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestionResult {
    pub diagnosis: String,
    pub treatment: Treatment,
    /// General advice printed under the prescription, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

/// Mode-dependent treatment payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Treatment {
    Allopathic { drugs: Vec<DrugLine> },
    Homeopathic { remedy: RemedyPlan },
}

/// One line of an allopathic prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrugLine {
    /// Form and name, e.g. `TAB. PARACETAMOL`.
    pub drug: String,
    pub dose: String,
    /// Morning--noon--night pattern, e.g. `1--0--1`.
    pub frequency: String,
    pub duration: String,
    #[serde(default)]
    pub instructions: String,
}

/// A homeopathic remedy with its potency and repetition schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RemedyPlan {
    pub remedy: String,
    pub potency: String,
    pub repetition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl DrugLine {
    pub fn new(
        drug: impl Into<String>,
        dose: impl Into<String>,
        frequency: impl Into<String>,
        duration: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            drug: drug.into(),
            dose: dose.into(),
            frequency: frequency.into(),
            duration: duration.into(),
            instructions: instructions.into(),
        }
    }

    /// Render as a numbered prescription line:
    /// `1. TAB. PARACETAMOL 650mg | 1--1--1 | 3 days | After food`.
    pub fn to_rx_line(&self, number: usize) -> String {
        let mut line = format!(
            "{number}. {} {} | {} | {}",
            self.drug, self.dose, self.frequency, self.duration
        );
        if !self.instructions.is_empty() {
            line.push_str(" | ");
            line.push_str(&self.instructions);
        }
        line
    }
}

impl RemedyPlan {
    pub fn to_rx_line(&self) -> String {
        let mut line = format!("{} {} | {}", self.remedy, self.potency, self.repetition);
        if let Some(duration) = &self.duration {
            line.push_str(" | ");
            line.push_str(duration);
        }
        line
    }
}

impl SuggestionResult {
    pub fn mode(&self) -> Mode {
        match self.treatment {
            Treatment::Allopathic { .. } => Mode::Allopathic,
            Treatment::Homeopathic { .. } => Mode::Homeopathic,
        }
    }

    /// Drug lines, empty for a homeopathic result.
    pub fn drugs(&self) -> &[DrugLine] {
        match &self.treatment {
            Treatment::Allopathic { drugs } => drugs,
            Treatment::Homeopathic { .. } => &[],
        }
    }

    pub fn remedy(&self) -> Option<&RemedyPlan> {
        match &self.treatment {
            Treatment::Homeopathic { remedy } => Some(remedy),
            Treatment::Allopathic { .. } => None,
        }
    }

    /// The prescription as the editable text block shown at the desk and
    /// printed on the slip. Advice, when present, follows on its own line.
    pub fn rx_text(&self) -> String {
        let mut lines: Vec<String> = match &self.treatment {
            Treatment::Allopathic { drugs } => drugs
                .iter()
                .enumerate()
                .map(|(i, d)| d.to_rx_line(i + 1))
                .collect(),
            Treatment::Homeopathic { remedy } => vec![remedy.to_rx_line()],
        };
        if let Some(advice) = &self.advice {
            lines.push(format!("ADVICE: {advice}"));
        }
        lines.join("\n")
    }
}
