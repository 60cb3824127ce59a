use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::suggestion::SuggestionResult;

/// The suggestion handed to the doctor for one consultation, whichever
/// path produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Advice {
    pub id: Uuid,
    pub source: AdviceSource,
    pub diagnosis: String,
    /// Editable prescription text.
    pub prescription: String,
    /// Typed result; only the rule-based fallback produces one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<SuggestionResult>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum AdviceSource {
    /// A remote model replied in the expected shape.
    Model { model_id: String },
    /// Every model attempt failed (or none was made); the rule table answered.
    Fallback { rule_id: String },
}

impl Advice {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, AdviceSource::Fallback { .. })
    }
}
