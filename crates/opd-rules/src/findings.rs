use opd_core::models::request::SuggestionRequest;
use opd_core::models::vitals::ParsedVitals;

/// The parsed view of a request that rule predicates look at.
#[derive(Debug, Clone, PartialEq)]
pub struct Findings {
    /// Lowercased symptom text.
    pub symptoms: String,
    pub vitals: ParsedVitals,
    pub age: f64,
}

impl Findings {
    pub fn from_request(request: &SuggestionRequest) -> Self {
        Self {
            symptoms: request.symptoms.to_lowercase(),
            vitals: request
                .vitals
                .as_ref()
                .map(|v| v.parse())
                .unwrap_or_default(),
            age: request.age,
        }
    }

    /// Substring containment, not word matching: `"pain"` is found inside
    /// `"painkiller"`. Keywords are expected lowercased; blank ones never
    /// match.
    pub fn mentions_any(&self, keywords: &[String]) -> bool {
        keywords
            .iter()
            .any(|k| !k.is_empty() && self.symptoms.contains(k.as_str()))
    }
}
