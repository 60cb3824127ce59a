use opd_core::models::suggestion::SuggestionResult;

use crate::config::ResolverConfig;
use crate::findings::Findings;

/// Whether a rule applies to the findings.
pub type Predicate = fn(&Findings, &ResolverConfig) -> bool;

/// Builds the rule's suggestion. Most rules ignore the findings; some pick a
/// sub-branch (pediatric dosing, diarrhea vs acidity).
pub type Builder = fn(&Findings, &ResolverConfig) -> SuggestionResult;

/// One row of a rule table. Priority is the row's position: the first
/// matching row wins.
#[derive(Debug, Clone, Copy)]
pub struct RuleEntry {
    /// Stable identifier, e.g. `"allopathic.febrile"`.
    pub id: &'static str,
    pub description: &'static str,
    pub predicate: Predicate,
    pub build: Builder,
}

impl RuleEntry {
    pub fn matches(&self, findings: &Findings, config: &ResolverConfig) -> bool {
        (self.predicate)(findings, config)
    }

    pub fn result(&self, findings: &Findings, config: &ResolverConfig) -> SuggestionResult {
        (self.build)(findings, config)
    }
}

/// Predicate for catch-all rows.
pub fn always(_: &Findings, _: &ResolverConfig) -> bool {
    true
}
