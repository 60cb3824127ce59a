//! opd-rules
//!
//! The clinical suggestion resolver. Pure computation, no I/O apart from
//! loading a config file. Given a treatment mode, age, symptoms and vitals
//! it walks an ordered rule table and returns the first matching
//! suggestion, or the mode's catch-all default. It is the last resort after
//! every model attempt has failed, so it never fails itself.

pub mod config;
pub mod error;
pub mod findings;
pub mod rule_sets;
pub mod rules;

use opd_core::models::mode::Mode;
use opd_core::models::request::SuggestionRequest;
use opd_core::models::suggestion::SuggestionResult;
use tracing::debug;

use config::ResolverConfig;
use findings::Findings;
use rules::RuleEntry;

/// An ordered rule table for one treatment mode.
pub trait RuleSet: Send + Sync {
    fn mode(&self) -> Mode;

    /// Rules in priority order, first match wins.
    fn rules(&self) -> &[RuleEntry];

    /// Catch-all used when no rule matches.
    fn default_rule(&self) -> &RuleEntry;

    /// The rule that fires for these findings, with its priority
    /// (`None` for the default).
    fn select(&self, findings: &Findings, config: &ResolverConfig) -> (Option<usize>, &RuleEntry) {
        self.rules()
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(findings, config))
            .map(|(priority, rule)| (Some(priority), rule))
            .unwrap_or_else(|| (None, self.default_rule()))
    }
}

static ALLOPATHIC: rule_sets::allopathic::Allopathic = rule_sets::allopathic::Allopathic;
static HOMEOPATHIC: rule_sets::homeopathic::Homeopathic = rule_sets::homeopathic::Homeopathic;

/// The rule table for a mode.
pub fn rule_set(mode: Mode) -> &'static dyn RuleSet {
    match mode {
        Mode::Allopathic => &ALLOPATHIC,
        Mode::Homeopathic => &HOMEOPATHIC,
    }
}

/// Every registered rule table.
pub fn all_rule_sets() -> Vec<&'static dyn RuleSet> {
    Mode::ALL.into_iter().map(rule_set).collect()
}

/// Which rule produced a suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub rule_id: &'static str,
    /// Position in the rule table; `None` when the default fired.
    pub priority: Option<usize>,
    pub result: SuggestionResult,
}

impl Resolution {
    pub fn is_default(&self) -> bool {
        self.priority.is_none()
    }
}

/// Rule-based resolver bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a request to a suggestion. Total and deterministic.
    pub fn resolve(&self, request: &SuggestionRequest) -> SuggestionResult {
        self.explain(request).result
    }

    /// Resolve a request and report which rule fired.
    pub fn explain(&self, request: &SuggestionRequest) -> Resolution {
        let findings = Findings::from_request(request);
        let (priority, rule) = rule_set(request.mode).select(&findings, &self.config);

        debug!(
            mode = ?request.mode,
            rule = rule.id,
            priority,
            systolic = findings.vitals.systolic,
            temperature = findings.vitals.temperature,
            age = findings.age,
            "suggestion resolved"
        );

        Resolution {
            rule_id: rule.id,
            priority,
            result: rule.result(&findings, &self.config),
        }
    }

    /// The catch-all result for a mode, independent of any request.
    pub fn default_result(&self, mode: Mode) -> SuggestionResult {
        let findings = Findings::from_request(&SuggestionRequest::new(mode, ""));
        rule_set(mode).default_rule().result(&findings, &self.config)
    }
}

/// Resolve with the default configuration.
pub fn resolve(request: &SuggestionRequest) -> SuggestionResult {
    Resolver::default().resolve(request)
}
