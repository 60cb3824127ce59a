use opd_core::models::mode::Mode;
use opd_core::models::suggestion::{RemedyPlan, SuggestionResult, Treatment};

use crate::RuleSet;
use crate::config::ResolverConfig;
use crate::findings::Findings;
use crate::rules::{RuleEntry, always};

/// Acute homeopathic prescribing. Anything the table does not cover is
/// held on placebo until a full constitutional case is taken.
pub struct Homeopathic;

static RULES: [RuleEntry; 3] = [
    RuleEntry {
        id: "homeopathic.anxiety",
        description: "Fear or anxiety",
        predicate: |f, c| f.mentions_any(&c.keywords.anxiety),
        build: anxiety,
    },
    RuleEntry {
        id: "homeopathic.trauma",
        description: "Injury, trauma or soreness",
        predicate: |f, c| f.mentions_any(&c.keywords.trauma),
        build: trauma,
    },
    RuleEntry {
        id: "homeopathic.gastric",
        description: "Acidity or gas",
        predicate: |f, c| f.mentions_any(&c.keywords.homeopathic_gastric),
        build: gastric,
    },
];

static DEFAULT_RULE: RuleEntry = RuleEntry {
    id: "homeopathic.constitutional",
    description: "No acute remedy matched",
    predicate: always,
    build: constitutional,
};

impl RuleSet for Homeopathic {
    fn mode(&self) -> Mode {
        Mode::Homeopathic
    }

    fn rules(&self) -> &[RuleEntry] {
        &RULES
    }

    fn default_rule(&self) -> &RuleEntry {
        &DEFAULT_RULE
    }
}

fn homeopathic(
    diagnosis: &str,
    remedy: &str,
    potency: &str,
    repetition: &str,
    duration: &str,
    advice: Option<&str>,
) -> SuggestionResult {
    SuggestionResult {
        diagnosis: diagnosis.to_string(),
        treatment: Treatment::Homeopathic {
            remedy: RemedyPlan {
                remedy: remedy.to_string(),
                potency: potency.to_string(),
                repetition: repetition.to_string(),
                duration: Some(duration.to_string()),
            },
        },
        advice: advice.map(str::to_string),
    }
}

fn anxiety(_: &Findings, _: &ResolverConfig) -> SuggestionResult {
    homeopathic(
        "Anxiety State",
        "ACONITUM NAPELLUS",
        "30C",
        "4 pills thrice daily",
        "7 days",
        None,
    )
}

fn trauma(_: &Findings, _: &ResolverConfig) -> SuggestionResult {
    homeopathic(
        "Trauma / Soft Tissue Injury",
        "ARNICA MONTANA",
        "200C",
        "4 pills twice daily",
        "5 days",
        None,
    )
}

fn gastric(_: &Findings, _: &ResolverConfig) -> SuggestionResult {
    homeopathic(
        "Dyspepsia",
        "NUX VOMICA",
        "30C",
        "4 pills at bedtime",
        "7 days",
        Some("Avoid tea, coffee and late meals"),
    )
}

fn constitutional(_: &Findings, _: &ResolverConfig) -> SuggestionResult {
    homeopathic(
        "Constitutional Case (Under Study)",
        "SAC LAC",
        "Placebo",
        "4 pills thrice daily",
        "15 days",
        Some("Detailed case taking at next visit to find the simillimum"),
    )
}
