use opd_core::models::mode::Mode;
use opd_core::models::suggestion::{DrugLine, SuggestionResult, Treatment};

use crate::RuleSet;
use crate::config::ResolverConfig;
use crate::findings::Findings;
use crate::rules::{RuleEntry, always};

/// Acute-care protocols. Order encodes clinical priority: a febrile
/// patient is treated for fever before any respiratory or pain complaint,
/// and the pressure check only runs when no complaint matched.
pub struct Allopathic;

static RULES: [RuleEntry; 5] = [
    RuleEntry {
        id: "allopathic.febrile",
        description: "Temperature above the fever threshold, or fever reported",
        predicate: is_febrile,
        build: febrile,
    },
    RuleEntry {
        id: "allopathic.respiratory",
        description: "Cough, cold, throat or sinus complaints",
        predicate: |f, c| f.mentions_any(&c.keywords.respiratory),
        build: respiratory,
    },
    RuleEntry {
        id: "allopathic.gastric",
        description: "Acidity, gas, stomach upset or loose motions",
        predicate: |f, c| f.mentions_any(&c.keywords.gastric),
        build: gastric,
    },
    RuleEntry {
        id: "allopathic.musculoskeletal",
        description: "Pain, back, joint or injury complaints",
        predicate: |f, c| f.mentions_any(&c.keywords.musculoskeletal),
        build: musculoskeletal,
    },
    RuleEntry {
        id: "allopathic.hypertension",
        description: "Systolic pressure above the hypertension threshold",
        predicate: |f, c| f.vitals.systolic > c.hypertension_systolic,
        build: hypertension,
    },
];

static DEFAULT_RULE: RuleEntry = RuleEntry {
    id: "allopathic.general",
    description: "No protocol matched",
    predicate: always,
    build: general_consultation,
};

impl RuleSet for Allopathic {
    fn mode(&self) -> Mode {
        Mode::Allopathic
    }

    fn rules(&self) -> &[RuleEntry] {
        &RULES
    }

    fn default_rule(&self) -> &RuleEntry {
        &DEFAULT_RULE
    }
}

fn is_febrile(findings: &Findings, config: &ResolverConfig) -> bool {
    findings.vitals.temperature > config.fever_threshold()
        || findings.mentions_any(&config.keywords.fever)
}

fn allopathic(diagnosis: &str, drugs: Vec<DrugLine>, advice: &str) -> SuggestionResult {
    SuggestionResult {
        diagnosis: diagnosis.to_string(),
        treatment: Treatment::Allopathic { drugs },
        advice: Some(advice.to_string()),
    }
}

fn febrile(findings: &Findings, config: &ResolverConfig) -> SuggestionResult {
    let paracetamol = if findings.age < config.pediatric_age_below {
        DrugLine::new(
            "SYP. PARACETAMOL",
            "250mg/5ml, 5 ml",
            "1--1--1",
            "3 days",
            "After food; 15 mg/kg per dose if under 20 kg",
        )
    } else {
        DrugLine::new("TAB. PARACETAMOL", "650mg", "1--1--1", "3 days", "After food (PC)")
    };

    allopathic(
        "Acute Febrile Illness",
        vec![paracetamol],
        "Plenty of oral fluids; tepid sponging if temperature crosses 102°F",
    )
}

fn respiratory(_: &Findings, _: &ResolverConfig) -> SuggestionResult {
    allopathic(
        "Upper Respiratory Tract Infection",
        vec![
            DrugLine::new("TAB. LEVOCETIRIZINE", "5mg", "0--0--1", "5 days", "At bedtime (HS)"),
            DrugLine::new("SYP. AMBROXOL", "15mg/5ml, 10 ml", "1--1--1", "5 days", "After food"),
        ],
        "Steam inhalation twice daily; warm saline gargles",
    )
}

fn gastric(findings: &Findings, config: &ResolverConfig) -> SuggestionResult {
    if findings.mentions_any(&config.keywords.diarrhea) {
        allopathic(
            "Acute Gastroenteritis",
            vec![
                DrugLine::new(
                    "ORS SACHET",
                    "1 sachet in 1 L water",
                    "After each loose stool",
                    "Until stools settle",
                    "Sip slowly",
                ),
                DrugLine::new("CAP. RACECADOTRIL", "100mg", "1--1--1", "3 days", "Before food"),
            ],
            "Light home food; avoid milk and outside food",
        )
    } else {
        allopathic(
            "Hyperacidity",
            vec![
                DrugLine::new("CAP. PANTOPRAZOLE", "40mg", "1--0--0", "5 days", "Empty stomach"),
                DrugLine::new("TAB. DOMPERIDONE", "10mg", "1--0--1", "5 days", "Before food"),
            ],
            "Avoid spicy and oily food; no late dinners",
        )
    }
}

fn musculoskeletal(_: &Findings, _: &ResolverConfig) -> SuggestionResult {
    allopathic(
        "Musculoskeletal Pain",
        vec![
            DrugLine::new(
                "TAB. ACECLOFENAC + PARACETAMOL",
                "100mg + 325mg",
                "1--0--1",
                "5 days",
                "After food",
            ),
            DrugLine::new("CAP. PANTOPRAZOLE", "40mg", "1--0--0", "5 days", "Empty stomach"),
            DrugLine::new(
                "DICLOFENAC GEL",
                "Local application",
                "1--1--1",
                "5 days",
                "Apply gently over the affected area",
            ),
        ],
        "Hot fomentation; avoid lifting heavy weights",
    )
}

fn hypertension(_: &Findings, _: &ResolverConfig) -> SuggestionResult {
    allopathic(
        "Hypertension",
        vec![DrugLine::new(
            "TAB. AMLODIPINE",
            "5mg",
            "1--0--0",
            "30 days",
            "Same time every morning",
        )],
        "Low salt diet; recheck BP after one week",
    )
}

fn general_consultation(_: &Findings, _: &ResolverConfig) -> SuggestionResult {
    allopathic(
        "General Consultation",
        vec![DrugLine::new(
            "TAB. MULTIVITAMIN",
            "1 tab",
            "1--0--0",
            "15 days",
            "After breakfast",
        )],
        "Review with investigation reports",
    )
}
