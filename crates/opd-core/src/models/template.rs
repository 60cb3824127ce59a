use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named, editable starting point for a consultation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrescriptionTemplate {
    pub name: String,
    pub diagnosis: String,
    pub symptoms: String,
    pub rx: String,
}

/// Name of the empty template selected by default.
pub const BLANK_TEMPLATE: &str = "Custom (Blank)";

/// Templates shipped with the desk, in selector order.
pub fn builtin_templates() -> Vec<PrescriptionTemplate> {
    vec![
        PrescriptionTemplate {
            name: BLANK_TEMPLATE.to_string(),
            diagnosis: String::new(),
            symptoms: String::new(),
            rx: String::new(),
        },
        PrescriptionTemplate {
            name: "Viral Fever".to_string(),
            diagnosis: "Acute Viral Syndrome".to_string(),
            symptoms: "Fever, chills, headache.".to_string(),
            rx: "1. TAB. PARACETAMOL 650mg | 1--1--1 (PC)\n\
                 2. TAB. LEVOCETIRIZINE 5mg | 0--0--1 (HS)"
                .to_string(),
        },
        PrescriptionTemplate {
            name: "Gastritis".to_string(),
            diagnosis: "Hyperacidity".to_string(),
            symptoms: "Nausea, epigastric burning.".to_string(),
            rx: "1. CAP. PANTOPRAZOLE 40mg | 1--0--0 (Empty)\n\
                 2. TAB. DOMPERIDONE 10mg | 1--0--1 (Before Food)"
                .to_string(),
        },
    ]
}

/// Look up a built-in template by name, case-insensitively.
pub fn find_template(name: &str) -> Option<PrescriptionTemplate> {
    builtin_templates()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}
