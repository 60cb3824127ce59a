//! Consultation prompt builder.
//!
//! Assembles the request into a plain-text prompt that asks the model to
//! answer in the `|DIAGNOSIS|` / `|RX|` shape understood by
//! [`opd_core::segments::parse_segments`].

use opd_core::models::mode::Mode;
use opd_core::models::request::SuggestionRequest;
use opd_core::segments::{DIAGNOSIS_MARKER, RX_MARKER};

fn instructions(mode: Mode) -> &'static str {
    match mode {
        Mode::Allopathic => "\
You are assisting a general practitioner in a busy outpatient clinic. \
Suggest the most likely acute diagnosis and a short allopathic prescription. \
Write each prescription line as: FORM. DRUG DOSE | FREQUENCY | DURATION | INSTRUCTIONS.",
        Mode::Homeopathic => "\
You are assisting a classical homeopath in an outpatient clinic. \
Suggest the clinical diagnosis and the single best-matching remedy. \
Write the prescription as: REMEDY POTENCY | REPETITION | DURATION.",
    }
}

/// Build the prompt for one consultation.
///
/// Fields the desk left empty are omitted rather than sent as blanks; an
/// unreadable age is sent as `unknown`.
pub fn build_prompt(request: &SuggestionRequest) -> String {
    let mut prompt = String::from(instructions(request.mode));
    prompt.push_str("\nReply in exactly this format and nothing else:\n");
    prompt.push_str(&format!(
        "{DIAGNOSIS_MARKER} <one-line diagnosis>\n{RX_MARKER}\n<numbered prescription lines>\n\n"
    ));

    prompt.push_str("<patient>\n");
    if request.age > 0.0 {
        prompt.push_str(&format!("Age: {} years\n", request.age));
    } else {
        prompt.push_str("Age: unknown\n");
    }
    prompt.push_str(&format!("Symptoms: {}\n", request.symptoms.trim()));

    if let Some(vitals) = &request.vitals {
        let fields = [
            ("BP", &vitals.bp),
            ("Pulse", &vitals.pulse),
            ("Temperature", &vitals.temperature),
            ("Weight", &vitals.weight),
            ("SpO2", &vitals.spo2),
        ];
        for (label, value) in fields {
            if let Some(value) = value.as_deref().map(str::trim)
                && !value.is_empty()
            {
                prompt.push_str(&format!("{label}: {value}\n"));
            }
        }
    }

    if let Some(history) = request.history.as_deref().map(str::trim)
        && !history.is_empty()
    {
        prompt.push_str(&format!("History: {history}\n"));
    }

    prompt.push_str("</patient>");
    prompt
}
