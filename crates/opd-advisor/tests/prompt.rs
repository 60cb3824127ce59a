use opd_advisor::prompt::build_prompt;
use opd_core::models::mode::Mode;
use opd_core::models::request::SuggestionRequest;
use opd_core::models::vitals::Vitals;

#[test]
fn prompt_asks_for_the_segment_format() {
    let prompt = build_prompt(&SuggestionRequest::new(Mode::Allopathic, "cough"));
    assert!(prompt.contains("|DIAGNOSIS| <one-line diagnosis>"));
    assert!(prompt.contains("|RX|"));
    assert!(prompt.contains("allopathic prescription"));
}

#[test]
fn homeopathic_prompt_asks_for_a_remedy() {
    let prompt = build_prompt(&SuggestionRequest::new(Mode::Homeopathic, "fear"));
    assert!(prompt.contains("single best-matching remedy"));
    assert!(!prompt.contains("allopathic"));
}

#[test]
fn patient_block_carries_vitals_and_history() {
    let request = SuggestionRequest::new(Mode::Allopathic, "  headache  ")
        .with_age("45")
        .with_vitals(
            Vitals::default()
                .with_bp("150/95")
                .with_temperature("AFEBRILE")
                .with_pulse(""),
        )
        .with_history("known diabetic");

    let prompt = build_prompt(&request);
    assert!(prompt.ends_with("</patient>"));
    assert!(prompt.contains("<patient>\nAge: 45 years\nSymptoms: headache\n"));
    assert!(prompt.contains("BP: 150/95\n"));
    assert!(prompt.contains("Temperature: AFEBRILE\n"));
    assert!(!prompt.contains("Pulse:"));
    assert!(prompt.contains("History: known diabetic\n"));
}

#[test]
fn unknown_age_is_spelled_out() {
    let request = SuggestionRequest::new(Mode::Allopathic, "cough").with_age("n/a");
    assert!(build_prompt(&request).contains("Age: unknown\n"));
}
