use opd_core::file_names;
use opd_core::models::mode::Mode;
use opd_core::models::request::SuggestionRequest;
use opd_core::models::template::{builtin_templates, find_template, BLANK_TEMPLATE};
use opd_core::models::visit::Sex;
use opd_core::models::vitals::Vitals;

#[test]
fn mode_parses_names_and_selector_labels() {
    assert_eq!("allopathic".parse::<Mode>().unwrap(), Mode::Allopathic);
    assert_eq!(
        Mode::Homeopathic.label().parse::<Mode>().unwrap(),
        Mode::Homeopathic
    );
    assert!("ayurvedic".parse::<Mode>().is_err());
}

#[test]
fn request_age_accepts_numbers_and_text() {
    let numeric: SuggestionRequest =
        serde_json::from_str(r#"{"mode":"allopathic","age":8,"symptoms":"fever"}"#).unwrap();
    assert_eq!(numeric.age, 8.0);

    let text: SuggestionRequest =
        serde_json::from_str(r#"{"mode":"allopathic","age":"8 yrs","symptoms":"fever"}"#).unwrap();
    assert_eq!(text.age, 8.0);

    let garbled: SuggestionRequest =
        serde_json::from_str(r#"{"mode":"homeopathic","age":"unknown"}"#).unwrap();
    assert_eq!(garbled.age, 0.0);
    assert_eq!(garbled.symptoms, "");
}

#[test]
fn builder_age_is_lenient() {
    let request = SuggestionRequest::new(Mode::Allopathic, "cough").with_age("about 40");
    assert_eq!(request.age, 40.0);
    assert_eq!(SuggestionRequest::new(Mode::Allopathic, "").with_age(-3.0).age, 0.0);
}

#[test]
fn vitals_accept_short_field_names() {
    let vitals: Vitals = serde_json::from_str(r#"{"bp":"150/95","tmp":"AFEBRILE","o2":"97"}"#).unwrap();
    let parsed = vitals.parse();
    assert_eq!(parsed.systolic, 150.0);
    assert_eq!(parsed.diastolic, 95.0);
    assert_eq!(parsed.temperature, 0.0);
    assert_eq!(parsed.spo2, 97.0);
    assert_eq!(parsed.pulse, 0.0);
}

#[test]
fn sex_parses_case_insensitively() {
    assert_eq!("female".parse::<Sex>().unwrap(), Sex::F);
    assert_eq!("M".parse::<Sex>().unwrap(), Sex::M);
    assert!("x".parse::<Sex>().is_err());
}

#[test]
fn builtin_templates_start_with_blank() {
    let templates = builtin_templates();
    assert_eq!(templates[0].name, BLANK_TEMPLATE);
    assert!(templates[0].rx.is_empty());

    let gastritis = find_template("gastritis").unwrap();
    assert_eq!(gastritis.diagnosis, "Hyperacidity");
    assert!(gastritis.rx.contains("PANTOPRAZOLE"));
    assert!(find_template("unknown").is_none());
}

#[test]
fn file_names_follow_desk_conventions() {
    let date = jiff::civil::date(2026, 10, 19);
    assert_eq!(file_names::backup(date), "OPD_Backup_19-10-2026.json");
    assert_eq!(file_names::backup_csv(date), "OPD_Backup_19-10-2026.csv");
    assert_eq!(file_names::slip("A12", date), "Slip_A12_2026-10-19.txt");
    assert_eq!(file_names::slip("../x", date), "Slip____x_2026-10-19.txt");
    assert_eq!(file_names::slip("  ", date), "Slip_unknown_2026-10-19.txt");
}
