use opd_core::models::clinic::ClinicProfile;
use opd_core::models::visit::{Sex, VisitRecord};
use opd_export::error::ExportError;
use opd_export::layout::SlipLayout;
use opd_export::render::{render_slip, render_slip_with, write_slip};

fn clinic() -> ClinicProfile {
    ClinicProfile {
        clinic_name: "CITY HOMEOPATHIC CLINIC".to_string(),
        address: "MAIN ROAD, NAGPUR".to_string(),
        doctor_name: "DR. A. RAO".to_string(),
        qualifications: "B.H.M.S.".to_string(),
        tagline: "CONSULTANT HOMEOPATH".to_string(),
    }
}

fn visit() -> VisitRecord {
    VisitRecord {
        patient_id: "A3".to_string(),
        name: "Meera Joshi".to_string(),
        age: 34,
        sex: Sex::F,
        weight: 85.0,
        bp: "120/80".to_string(),
        pulse: "80".to_string(),
        o2: "98".to_string(),
        symptoms: "acidity".to_string(),
        diagnosis: "Hyperacidity".to_string(),
        rx: "1. CAP. PANTOPRAZOLE 40mg | 1--0--0".to_string(),
        visit_date: jiff::civil::date(2026, 10, 19),
    }
}

fn wide() -> SlipLayout {
    SlipLayout {
        width: 80,
        ..SlipLayout::default()
    }
}

#[test]
fn default_slip_carries_letterhead_patient_and_rx() {
    let slip = render_slip(&clinic(), &visit(), &wide()).unwrap();

    assert!(slip.starts_with("CITY HOMEOPATHIC CLINIC\nMAIN ROAD, NAGPUR\n"));
    assert!(slip.contains("(CONSULTANT HOMEOPATH)"));
    assert!(slip.contains("ID: A3 | Date: Oct 19, 2026"));
    assert!(slip.contains("Name: MEERA JOSHI | 34Y/F"));
    assert!(slip.contains("Weight: 85 kg | BP: 120/80 | O2: 98%"));
    assert!(slip.contains("DIAGNOSIS: Hyperacidity"));
    assert!(slip.contains("RX (TREATMENT PLAN):\n1. CAP. PANTOPRAZOLE 40mg | 1--0--0\n"));
    assert!(slip.trim_end().ends_with("DR. A. RAO"));
}

#[test]
fn rules_span_the_layout_width() {
    let slip = render_slip(&clinic(), &visit(), &wide()).unwrap();
    assert!(slip.lines().any(|l| l == "=".repeat(80)));
    assert!(slip.lines().any(|l| l == "-".repeat(80)));
}

#[test]
fn empty_tagline_is_omitted() {
    let mut clinic = clinic();
    clinic.tagline = String::new();
    let slip = render_slip(&clinic, &visit(), &wide()).unwrap();
    assert!(!slip.contains("()"));
    assert!(slip.contains("B.H.M.S.\n========"));
}

#[test]
fn narrow_layout_wraps_every_line() {
    let layout = SlipLayout::default();
    let slip = render_slip(&clinic(), &visit(), &layout).unwrap();
    assert!(slip.lines().all(|l| l.chars().count() <= layout.width));
    assert!(slip.contains("DIAGNOSIS: Hyperacidity"));
}

#[test]
fn custom_template_sees_the_same_context() {
    let slip = render_slip_with(
        "short.txt",
        "{{ visit.patient_id }}/{{ visit_date }}/{{ weight }}",
        &clinic(),
        &visit(),
        &wide(),
    )
    .unwrap();
    assert_eq!(slip, "A3/Oct 19, 2026/85");
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_slip_with("bad.txt", "{% if %}", &clinic(), &visit(), &wide()).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn unknown_variable_is_a_render_error() {
    let err =
        render_slip_with("bad.txt", "{{ nothing.here }}", &clinic(), &visit(), &wide()).unwrap_err();
    assert!(matches!(err, ExportError::TemplateRender(_)));
}

#[test]
fn write_slip_uses_the_dated_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_slip(dir.path(), &clinic(), &visit(), &SlipLayout::default()).unwrap();

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("Slip_A3_2026-10-19.txt")
    );
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Hyperacidity"));
}
