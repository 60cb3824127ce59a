use opd_core::models::visit::{Sex, VisitRecord};
use opd_session::backup::{
    BackupFormat, CSV_HEADERS, export_backup, export_csv, import_backup, import_csv, load_backup,
    save_backup, save_backup_as,
};
use opd_session::error::SessionError;
use opd_session::log::VisitLog;
use opd_session::session::Session;

fn visit(patient_id: &str) -> VisitRecord {
    VisitRecord {
        patient_id: patient_id.to_string(),
        name: "Ravi".to_string(),
        age: 41,
        sex: Sex::M,
        weight: 72.5,
        bp: "150/95".to_string(),
        pulse: "88".to_string(),
        o2: "97".to_string(),
        symptoms: "headache".to_string(),
        diagnosis: "Hypertension".to_string(),
        rx: "1. TAB. AMLODIPINE 5mg | 1--0--0 | 30 days".to_string(),
        visit_date: jiff::civil::date(2026, 10, 19),
    }
}

#[test]
fn export_then_import_restores_visits() {
    let log = VisitLog::from_visits(vec![visit("A1"), visit("A2")]);
    let bytes = export_backup(&log).unwrap();
    let visits = import_backup(&bytes).unwrap();
    assert_eq!(visits, log.visits());
}

#[test]
fn newer_backup_format_is_rejected() {
    let json = r#"{"format_version":7,"exported_at":"2026-10-19T08:00:00Z","visits":[]}"#;
    let err = import_backup(json.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        SessionError::UnsupportedBackupVersion { found: 7, supported: 1 }
    ));
}

#[test]
fn garbage_is_a_serialization_error() {
    let err = import_backup(b"Name,Age\nRavi,41").unwrap_err();
    assert!(matches!(err, SessionError::Serialization(_)));
}

#[test]
fn save_writes_the_dated_file_and_load_reads_it_back() {
    let dir = tempfile::tempdir().unwrap();
    let log = VisitLog::from_visits(vec![visit("A1")]);

    let path = save_backup(&log, dir.path(), jiff::civil::date(2026, 10, 19)).unwrap();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("OPD_Backup_19-10-2026.json")
    );
    assert!(!path.with_extension("json.tmp").exists());

    let mut session = Session::default();
    session.import_visits(load_backup(&path).unwrap()).unwrap();
    assert_eq!(session.log().len(), 1);
    assert_eq!(session.log().next_patient_id(), "A2");
}

#[test]
fn loading_a_missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_backup(&dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn csv_export_then_import_restores_visits() {
    let mut second = visit("A2");
    second.name = "Sunita, Rao".to_string();
    second.sex = Sex::F;
    second.rx = "1. TAB. PARACETAMOL 650mg | 1--1--1\n2. Steam inhalation".to_string();
    let log = VisitLog::from_visits(vec![visit("A1"), second]);

    let bytes = export_csv(&log).unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.starts_with("ID,Name,Age,Sex,Weight,BP,Pulse,O2,Symptoms,Diagnosis,Rx,Timestamp\n"));

    assert_eq!(import_csv(&bytes).unwrap(), log.visits());
}

#[test]
fn empty_log_exports_only_the_header() {
    let bytes = export_csv(&VisitLog::new()).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), format!("{}\n", CSV_HEADERS.join(",")));
    assert!(import_csv(CSV_HEADERS.join(",").as_bytes()).unwrap().is_empty());
}

#[test]
fn spreadsheet_with_desk_headers_imports() {
    let sheet = "\
ID,Name,Age,Sex,Weight,BP,Pulse,O2,Symptoms,Diagnosis,Rx,Timestamp
A1,Ravi,41.0,M,72.5,150/95,88,97,headache,Hypertension,1. TAB. AMLODIPINE 5mg | 1--0--0 | 30 days,2026-10-19
A2,Meera,8,F,24,,,,fever,Acute Febrile Illness,,2026-10-19
";
    let visits = import_csv(sheet.as_bytes()).unwrap();
    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0], visit("A1"));
    assert_eq!(visits[1].age, 8);
    assert_eq!(visits[1].sex, Sex::F);
    assert_eq!(visits[1].weight, 24.0);
    assert_eq!(visits[1].bp, "");
    assert_eq!(visits[1].rx, "");
}

#[test]
fn bad_csv_row_is_reported_by_number() {
    let sheet = "ID,Name,Sex,Timestamp\nA1,Ravi,M,2026-10-19\nA2,Meera,F,yesterday\n";
    let err = import_csv(sheet.as_bytes()).unwrap_err();
    assert!(matches!(err, SessionError::InvalidRow { row: 2, .. }));

    let err = import_csv(b"ID,Name,Sex,Timestamp\n,Ravi,M,2026-10-19\n").unwrap_err();
    assert!(matches!(err, SessionError::InvalidRow { row: 1, .. }));
}

#[test]
fn csv_backup_is_saved_and_loaded_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let log = VisitLog::from_visits(vec![visit("A1")]);

    let path =
        save_backup_as(&log, dir.path(), jiff::civil::date(2026, 10, 19), BackupFormat::Csv).unwrap();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("OPD_Backup_19-10-2026.csv")
    );
    assert_eq!(BackupFormat::from_path(&path), BackupFormat::Csv);
    assert_eq!(load_backup(&path).unwrap(), log.visits());
}
