use opd_core::models::visit::{Sex, VisitRecord};
use opd_session::access::{AccessConfig, AccessState, load_access_config};
use opd_session::error::SessionError;
use opd_session::session::Session;

fn visit() -> VisitRecord {
    VisitRecord {
        patient_id: "A1".to_string(),
        name: "Meera".to_string(),
        age: 34,
        sex: Sex::F,
        weight: 58.0,
        bp: "118/76".to_string(),
        pulse: "72".to_string(),
        o2: "99".to_string(),
        symptoms: "acidity".to_string(),
        diagnosis: "Hyperacidity".to_string(),
        rx: "1. TAB. PANTOPRAZOLE 40mg | 1--0--0 | 5 days".to_string(),
        visit_date: jiff::civil::date(2026, 10, 19),
    }
}

fn locked_session() -> Session {
    Session::new(AccessConfig::with_passphrase("Clinic@123"))
}

#[test]
fn desk_with_passphrase_starts_pending_and_refuses_visits() {
    let mut session = locked_session();
    assert_eq!(session.access_state(), AccessState::Pending);

    let err = session.record_visit(visit()).unwrap_err();
    assert!(matches!(err, SessionError::Locked(AccessState::Pending)));
    let err = session.import_visits(vec![visit()]).unwrap_err();
    assert!(matches!(err, SessionError::Locked(AccessState::Pending)));
    assert!(session.log().is_empty());
}

#[test]
fn wrong_passphrase_is_denied_and_can_be_retried() {
    let mut session = locked_session();
    assert_eq!(session.unlock("clinic@123"), AccessState::Denied);
    assert_eq!(session.unlock(""), AccessState::Denied);

    let err = session.record_visit(visit()).unwrap_err();
    assert!(matches!(err, SessionError::Locked(AccessState::Denied)));
    assert_eq!(err.to_string(), "desk is locked (passphrase incorrect)");

    assert_eq!(session.unlock("Clinic@123"), AccessState::Granted);
    session.record_visit(visit()).unwrap();
    assert_eq!(session.log().len(), 1);
}

#[test]
fn granted_desk_stays_open_until_reset() {
    let mut session = locked_session();
    session.unlock("Clinic@123");
    assert_eq!(session.unlock("wrong"), AccessState::Granted);
    session.import_visits(vec![visit()]).unwrap();

    session.reset();
    assert_eq!(session.access_state(), AccessState::Pending);
    assert!(session.record_visit(visit()).is_err());
}

#[test]
fn desk_without_passphrase_is_open() {
    let mut session = Session::default();
    assert_eq!(session.access_state(), AccessState::Granted);
    session.record_visit(visit()).unwrap();
}

#[test]
fn access_config_loads_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("access.json");
    std::fs::write(&path, r#"{"passphrase":"Clinic@123"}"#).unwrap();

    let config = load_access_config(&path).unwrap();
    assert_eq!(config, AccessConfig::with_passphrase("Clinic@123"));
    assert_eq!(AccessConfig::from_json_str("{}").unwrap().passphrase, None);
}

#[test]
fn blank_passphrase_is_rejected() {
    let err = AccessConfig::from_json_str(r#"{"passphrase":"  "}"#).unwrap_err();
    assert!(matches!(err, SessionError::MissingField("passphrase")));
}
