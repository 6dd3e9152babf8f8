use chrono::NaiveDate;
use docket_core::{Appointment, FixedClock};
use docket_store::{AppointmentUpdate, AppointmentsRepo, ErrorClass, StoreError, StoreErrorKind};
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn repo() -> AppointmentsRepo {
    AppointmentsRepo::with_clock(Arc::new(FixedClock::new(date(2025, 10, 1))))
}

fn appointment(repo: &AppointmentsRepo, id: &str, day: &str, description: &str) -> Appointment {
    Appointment::new(id, day, description, repo.today()).expect("valid appointment")
}

#[test]
fn add_then_get_roundtrip() {
    let mut repo = repo();
    let created = appointment(&repo, "001", "11-Oct-25", "Description of appointment 1");
    repo.add(created).expect("add appointment");

    let fetched = repo.get("001").expect("appointment exists");
    assert_eq!(fetched.date(), date(2025, 10, 11));
    assert_eq!(fetched.description(), "Description of appointment 1");
    assert!(repo.exists("001"));
}

#[test]
fn add_duplicate_id_keeps_first_record() {
    let mut repo = repo();
    let first = appointment(&repo, "001", "11-Oct-25", "Description of appointment 1");
    let second = appointment(&repo, "001", "12-Oct-25", "Description of appointment 2");
    repo.add(first).expect("add first");

    let err = repo.add(second).unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::DuplicateId);
    assert_eq!(err.class(), ErrorClass::InvalidArgument);
    assert_eq!(repo.len(), 1);
    assert_eq!(
        repo.get("001").expect("first kept").description(),
        "Description of appointment 1"
    );
}

#[test]
fn get_unknown_id_is_absent_and_require_is_not_found() {
    let repo = repo();
    assert!(repo.get("999").is_none());

    let err = repo.require("999").unwrap_err();
    assert_eq!(
        err,
        StoreError::NotFound {
            kind: "appointment",
            id: "999".to_string(),
        }
    );
    assert_eq!(err.class(), ErrorClass::NotFound);
}

#[test]
fn list_returns_every_stored_appointment() {
    let mut repo = repo();
    let first = appointment(&repo, "001", "11-Oct-25", "Description of appointment 1");
    let second = appointment(&repo, "002", "12-Oct-25", "Description of appointment 2");
    repo.add(first).expect("add first");
    repo.add(second).expect("add second");

    let mut ids: Vec<&str> = repo.list().into_iter().map(|a| a.id().as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, ["001", "002"]);
}

#[test]
fn update_replaces_provided_fields() {
    let mut repo = repo();
    let created = appointment(&repo, "003", "13-Oct-25", "Description of appointment 3");
    repo.add(created).expect("add");

    repo.update(
        "003",
        AppointmentUpdate {
            date: Some("14-Oct-25".to_string()),
            description: Some("I need to load the dishwasher but am coding :)".to_string()),
        },
    )
    .expect("update");

    let updated = repo.get("003").expect("appointment exists");
    assert_eq!(updated.date(), date(2025, 10, 14));
    assert_eq!(
        updated.description(),
        "I need to load the dishwasher but am coding :)"
    );
}

#[test]
fn update_skips_missing_and_empty_fields() {
    let mut repo = repo();
    let created = appointment(&repo, "003", "13-Oct-25", "Original");
    repo.add(created).expect("add");

    repo.update(
        "003",
        AppointmentUpdate {
            date: Some(String::new()),
            description: Some("Changed".to_string()),
        },
    )
    .expect("update description");
    repo.update(
        "003",
        AppointmentUpdate {
            date: None,
            ..Default::default()
        },
    )
    .expect("no-op update");

    let updated = repo.get("003").expect("appointment exists");
    assert_eq!(updated.date(), date(2025, 10, 13));
    assert_eq!(updated.description(), "Changed");
}

#[test]
fn update_validates_date_against_repository_clock() {
    let mut repo = repo();
    let created = appointment(&repo, "003", "13-Oct-25", "Original");
    repo.add(created).expect("add");

    for raw in ["01-Oct-25", "2024-10-15"] {
        let err = repo
            .update(
                "003",
                AppointmentUpdate {
                    date: Some(raw.to_string()),
                    description: Some("Should not stick".to_string()),
                },
            )
            .unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Core);
    }

    let unchanged = repo.get("003").expect("appointment exists");
    assert_eq!(unchanged.date(), date(2025, 10, 13));
    assert_eq!(unchanged.description(), "Original");
}

#[test]
fn update_unknown_id_is_invalid_argument() {
    let mut repo = repo();
    let err = repo
        .update("999", AppointmentUpdate::default())
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::UnknownId);
    assert_eq!(err.class(), ErrorClass::InvalidArgument);
}

#[test]
fn delete_then_get_yields_nothing() {
    let mut repo = repo();
    let created = appointment(&repo, "004", "14-Oct-25", "Description of appointment 4");
    repo.add(created).expect("add");

    repo.delete("004").expect("delete");
    assert!(repo.get("004").is_none());
    assert!(!repo.exists("004"));
    assert_eq!(repo.require("004").unwrap_err().class(), ErrorClass::NotFound);
}

#[test]
fn delete_unknown_id_is_invalid_argument() {
    let mut repo = repo();
    let err = repo.delete("999").unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::UnknownId);
}
