//! Integration tests for `SqliteStore` — and the employee service running
//! over it — against an in-memory database.

use std::sync::Arc;

use chrono::NaiveDate;
use roster_core::{
  Error,
  employee::{CandidateEmployee, EmployeeDraft},
  service::EmployeeService,
  store::EmployeeStore,
};
use rust_decimal::Decimal;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn service() -> EmployeeService<SqliteStore> {
  EmployeeService::new(Arc::new(store().await))
}

fn today() -> NaiveDate {
  NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn candidate(name: &str, salary: &str) -> CandidateEmployee {
  CandidateEmployee {
    name:          name.into(),
    designation:   "Engineer".into(),
    gender:        "Female".into(),
    state:         "Karnataka".into(),
    date_of_birth: NaiveDate::from_ymd_opt(1995, 5, 20).unwrap(),
    date_of_join:  NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    salary:        salary.parse().unwrap(),
  }
}

fn draft(name: &str, salary: i64) -> EmployeeDraft {
  EmployeeDraft {
    name:          Some(name.into()),
    designation:   Some("Engineer".into()),
    gender:        Some("Female".into()),
    state:         Some("Karnataka".into()),
    date_of_birth: Some("1995-05-20".into()),
    date_of_join:  Some("2024-01-10".into()),
    salary:        Some(Decimal::from(salary)),
    age:           Some(29),
  }
}

// ─── Store: insert / find ────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_sequential_unique_ids() {
  let s = store().await;
  let first = s.insert(candidate("Asha", "60000")).await.unwrap();
  let second = s.insert(candidate("Ravi", "45000")).await.unwrap();
  assert_eq!(first.id, 1);
  assert_eq!(second.id, 2);
}

#[tokio::test]
async fn insert_then_find_by_id_roundtrips_every_field() {
  let s = store().await;
  let inserted = s.insert(candidate("Asha", "60000")).await.unwrap();

  let fetched = s.find_by_id(inserted.id).await.unwrap().unwrap();
  assert_eq!(fetched, inserted);
  assert_eq!(fetched.name, "Asha");
  assert_eq!(fetched.state, "Karnataka");
  assert_eq!(
    fetched.date_of_birth,
    NaiveDate::from_ymd_opt(1995, 5, 20).unwrap()
  );
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
  let s = store().await;
  assert!(s.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn find_all_preserves_insertion_order() {
  let s = store().await;
  s.insert(candidate("Asha", "60000")).await.unwrap();
  s.insert(candidate("Ravi", "45000")).await.unwrap();
  s.insert(candidate("Meera", "80000")).await.unwrap();

  let all = s.find_all().await.unwrap();
  let names: Vec<&str> = all.iter().map(|e| e.name.as_str()).collect();
  assert_eq!(names, ["Asha", "Ravi", "Meera"]);
}

#[tokio::test]
async fn salary_survives_the_roundtrip_exactly() {
  let s = store().await;
  let inserted = s.insert(candidate("Asha", "12345.67")).await.unwrap();
  let fetched = s.find_by_id(inserted.id).await.unwrap().unwrap();
  assert_eq!(fetched.salary, "12345.67".parse::<Decimal>().unwrap());
  assert_eq!(fetched.salary.to_string(), "12345.67");
}

// ─── Store: replace / remove ─────────────────────────────────────────────────

#[tokio::test]
async fn replace_overwrites_every_field() {
  let s = store().await;
  let inserted = s.insert(candidate("Asha", "60000")).await.unwrap();

  let mut replacement = candidate("Asha", "65000");
  replacement.designation = "Senior Engineer".into();
  replacement.state = "Tamil Nadu".into();

  let replaced = s.replace(inserted.id, replacement).await.unwrap().unwrap();
  assert_eq!(replaced.id, inserted.id);
  assert_eq!(replaced.salary, Decimal::from(65_000));

  let fetched = s.find_by_id(inserted.id).await.unwrap().unwrap();
  assert_eq!(fetched.designation, "Senior Engineer");
  assert_eq!(fetched.state, "Tamil Nadu");
  assert_eq!(fetched.salary, Decimal::from(65_000));
}

#[tokio::test]
async fn replace_missing_returns_none() {
  let s = store().await;
  let result = s.replace(42, candidate("Asha", "60000")).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn remove_returns_the_record_and_deletes_it() {
  let s = store().await;
  let inserted = s.insert(candidate("Asha", "60000")).await.unwrap();

  let removed = s.remove(inserted.id).await.unwrap().unwrap();
  assert_eq!(removed, inserted);
  assert!(s.find_by_id(inserted.id).await.unwrap().is_none());
}

#[tokio::test]
async fn remove_missing_returns_none_and_mutates_nothing() {
  let s = store().await;
  s.insert(candidate("Asha", "60000")).await.unwrap();

  assert!(s.remove(99).await.unwrap().is_none());
  assert_eq!(s.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleted_ids_are_never_reissued() {
  let s = store().await;
  let first = s.insert(candidate("Asha", "60000")).await.unwrap();
  s.remove(first.id).await.unwrap();

  let second = s.insert(candidate("Ravi", "45000")).await.unwrap();
  assert_ne!(second.id, first.id);
}

// ─── Service: create ─────────────────────────────────────────────────────────

#[tokio::test]
async fn create_valid_draft_returns_record_with_assigned_id() {
  let svc = service().await;
  let record = svc.create(&draft("Asha", 60_000), today()).await.unwrap();
  assert_eq!(record.id, 1);
  assert_eq!(record.name, "Asha");
  assert_eq!(record.salary, Decimal::from(60_000));
  // Derived from date_of_birth, not taken from the submitted age.
  assert_eq!(record.age, 29);
}

#[tokio::test]
async fn create_ignores_submitted_age_in_favour_of_derived() {
  let svc = service().await;
  let mut d = draft("Asha", 60_000);
  d.age = Some(95);
  let record = svc.create(&d, today()).await.unwrap();
  assert_eq!(record.age, 29);
}

#[tokio::test]
async fn create_invalid_draft_reports_every_violation() {
  let svc = service().await;
  let mut d = draft("Asha", 60_000);
  d.name = None;
  d.salary = None;

  let err = svc.create(&d, today()).await.unwrap_err();
  match err {
    Error::Validation(violations) => {
      assert_eq!(violations.len(), 2);
      assert_eq!(violations[0].field, "name");
      assert_eq!(violations[1].field, "salary");
    }
    other => panic!("expected Validation, got {other:?}"),
  }

  // Nothing was persisted.
  assert!(svc.list(today()).await.unwrap().is_empty());
}

// ─── Service: get / list ─────────────────────────────────────────────────────

#[tokio::test]
async fn get_unknown_id_is_not_found() {
  let svc = service().await;
  assert!(matches!(
    svc.get(7, today()).await.unwrap_err(),
    Error::NotFound
  ));
}

#[tokio::test]
async fn list_returns_all_records_with_derived_ages() {
  let svc = service().await;
  svc.create(&draft("Asha", 60_000), today()).await.unwrap();
  svc.create(&draft("Ravi", 45_000), today()).await.unwrap();

  let records = svc.list(today()).await.unwrap();
  assert_eq!(records.len(), 2);
  assert!(records.iter().all(|r| r.age == 29));
}

// ─── Service: update ─────────────────────────────────────────────────────────

#[tokio::test]
async fn update_replaces_the_record_in_full() {
  let svc = service().await;
  let created = svc.create(&draft("Asha", 60_000), today()).await.unwrap();

  let updated = svc
    .update(created.id, &draft("Asha", 65_000), today())
    .await
    .unwrap();
  assert_eq!(updated.id, created.id);
  assert_eq!(updated.salary, Decimal::from(65_000));

  let fetched = svc.get(created.id, today()).await.unwrap();
  assert_eq!(fetched.salary, Decimal::from(65_000));
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
  let svc = service().await;
  let err = svc.update(7, &draft("Asha", 60_000), today()).await.unwrap_err();
  assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn update_validates_before_looking_up_the_id() {
  // Invalid draft against an absent id: the violations win, not the absence.
  let svc = service().await;
  let err = svc
    .update(7, &EmployeeDraft::default(), today())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
}

// ─── Service: delete ─────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_get_is_not_found() {
  let svc = service().await;
  let created = svc.create(&draft("Asha", 60_000), today()).await.unwrap();

  svc.delete(created.id).await.unwrap();
  assert!(matches!(
    svc.get(created.id, today()).await.unwrap_err(),
    Error::NotFound
  ));
}

#[tokio::test]
async fn delete_unknown_id_is_not_found_and_mutates_nothing() {
  let svc = service().await;
  svc.create(&draft("Asha", 60_000), today()).await.unwrap();

  assert!(matches!(svc.delete(99).await.unwrap_err(), Error::NotFound));
  assert_eq!(svc.list(today()).await.unwrap().len(), 1);
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_update_get_delete_lifecycle() {
  let svc = service().await;

  let created = svc.create(&draft("Asha", 60_000), today()).await.unwrap();
  assert_eq!(created.id, 1);
  assert_eq!(created.age, 29);

  let updated = svc.update(1, &draft("Asha", 65_000), today()).await.unwrap();
  assert_eq!(updated.salary, Decimal::from(65_000));

  let fetched = svc.get(1, today()).await.unwrap();
  assert_eq!(fetched.salary, Decimal::from(65_000));
  assert_eq!(fetched.name, "Asha");

  svc.delete(1).await.unwrap();
  assert!(matches!(
    svc.get(1, today()).await.unwrap_err(),
    Error::NotFound
  ));
}
