//! CRUD orchestration: validate → persist → shape the uniform envelope.
//!
//! Every operation resolves to `Result<_, Error>` with the taxonomy of
//! [`Error`](crate::Error); the [`Envelope`] is the uniform wire shape the
//! transport serialises from those outcomes.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
  Error, Result,
  employee::{EmployeeDraft, EmployeeRecord},
  store::EmployeeStore,
  validate,
};

// ─── Envelope ────────────────────────────────────────────────────────────────

/// The uniform result wrapper every operation answers with on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
  pub success: bool,
  pub message: String,
  pub records: Vec<EmployeeRecord>,
}

impl Envelope {
  /// Successful outcome wrapping `records`.
  pub fn ok(records: Vec<EmployeeRecord>) -> Self {
    Self { success: true, message: String::new(), records }
  }

  /// Successful outcome with a status message.
  pub fn ok_with(message: impl Into<String>, records: Vec<EmployeeRecord>) -> Self {
    Self { success: true, message: message.into(), records }
  }

  /// Failed outcome; never carries records.
  pub fn fail(message: impl Into<String>) -> Self {
    Self { success: false, message: message.into(), records: Vec::new() }
  }
}

impl From<&Error> for Envelope {
  fn from(err: &Error) -> Self {
    Envelope::fail(err.to_string())
  }
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Orchestrates the employee CRUD operations over any [`EmployeeStore`].
///
/// Holds a store handle constructed once at process start. Cloning is cheap
/// — the handle is reference-counted.
pub struct EmployeeService<S> {
  store: Arc<S>,
}

impl<S> Clone for EmployeeService<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store) }
  }
}

impl<S> EmployeeService<S>
where
  S: EmployeeStore,
{
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  /// Validate and persist a new record.
  ///
  /// Creation never partially succeeds: if the store faults, no record is
  /// visible and the fault is surfaced as [`Error::Store`].
  pub async fn create(
    &self,
    draft: &EmployeeDraft,
    today: NaiveDate,
  ) -> Result<EmployeeRecord> {
    let candidate = validate::validate(draft, today).map_err(Error::Validation)?;
    let employee = self.store.insert(candidate).await.map_err(Error::store)?;
    Ok(employee.into_record(today))
  }

  /// Look up one record. Absence is [`Error::NotFound`] — a normal outcome
  /// the caller handles as a result, not a crash.
  pub async fn get(&self, id: i64, today: NaiveDate) -> Result<EmployeeRecord> {
    let employee = self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound)?;
    Ok(employee.into_record(today))
  }

  /// Snapshot of all records in store-native order. Sorting is a reporting
  /// concern applied downstream.
  pub async fn list(&self, today: NaiveDate) -> Result<Vec<EmployeeRecord>> {
    let employees = self.store.find_all().await.map_err(Error::store)?;
    Ok(
      employees
        .into_iter()
        .map(|e| e.into_record(today))
        .collect(),
    )
  }

  /// Validate, then replace every field of record `id` with the candidate's
  /// values. Validation runs first, so an invalid draft against an absent id
  /// reports the violations, not the absence.
  pub async fn update(
    &self,
    id: i64,
    draft: &EmployeeDraft,
    today: NaiveDate,
  ) -> Result<EmployeeRecord> {
    let candidate = validate::validate(draft, today).map_err(Error::Validation)?;
    let employee = self
      .store
      .replace(id, candidate)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound)?;
    Ok(employee.into_record(today))
  }

  /// Permanently remove record `id`. Absence is [`Error::NotFound`] and
  /// mutates nothing.
  pub async fn delete(&self, id: i64) -> Result<()> {
    self
      .store
      .remove(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound)?;
    Ok(())
  }
}
