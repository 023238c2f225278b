//! The `EmployeeStore` trait — the persistence boundary the core depends on.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! The service layer depends on this abstraction, never on a concrete
//! database.

use std::future::Future;

use crate::employee::{CandidateEmployee, Employee};

/// Abstraction over an employee record store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`). Any method may
/// fail with the backend's error type; the service catches and converts.
pub trait EmployeeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record. The store assigns the id.
  fn insert(
    &self,
    candidate: CandidateEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// All records, in store-native order. Ordering guarantees are a
  /// reporting concern, not a store concern.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Replace every field of record `id` with the candidate's values (full
  /// replace, not merge). Returns `None` if no such record exists.
  fn replace(
    &self,
    id: i64,
    candidate: CandidateEmployee,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Permanently remove record `id`, returning it. Returns `None` — and
  /// mutates nothing — if no such record exists.
  fn remove(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;
}
