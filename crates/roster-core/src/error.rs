//! The service-level outcome taxonomy.
//!
//! Every public operation resolves to either a payload or one of these
//! variants; nothing below the service boundary escapes untyped.

use thiserror::Error;

use crate::validate::Violation;

#[derive(Debug, Error)]
pub enum Error {
  /// One or more field rules failed. Always recoverable by the caller; the
  /// message joins every violation so one pass reports the whole problem
  /// set.
  #[error("{}", Violation::join(.0))]
  Validation(Vec<Violation>),

  /// The referenced id is absent from the store. An expected outcome, not a
  /// fault.
  #[error("Employee not found")]
  NotFound,

  /// The persistence backend failed; carries the backend's description.
  #[error("store fault: {0}")]
  Store(String),
}

impl Error {
  /// Convert a backend error into the [`Error::Store`] taxonomy member.
  pub fn store(err: impl std::error::Error) -> Self {
    Self::Store(err.to_string())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
