//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure body is the same [`Envelope`] the success paths use, so
//! clients handle one shape regardless of outcome.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::{Error, service::Envelope};
use thiserror::Error as ThisError;

/// An error returned by an API handler.
#[derive(Debug, ThisError)]
pub enum ApiError {
  /// A service-level outcome: validation failure, not-found, or store fault.
  #[error(transparent)]
  Service(#[from] Error),

  /// A malformed request the transport itself rejects (e.g. an unknown sort
  /// key).
  #[error("bad request: {0}")]
  BadRequest(String),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, envelope) = match &self {
      ApiError::Service(err) => {
        let status = match err {
          Error::Validation(_) => StatusCode::BAD_REQUEST,
          Error::NotFound => StatusCode::NOT_FOUND,
          Error::Store(detail) => {
            tracing::error!(%detail, "store fault");
            StatusCode::INTERNAL_SERVER_ERROR
          }
        };
        (status, Envelope::from(err))
      }
      ApiError::BadRequest(message) => {
        (StatusCode::BAD_REQUEST, Envelope::fail(message.clone()))
      }
    };
    (status, Json(envelope)).into_response()
  }
}
