//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/employees` | Optional `?sort_by=<key>&order=<direction>` |
//! | `POST`   | `/employees` | Body: employee draft; 201 + envelope |
//! | `GET`    | `/employees/{id}` | 404 if not found |
//! | `PUT`    | `/employees/{id}` | Full replace; 400 invalid, 404 absent |
//! | `DELETE` | `/employees/{id}` | 404 if not found |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use roster_core::{
  employee::EmployeeDraft,
  report::{self, Direction, SortKey},
  service::{EmployeeService, Envelope},
  store::EmployeeStore,
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  /// Sort key applied to the snapshot before it is returned, e.g. `salary`
  /// or `dateOfJoin`. Unsorted (store-native order) when absent.
  pub sort_by: Option<String>,
  /// `ascending` (default) or `descending`.
  pub order:   Option<String>,
}

/// `GET /employees[?sort_by=<key>][&order=<direction>]`
pub async fn list<S>(
  State(service): State<EmployeeService<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Envelope>, ApiError>
where
  S: EmployeeStore,
{
  let today = Utc::now().date_naive();
  let mut records = service.list(today).await?;

  if let Some(raw_key) = &params.sort_by {
    let key: SortKey = raw_key
      .parse()
      .map_err(|_| ApiError::BadRequest(format!("unknown sort key: {raw_key:?}")))?;
    let direction = match params.order.as_deref() {
      None => Direction::Ascending,
      Some(raw) => raw.parse().map_err(|_| {
        ApiError::BadRequest(format!("unknown sort direction: {raw:?}"))
      })?,
    };
    report::sort(&mut records, key, direction);
  }

  Ok(Json(Envelope::ok(records)))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employees` — 201 + the stored record, now carrying its assigned id.
pub async fn create<S>(
  State(service): State<EmployeeService<S>>,
  Json(draft): Json<EmployeeDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EmployeeStore,
{
  let today = Utc::now().date_naive();
  let record = service.create(&draft, today).await?;
  Ok((
    StatusCode::CREATED,
    Json(Envelope::ok_with("Employee created successfully", vec![record])),
  ))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/{id}`
pub async fn get_one<S>(
  State(service): State<EmployeeService<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Envelope>, ApiError>
where
  S: EmployeeStore,
{
  let today = Utc::now().date_naive();
  let record = service.get(id, today).await?;
  Ok(Json(Envelope::ok(vec![record])))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /employees/{id}` — full replace, not merge.
pub async fn update_one<S>(
  State(service): State<EmployeeService<S>>,
  Path(id): Path<i64>,
  Json(draft): Json<EmployeeDraft>,
) -> Result<Json<Envelope>, ApiError>
where
  S: EmployeeStore,
{
  let today = Utc::now().date_naive();
  let record = service.update(id, &draft, today).await?;
  Ok(Json(Envelope::ok_with(
    "Employee updated successfully",
    vec![record],
  )))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /employees/{id}`
pub async fn delete_one<S>(
  State(service): State<EmployeeService<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Envelope>, ApiError>
where
  S: EmployeeStore,
{
  service.delete(id).await?;
  Ok(Json(Envelope::ok_with(
    "Employee deleted successfully",
    Vec::new(),
  )))
}
