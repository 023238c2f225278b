//! Reporting endpoints: salary-distribution buckets and identity-card data.
//!
//! Both operate on a fresh snapshot of the record set; nothing is cached.

use axum::{
  Json,
  extract::{Path, State},
};
use chrono::Utc;
use roster_core::{
  report::{self, IdentitySummary, SalaryBucket},
  service::EmployeeService,
  store::EmployeeStore,
};

use crate::error::ApiError;

/// `GET /reports/salary-distribution` — always all five bands, zeros
/// included.
pub async fn salary_distribution<S>(
  State(service): State<EmployeeService<S>>,
) -> Result<Json<Vec<SalaryBucket>>, ApiError>
where
  S: EmployeeStore,
{
  let today = Utc::now().date_naive();
  let records = service.list(today).await?;
  Ok(Json(report::salary_distribution(&records)))
}

/// `GET /employees/{id}/id-card` — the identity-credential projection of one
/// record. 404 if the id is unknown.
pub async fn id_card<S>(
  State(service): State<EmployeeService<S>>,
  Path(id): Path<i64>,
) -> Result<Json<IdentitySummary>, ApiError>
where
  S: EmployeeStore,
{
  let today = Utc::now().date_naive();
  let record = service.get(id, today).await?;
  Ok(Json(report::identity_summary(&record)))
}
