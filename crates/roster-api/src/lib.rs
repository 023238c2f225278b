//! JSON REST API for the roster employee directory.
//!
//! Exposes an axum [`Router`] backed by any
//! [`roster_core::store::EmployeeStore`]. TLS and other transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", roster_api::api_router(store.clone()))
//! ```

pub mod employees;
pub mod error;
pub mod reports;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use roster_core::{service::EmployeeService, store::EmployeeStore};
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` (or
/// `ROSTER_`-prefixed environment variables).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EmployeeStore + 'static,
{
  let service = EmployeeService::new(store);
  Router::new()
    // Employees
    .route(
      "/employees",
      get(employees::list::<S>).post(employees::create::<S>),
    )
    .route(
      "/employees/{id}",
      get(employees::get_one::<S>)
        .put(employees::update_one::<S>)
        .delete(employees::delete_one::<S>),
    )
    // Reports
    .route("/employees/{id}/id-card", get(reports::id_card::<S>))
    .route(
      "/reports/salary-distribution",
      get(reports::salary_distribution::<S>),
    )
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────
