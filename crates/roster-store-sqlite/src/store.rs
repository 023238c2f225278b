//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::path::Path;

use roster_core::{
  employee::{CandidateEmployee, Employee},
  store::EmployeeStore,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{RawEmployee, encode_date, encode_salary},
  schema::SCHEMA,
};

const SELECT_COLUMNS: &str =
  "id, name, designation, gender, state, date_of_birth, date_of_join, salary";

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, candidate: CandidateEmployee) -> Result<Employee> {
    let employee = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employees (
             name, designation, gender, state,
             date_of_birth, date_of_join, salary
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            candidate.name,
            candidate.designation,
            candidate.gender,
            candidate.state,
            encode_date(candidate.date_of_birth),
            encode_date(candidate.date_of_join),
            encode_salary(candidate.salary),
          ],
        )?;
        let id = conn.last_insert_rowid();
        Ok(candidate.with_id(id))
      })
      .await?;

    Ok(employee)
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
    let raw: Option<RawEmployee> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {SELECT_COLUMNS} FROM employees WHERE id = ?1"),
              rusqlite::params![id],
              RawEmployee::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawEmployee::into_employee).transpose()
  }

  async fn find_all(&self) -> Result<Vec<Employee>> {
    // No ORDER BY: store-native (rowid) order, per the store contract.
    let raws: Vec<RawEmployee> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {SELECT_COLUMNS} FROM employees"))?;
        let rows = stmt
          .query_map([], RawEmployee::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEmployee::into_employee).collect()
  }

  async fn replace(
    &self,
    id: i64,
    candidate: CandidateEmployee,
  ) -> Result<Option<Employee>> {
    let replaced = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE employees
           SET name = ?1, designation = ?2, gender = ?3, state = ?4,
               date_of_birth = ?5, date_of_join = ?6, salary = ?7
           WHERE id = ?8",
          rusqlite::params![
            candidate.name,
            candidate.designation,
            candidate.gender,
            candidate.state,
            encode_date(candidate.date_of_birth),
            encode_date(candidate.date_of_join),
            encode_salary(candidate.salary),
            id,
          ],
        )?;
        Ok(if changed == 0 { None } else { Some(candidate.with_id(id)) })
      })
      .await?;

    Ok(replaced)
  }

  async fn remove(&self, id: i64) -> Result<Option<Employee>> {
    let raw: Option<RawEmployee> = self
      .conn
      .call(move |conn| {
        let existing = conn
          .query_row(
            &format!("SELECT {SELECT_COLUMNS} FROM employees WHERE id = ?1"),
            rusqlite::params![id],
            RawEmployee::from_row,
          )
          .optional()?;

        if existing.is_some() {
          conn.execute("DELETE FROM employees WHERE id = ?1", rusqlite::params![id])?;
        }

        Ok(existing)
      })
      .await?;

    raw.map(RawEmployee::into_employee).transpose()
  }
}
