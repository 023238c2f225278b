//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` strings. Salaries are stored as exact
//! decimal strings so no precision is lost on the round-trip.

use chrono::NaiveDate;
use roster_core::employee::Employee;
use rust_decimal::Decimal;

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Dates ───────────────────────────────────────────────────────────────────

pub fn encode_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Salary ──────────────────────────────────────────────────────────────────

pub fn encode_salary(salary: Decimal) -> String {
  salary.to_string()
}

pub fn decode_salary(s: &str) -> Result<Decimal> {
  s.parse::<Decimal>()
    .map_err(|e| Error::SalaryParse(format!("{s:?}: {e}")))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from an `employees` row.
pub struct RawEmployee {
  pub id:            i64,
  pub name:          String,
  pub designation:   String,
  pub gender:        String,
  pub state:         String,
  pub date_of_birth: String,
  pub date_of_join:  String,
  pub salary:        String,
}

impl RawEmployee {
  /// Column order must match the SELECT lists in
  /// [`store`](crate::store): id, name, designation, gender, state,
  /// date_of_birth, date_of_join, salary.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      name:          row.get(1)?,
      designation:   row.get(2)?,
      gender:        row.get(3)?,
      state:         row.get(4)?,
      date_of_birth: row.get(5)?,
      date_of_join:  row.get(6)?,
      salary:        row.get(7)?,
    })
  }

  pub fn into_employee(self) -> Result<Employee> {
    Ok(Employee {
      id:            self.id,
      name:          self.name,
      designation:   self.designation,
      gender:        self.gender,
      state:         self.state,
      date_of_birth: decode_date(&self.date_of_birth)?,
      date_of_join:  decode_date(&self.date_of_join)?,
      salary:        decode_salary(&self.salary)?,
    })
  }
}
