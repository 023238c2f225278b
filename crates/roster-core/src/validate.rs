//! Field validation for candidate employee records.
//!
//! All rules run; every violation is collected so a caller can report the
//! whole problem set in one pass. On success the draft is returned as a
//! fully parsed [`CandidateEmployee`] — the only form the store accepts.

use std::{fmt, ops::RangeInclusive};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
  employee::{CandidateEmployee, EmployeeDraft},
  states,
};

/// Upper bound on `name` and `designation` length, in characters.
pub const MAX_TEXT_LEN: usize = 100;

/// Sanity bounds on the submitted age.
pub const AGE_RANGE: RangeInclusive<i64> = 0..=150;

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Violation ───────────────────────────────────────────────────────────────

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
  /// Wire name of the offending field, e.g. `dateOfBirth`.
  pub field:  &'static str,
  pub reason: String,
}

impl Violation {
  fn new(field: &'static str, reason: impl Into<String>) -> Self {
    Self { field, reason: reason.into() }
  }

  fn required(field: &'static str) -> Self {
    Self::new(field, "is required")
  }

  /// Join every violation into one human-readable message.
  pub fn join(violations: &[Violation]) -> String {
    violations
      .iter()
      .map(Violation::to_string)
      .collect::<Vec<_>>()
      .join("; ")
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.field, self.reason)
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Check `draft` against every field rule, relative to `today`.
///
/// Pure: same draft and date, same outcome. Violations are reported in field
/// declaration order, never just the first.
pub fn validate(
  draft: &EmployeeDraft,
  today: NaiveDate,
) -> Result<CandidateEmployee, Vec<Violation>> {
  let mut violations: Vec<Violation> = Vec::new();

  let name         = checked_text("name", &draft.name, &mut violations);
  let designation  = checked_text("designation", &draft.designation, &mut violations);
  let date_of_join = checked_date("dateOfJoin", &draft.date_of_join, &mut violations);

  let salary = match draft.salary {
    None => {
      violations.push(Violation::required("salary"));
      None
    }
    Some(s) if s < Decimal::ZERO => {
      violations.push(Violation::new("salary", "cannot be negative"));
      None
    }
    Some(s) => Some(s),
  };

  let gender = match trimmed(&draft.gender) {
    None => {
      violations.push(Violation::required("gender"));
      None
    }
    Some(g) => Some(g),
  };

  let state = match trimmed(&draft.state) {
    None => {
      violations.push(Violation::required("state"));
      None
    }
    Some(s) if !states::is_indian_state(&s) => {
      violations.push(Violation::new(
        "state",
        format!("{s:?} is not a recognised Indian state or union territory"),
      ));
      None
    }
    Some(s) => Some(s),
  };

  let date_of_birth = match checked_date("dateOfBirth", &draft.date_of_birth, &mut violations) {
    Some(d) if d > today => {
      violations.push(Violation::new("dateOfBirth", "cannot be in the future"));
      None
    }
    other => other,
  };

  match draft.age {
    None => violations.push(Violation::required("age")),
    Some(a) if !AGE_RANGE.contains(&a) => violations.push(Violation::new(
      "age",
      format!("must be between {} and {}", AGE_RANGE.start(), AGE_RANGE.end()),
    )),
    Some(_) => {}
  }

  // Any `None` above pushed a violation, so the fallback arm is only taken
  // when `violations` is non-empty.
  match (name, designation, date_of_join, salary, gender, state, date_of_birth) {
    (
      Some(name),
      Some(designation),
      Some(date_of_join),
      Some(salary),
      Some(gender),
      Some(state),
      Some(date_of_birth),
    ) if violations.is_empty() => Ok(CandidateEmployee {
      name,
      designation,
      gender,
      state,
      date_of_birth,
      date_of_join,
      salary,
    }),
    _ => Err(violations),
  }
}

// ─── Field helpers ───────────────────────────────────────────────────────────

/// A present, non-whitespace value — or `None`.
fn trimmed(value: &Option<String>) -> Option<String> {
  value
    .as_deref()
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .map(str::to_owned)
}

fn checked_text(
  field: &'static str,
  value: &Option<String>,
  violations: &mut Vec<Violation>,
) -> Option<String> {
  match trimmed(value) {
    None => {
      violations.push(Violation::required(field));
      None
    }
    Some(v) if v.chars().count() > MAX_TEXT_LEN => {
      violations.push(Violation::new(
        field,
        format!("cannot be longer than {MAX_TEXT_LEN} characters"),
      ));
      None
    }
    Some(v) => Some(v),
  }
}

fn checked_date(
  field: &'static str,
  value: &Option<String>,
  violations: &mut Vec<Violation>,
) -> Option<NaiveDate> {
  let raw = match trimmed(value) {
    None => {
      violations.push(Violation::required(field));
      return None;
    }
    Some(r) => r,
  };
  match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
    Ok(d) => Some(d),
    Err(_) => {
      violations.push(Violation::new(
        field,
        format!("{raw:?} is not a valid calendar date (expected YYYY-MM-DD)"),
      ));
      None
    }
  }
}
