//! Derived reporting views over a snapshot of employee records.
//!
//! Everything here is pure, stateless and deterministic: sorted listings,
//! the salary-distribution histogram, and the identity-card projection.
//! Nothing is persisted or cached — views are recomputed from the snapshot
//! the caller obtained via the service's list operation.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::employee::EmployeeRecord;

// ─── Sorting ─────────────────────────────────────────────────────────────────

/// The field a listing is ordered by. Textual keys compare
/// lexicographically, `salary`/`age` numerically, dates chronologically.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortKey {
  Name,
  Designation,
  Gender,
  State,
  DateOfBirth,
  DateOfJoin,
  Salary,
  Age,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
  #[default]
  Ascending,
  Descending,
}

/// Stable sort of `records` by `key`.
///
/// Records comparing equal on the key retain their relative input order.
/// `Descending` reverses the comparator, not the output, so ties stay
/// stable in both directions.
pub fn sort(records: &mut [EmployeeRecord], key: SortKey, direction: Direction) {
  records.sort_by(|a, b| {
    let ord = compare(a, b, key);
    match direction {
      Direction::Ascending => ord,
      Direction::Descending => ord.reverse(),
    }
  });
}

fn compare(a: &EmployeeRecord, b: &EmployeeRecord, key: SortKey) -> Ordering {
  match key {
    SortKey::Name => a.name.cmp(&b.name),
    SortKey::Designation => a.designation.cmp(&b.designation),
    SortKey::Gender => a.gender.cmp(&b.gender),
    SortKey::State => a.state.cmp(&b.state),
    SortKey::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
    SortKey::DateOfJoin => a.date_of_join.cmp(&b.date_of_join),
    SortKey::Salary => a.salary.cmp(&b.salary),
    SortKey::Age => a.age.cmp(&b.age),
  }
}

// ─── Salary distribution ─────────────────────────────────────────────────────

/// One salary band and the number of records falling in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryBucket {
  pub label: &'static str,
  pub count: usize,
}

/// Tally records into the five fixed salary bands.
///
/// Bands are lower-exclusive/upper-inclusive, except the first which
/// includes zero. Empty bands are reported with a zero count so a chart
/// consumer always sees all five categories.
pub fn salary_distribution(records: &[EmployeeRecord]) -> Vec<SalaryBucket> {
  const LABELS: [&str; 5] = [
    "0-25000",
    "25000-50000",
    "50000-75000",
    "75000-100000",
    "100000+",
  ];

  let mut counts = [0usize; 5];
  for record in records {
    let band = if record.salary <= Decimal::from(25_000) {
      0
    } else if record.salary <= Decimal::from(50_000) {
      1
    } else if record.salary <= Decimal::from(75_000) {
      2
    } else if record.salary <= Decimal::from(100_000) {
      3
    } else {
      4
    };
    counts[band] += 1;
  }

  LABELS
    .iter()
    .zip(counts)
    .map(|(label, count)| SalaryBucket { label, count })
    .collect()
}

// ─── Identity card ───────────────────────────────────────────────────────────

/// The minimal field set an identity credential needs. A read-only
/// projection; produces no side effect and mutates nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySummary {
  pub id:            i64,
  pub name:          String,
  pub designation:   String,
  pub gender:        String,
  pub date_of_birth: NaiveDate,
  pub date_of_join:  NaiveDate,
}

/// Project `record` into the identity-card field set.
pub fn identity_summary(record: &EmployeeRecord) -> IdentitySummary {
  IdentitySummary {
    id:            record.id,
    name:          record.name.clone(),
    designation:   record.designation.clone(),
    gender:        record.gender.clone(),
    date_of_birth: record.date_of_birth,
    date_of_join:  record.date_of_join,
  }
}
