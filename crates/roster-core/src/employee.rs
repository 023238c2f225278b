//! Employee — the sole entity of the directory.
//!
//! The stored record never carries an age. Age is a quantity derived from
//! `date_of_birth` at the moment a record is shaped for the wire; see
//! [`Employee::into_record`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Stored entity ───────────────────────────────────────────────────────────

/// A persisted employee record.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:            i64,
  pub name:          String,
  pub designation:   String,
  pub gender:        String,
  /// Single value from the fixed Indian-states reference list.
  pub state:         String,
  pub date_of_birth: NaiveDate,
  pub date_of_join:  NaiveDate,
  /// Exact decimal amount; no binary floating point anywhere.
  pub salary:        Decimal,
}

impl Employee {
  /// Whole years between `date_of_birth` and `today`, month/day aware: the
  /// year difference is reduced by one if this year's birthday has not yet
  /// passed.
  pub fn age_on(&self, today: NaiveDate) -> i64 {
    use chrono::Datelike as _;

    let dob = self.date_of_birth;
    let mut years = i64::from(today.year() - dob.year());
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
      years -= 1;
    }
    years
  }

  /// Shape the record for the wire, deriving `age` as of `today`.
  pub fn into_record(self, today: NaiveDate) -> EmployeeRecord {
    let age = self.age_on(today);
    EmployeeRecord {
      id:            self.id,
      name:          self.name,
      designation:   self.designation,
      gender:        self.gender,
      state:         self.state,
      date_of_birth: self.date_of_birth,
      date_of_join:  self.date_of_join,
      salary:        self.salary,
      age,
    }
  }
}

// ─── Candidate input ─────────────────────────────────────────────────────────

/// Raw candidate input, exactly as submitted.
///
/// Every field is optional and dates stay strings, so the validator — not
/// serde — owns well-formedness and can report a malformed date together
/// with every other field violation in a single pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
  pub name:          Option<String>,
  pub designation:   Option<String>,
  pub gender:        Option<String>,
  pub state:         Option<String>,
  /// `YYYY-MM-DD`.
  pub date_of_birth: Option<String>,
  /// `YYYY-MM-DD`.
  pub date_of_join:  Option<String>,
  pub salary:        Option<Decimal>,
  /// Accepted for backward compatibility with older clients; range-checked,
  /// then discarded in favour of the value derived from `date_of_birth`.
  pub age:           Option<i64>,
}

/// A validated candidate — every field parsed and checked, no id yet.
///
/// Produced only by [`validate`](crate::validate::validate); the only way a
/// record reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateEmployee {
  pub name:          String,
  pub designation:   String,
  pub gender:        String,
  pub state:         String,
  pub date_of_birth: NaiveDate,
  pub date_of_join:  NaiveDate,
  pub salary:        Decimal,
}

impl CandidateEmployee {
  /// Promote the candidate to a stored record under the store-assigned id.
  pub fn with_id(self, id: i64) -> Employee {
    Employee {
      id,
      name:          self.name,
      designation:   self.designation,
      gender:        self.gender,
      state:         self.state,
      date_of_birth: self.date_of_birth,
      date_of_join:  self.date_of_join,
      salary:        self.salary,
    }
  }
}

// ─── Wire view ───────────────────────────────────────────────────────────────

/// Wire representation of an employee: the stored record plus the derived
/// age. Never stored, always computed at response time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
  pub id:            i64,
  pub name:          String,
  pub designation:   String,
  pub gender:        String,
  pub state:         String,
  pub date_of_birth: NaiveDate,
  pub date_of_join:  NaiveDate,
  pub salary:        Decimal,
  pub age:           i64,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn employee(dob: NaiveDate) -> Employee {
    Employee {
      id:            1,
      name:          "Asha".into(),
      designation:   "Engineer".into(),
      gender:        "Female".into(),
      state:         "Karnataka".into(),
      date_of_birth: dob,
      date_of_join:  NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
      salary:        Decimal::from(60_000),
    }
  }

  #[test]
  fn age_counts_completed_years_only() {
    let e = employee(NaiveDate::from_ymd_opt(1995, 5, 20).unwrap());

    // Day before the 30th birthday.
    let before = NaiveDate::from_ymd_opt(2025, 5, 19).unwrap();
    assert_eq!(e.age_on(before), 29);

    // On the birthday itself.
    let on = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
    assert_eq!(e.age_on(on), 30);
  }

  #[test]
  fn into_record_derives_age() {
    let e = employee(NaiveDate::from_ymd_opt(1995, 5, 20).unwrap());
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let record = e.clone().into_record(today);
    assert_eq!(record.age, 29);
    assert_eq!(record.salary, e.salary);
    assert_eq!(record.name, e.name);
  }
}
