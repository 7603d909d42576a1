//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps written by this crate are fixed-width RFC 3339 strings in UTC
//! with microsecond precision. Rows written by SQLite's own
//! `CURRENT_TIMESTAMP` default (`YYYY-MM-DD HH:MM:SS`) are also accepted and
//! read as UTC. The two forms do not sort together as text, so queries order
//! by `julianday(timestamp)`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use tally_core::summary::{SalarySnapshot, SalarySummaryNote};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

const SQLITE_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Ok(dt.with_timezone(&Utc));
  }
  NaiveDateTime::parse_from_str(s, SQLITE_DATETIME)
    .map(|naive| naive.and_utc())
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// A `custom_salary_summaries` row before timestamp decoding.
pub struct RawSalaryNote {
  pub id:           i64,
  pub summary_text: String,
  pub timestamp:    String,
}

impl RawSalaryNote {
  pub fn into_note(self) -> Result<SalarySummaryNote> {
    Ok(SalarySummaryNote {
      id:           self.id,
      summary_text: self.summary_text,
      timestamp:    decode_dt(&self.timestamp)?,
    })
  }
}

/// A `salary_summaries` row before timestamp decoding.
pub struct RawSalarySnapshot {
  pub id:              i64,
  pub credit_id:       Option<i64>,
  pub start_date:      Option<String>,
  pub end_date:        Option<String>,
  pub original_salary: Option<f64>,
  pub total_expenses:  Option<f64>,
  pub updated_salary:  Option<f64>,
  pub summary_note:    Option<String>,
  pub timestamp:       Option<String>,
}

impl RawSalarySnapshot {
  pub fn into_snapshot(self) -> Result<SalarySnapshot> {
    Ok(SalarySnapshot {
      id:              self.id,
      credit_id:       self.credit_id,
      start_date:      self.start_date,
      end_date:        self.end_date,
      original_salary: self.original_salary,
      total_expenses:  self.total_expenses,
      updated_salary:  self.updated_salary,
      summary_note:    self.summary_note,
      timestamp:       self.timestamp.as_deref().map(decode_dt).transpose()?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn encoded_timestamps_are_fixed_width() {
    let whole = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(encode_dt(whole), "2024-01-01T12:00:00.000000Z");
    assert_eq!(decode_dt(&encode_dt(whole)).unwrap(), whole);
  }

  #[test]
  fn decodes_sqlite_current_timestamp() {
    let dt = decode_dt("2024-03-05 07:08:09").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap());
  }

  #[test]
  fn rejects_garbage() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
