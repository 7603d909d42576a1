//! Salary summary records.
//!
//! Two record sets live here. Notes are free text produced elsewhere and
//! saved verbatim. Snapshots are a structured "net salary after expenses"
//! report; the schema reserves a table for them but nothing in Tally writes
//! it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::EntryId;

/// A saved free-text salary summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySummaryNote {
  pub id:           i64,
  pub summary_text: String,
  /// Server-assigned creation time; the sort key for listings.
  pub timestamp:    DateTime<Utc>,
}

/// A structured salary report row. Every column except `id` is nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySnapshot {
  pub id:              i64,
  /// Weak reference to the credit the salary came from; not enforced.
  pub credit_id:       Option<EntryId>,
  pub start_date:      Option<String>,
  pub end_date:        Option<String>,
  pub original_salary: Option<f64>,
  pub total_expenses:  Option<f64>,
  pub updated_salary:  Option<f64>,
  pub summary_note:    Option<String>,
  pub timestamp:       Option<DateTime<Utc>>,
}
