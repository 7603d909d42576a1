//! Ledger entries — expenses and credits.
//!
//! Both kinds share the same shape (a dated, categorised amount) and live in
//! separate tables; the sign of `amount` carries no meaning. Dates are opaque
//! strings compared lexicographically, so callers are expected to use
//! `YYYY-MM-DD`.

use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key of an entry.
pub type EntryId = i64;

// ─── Range ───────────────────────────────────────────────────────────────────

/// An inclusive, closed date interval `[start_date, end_date]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
  pub start_date: String,
  pub end_date:   String,
}

impl DateRange {
  pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
    Self { start_date: start_date.into(), end_date: end_date.into() }
  }
}

// ─── Expenses ────────────────────────────────────────────────────────────────

/// A persisted expense row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
  pub id:          EntryId,
  pub date:        String,
  pub amount:      f64,
  pub category:    String,
  pub subcategory: String,
  pub note:        String,
}

/// Input for recording a new expense. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
  pub date:        String,
  pub amount:      f64,
  pub category:    String,
  #[serde(default)]
  pub subcategory: String,
  #[serde(default)]
  pub note:        String,
}

impl NewExpense {
  /// Convenience constructor with empty subcategory and note.
  pub fn new(date: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
    Self {
      date: date.into(),
      amount,
      category: category.into(),
      subcategory: String::new(),
      note: String::new(),
    }
  }
}

/// A partial update of an expense.
///
/// `None` means "leave the column alone"; `Some("")` and `Some(0.0)` are
/// real values and are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEdit {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub amount:      Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subcategory: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub note:        Option<String>,
}

impl ExpenseEdit {
  /// `true` if no field was supplied.
  pub fn is_empty(&self) -> bool {
    self.date.is_none()
      && self.amount.is_none()
      && self.category.is_none()
      && self.subcategory.is_none()
      && self.note.is_none()
  }
}

// ─── Credits ─────────────────────────────────────────────────────────────────

/// A persisted credit (income) row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
  pub id:       EntryId,
  pub date:     String,
  pub amount:   f64,
  pub category: String,
  pub note:     String,
}

/// Input for recording a new credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCredit {
  pub date:     String,
  pub amount:   f64,
  pub category: String,
  #[serde(default)]
  pub note:     String,
}

impl NewCredit {
  pub fn new(date: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
    Self {
      date: date.into(),
      amount,
      category: category.into(),
      note: String::new(),
    }
  }
}

/// A partial update of a credit; same rules as [`ExpenseEdit`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditEdit {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub amount:   Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub note:     Option<String>,
}

impl CreditEdit {
  pub fn is_empty(&self) -> bool {
    self.date.is_none()
      && self.amount.is_none()
      && self.category.is_none()
      && self.note.is_none()
  }
}

// ─── Aggregates ──────────────────────────────────────────────────────────────

/// Sum of amounts for one category over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
  pub category:     String,
  pub total_amount: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_edit_is_empty() {
    assert!(ExpenseEdit::default().is_empty());
    assert!(CreditEdit::default().is_empty());
  }

  #[test]
  fn zero_and_empty_values_count_as_supplied() {
    let edit = ExpenseEdit { amount: Some(0.0), ..Default::default() };
    assert!(!edit.is_empty());

    let edit = CreditEdit { note: Some(String::new()), ..Default::default() };
    assert!(!edit.is_empty());
  }

  #[test]
  fn edit_json_distinguishes_absent_from_empty() {
    let edit: ExpenseEdit =
      serde_json::from_str(r#"{"note":"","amount":0}"#).unwrap();
    assert_eq!(edit.note.as_deref(), Some(""));
    assert_eq!(edit.amount, Some(0.0));
    assert!(edit.date.is_none());
    assert!(edit.category.is_none());
    assert!(edit.subcategory.is_none());

    // Absent fields are not serialised, so a round trip through a client
    // never turns "not supplied" into an explicit value.
    let json = serde_json::to_value(&edit).unwrap();
    assert_eq!(json, serde_json::json!({ "amount": 0.0, "note": "" }));
  }

  #[test]
  fn new_expense_defaults_optional_text() {
    let input: NewExpense =
      serde_json::from_str(r#"{"date":"2024-01-01","amount":3.5,"category":"food"}"#)
        .unwrap();
    assert_eq!(input, NewExpense::new("2024-01-01", 3.5, "food"));
  }
}
