//! Partial-update statements.
//!
//! An edit becomes a list of `(column, value)` assignments, one per supplied
//! field, and the `SET` clause names exactly those columns. Column names come
//! from the fixed lists below and never from caller input.

use rusqlite::types::Value;
use tally_core::entry::{CreditEdit, ExpenseEdit};

/// One `column = ?` pair of an `UPDATE ... SET` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
  pub column: &'static str,
  pub value:  Value,
}

impl Assignment {
  fn text(column: &'static str, value: Option<String>) -> Option<Self> {
    value.map(|v| Self { column, value: Value::Text(v) })
  }

  fn real(column: &'static str, value: Option<f64>) -> Option<Self> {
    value.map(|v| Self { column, value: Value::Real(v) })
  }
}

pub fn expense_assignments(edit: ExpenseEdit) -> Vec<Assignment> {
  [
    Assignment::text("date", edit.date),
    Assignment::real("amount", edit.amount),
    Assignment::text("category", edit.category),
    Assignment::text("subcategory", edit.subcategory),
    Assignment::text("note", edit.note),
  ]
  .into_iter()
  .flatten()
  .collect()
}

pub fn credit_assignments(edit: CreditEdit) -> Vec<Assignment> {
  [
    Assignment::text("date", edit.date),
    Assignment::real("amount", edit.amount),
    Assignment::text("category", edit.category),
    Assignment::text("note", edit.note),
  ]
  .into_iter()
  .flatten()
  .collect()
}

/// Build `UPDATE <table> SET a = ?1, b = ?2 WHERE id = ?N` for `assignments`.
///
/// The id is always the last positional parameter.
pub fn update_sql(table: &str, assignments: &[Assignment]) -> String {
  let set_clause = assignments
    .iter()
    .enumerate()
    .map(|(i, a)| format!("{} = ?{}", a.column, i + 1))
    .collect::<Vec<_>>()
    .join(", ");
  format!(
    "UPDATE {table} SET {set_clause} WHERE id = ?{}",
    assignments.len() + 1
  )
}
