//! The `LedgerStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `tally-store-sqlite`).
//! Higher layers (the [`Ledger`](crate::Ledger) façade, `tally-api`) depend on
//! this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  entry::{
    CategoryTotal, Credit, CreditEdit, DateRange, EntryId, Expense, ExpenseEdit,
    NewCredit, NewExpense,
  },
  summary::{SalarySnapshot, SalarySummaryNote},
};

/// Raw row access over the four ledger record sets.
///
/// Every method is self-contained: it performs its reads/writes and returns
/// without holding anything across calls. Ids are assigned by the backend,
/// strictly increase per table and are never reused.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait LedgerStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Expenses ──────────────────────────────────────────────────────────

  /// Insert one expense and return its new id.
  fn insert_expense(
    &self,
    input: NewExpense,
  ) -> impl Future<Output = Result<EntryId, Self::Error>> + Send + '_;

  /// Apply the supplied fields of `edit` to the expense `id`.
  ///
  /// Returns the number of rows matched (0 if `id` does not exist). An empty
  /// edit is rejected without touching the database.
  fn update_expense(
    &self,
    id: EntryId,
    edit: ExpenseEdit,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Delete expense `id`, returning the number of rows removed (0 or 1).
  fn delete_expense(
    &self,
    id: EntryId,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Expenses dated within `range` (inclusive), in ascending id order.
  fn expenses_between(
    &self,
    range: DateRange,
  ) -> impl Future<Output = Result<Vec<Expense>, Self::Error>> + Send + '_;

  /// Per-category expense sums within `range`, ascending by category.
  fn expense_totals(
    &self,
    range: DateRange,
    category: Option<String>,
  ) -> impl Future<Output = Result<Vec<CategoryTotal>, Self::Error>> + Send + '_;

  // ── Credits ───────────────────────────────────────────────────────────

  fn insert_credit(
    &self,
    input: NewCredit,
  ) -> impl Future<Output = Result<EntryId, Self::Error>> + Send + '_;

  fn update_credit(
    &self,
    id: EntryId,
    edit: CreditEdit,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  fn delete_credit(
    &self,
    id: EntryId,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  fn credits_between(
    &self,
    range: DateRange,
  ) -> impl Future<Output = Result<Vec<Credit>, Self::Error>> + Send + '_;

  fn credit_totals(
    &self,
    range: DateRange,
    category: Option<String>,
  ) -> impl Future<Output = Result<Vec<CategoryTotal>, Self::Error>> + Send + '_;

  // ── Salary summaries ──────────────────────────────────────────────────

  /// Append a free-text note; the timestamp is set by the store.
  fn insert_salary_note(
    &self,
    summary_text: String,
  ) -> impl Future<Output = Result<SalarySummaryNote, Self::Error>> + Send + '_;

  /// All notes, most recent first.
  fn salary_notes(
    &self,
  ) -> impl Future<Output = Result<Vec<SalarySummaryNote>, Self::Error>> + Send + '_;

  /// All structured snapshots in ascending id order.
  fn salary_snapshots(
    &self,
  ) -> impl Future<Output = Result<Vec<SalarySnapshot>, Self::Error>> + Send + '_;
}
