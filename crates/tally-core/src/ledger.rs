//! The query/mutation façade over a [`LedgerStore`].
//!
//! Each method is one invokable operation. Mutations answer with a [`Reply`];
//! reads answer with plain row types. User-input problems become
//! `Reply::Error`, while store faults propagate unchanged as `Err`.

use tracing::debug;

use crate::{
  Error,
  entry::{
    CategoryTotal, Credit, CreditEdit, DateRange, EntryId, Expense, ExpenseEdit,
    NewCredit, NewExpense,
  },
  reply::{Reply, SUMMARY_SAVED},
  store::LedgerStore,
  summary::{SalarySnapshot, SalarySummaryNote},
};

/// Stateless operations over a ledger store.
///
/// Cloning is as cheap as cloning the store.
#[derive(Debug, Clone)]
pub struct Ledger<S> {
  store: S,
}

impl<S: LedgerStore> Ledger<S> {
  pub fn new(store: S) -> Self { Self { store } }

  /// The underlying store.
  pub fn store(&self) -> &S { &self.store }

  // ── Expenses ──────────────────────────────────────────────────────────

  pub async fn add_expense(&self, input: NewExpense) -> Result<Reply, S::Error> {
    let id = self.store.insert_expense(input).await?;
    debug!(id, "expense added");
    Ok(Reply::created(id))
  }

  /// Remove an expense. A missing id reports `deleted: 0`.
  pub async fn delete_expense(&self, id: EntryId) -> Result<Reply, S::Error> {
    let deleted = self.store.delete_expense(id).await?;
    debug!(id, deleted, "expense delete");
    Ok(Reply::deleted(deleted))
  }

  /// Update only the fields present in `edit`.
  ///
  /// An empty edit answers "No fields to update." and writes nothing. A
  /// missing id matches zero rows and still answers `ok`.
  pub async fn edit_expense(
    &self,
    id: EntryId,
    edit: ExpenseEdit,
  ) -> Result<Reply, S::Error> {
    if edit.is_empty() {
      return Ok(Reply::error(Error::NoFieldsToUpdate));
    }
    let matched = self.store.update_expense(id, edit).await?;
    debug!(id, matched, "expense edit");
    Ok(Reply::ok())
  }

  pub async fn list_expenses(&self, range: DateRange) -> Result<Vec<Expense>, S::Error> {
    self.store.expenses_between(range).await
  }

  /// Expense totals per category. An empty `category` filter means "all".
  pub async fn summarize(
    &self,
    range: DateRange,
    category: Option<String>,
  ) -> Result<Vec<CategoryTotal>, S::Error> {
    self.store.expense_totals(range, non_empty(category)).await
  }

  // ── Credits ───────────────────────────────────────────────────────────

  pub async fn add_credit(&self, input: NewCredit) -> Result<Reply, S::Error> {
    let id = self.store.insert_credit(input).await?;
    debug!(id, "credit added");
    Ok(Reply::created(id))
  }

  pub async fn delete_credit(&self, id: EntryId) -> Result<Reply, S::Error> {
    let deleted = self.store.delete_credit(id).await?;
    debug!(id, deleted, "credit delete");
    Ok(Reply::deleted(deleted))
  }

  /// Credit counterpart of [`edit_expense`](Self::edit_expense).
  pub async fn edit_credit(&self, id: EntryId, edit: CreditEdit) -> Result<Reply, S::Error> {
    if edit.is_empty() {
      return Ok(Reply::error(Error::NoFieldsToUpdate));
    }
    let matched = self.store.update_credit(id, edit).await?;
    debug!(id, matched, "credit edit");
    Ok(Reply::ok())
  }

  pub async fn list_credits(&self, range: DateRange) -> Result<Vec<Credit>, S::Error> {
    self.store.credits_between(range).await
  }

  pub async fn summarize_credits(
    &self,
    range: DateRange,
    category: Option<String>,
  ) -> Result<Vec<CategoryTotal>, S::Error> {
    self.store.credit_totals(range, non_empty(category)).await
  }

  // ── Salary summaries ──────────────────────────────────────────────────

  /// Save an opaque summary text. The content is not inspected.
  pub async fn save_salary_summary(&self, summary_text: String) -> Result<Reply, S::Error> {
    let note = self.store.insert_salary_note(summary_text).await?;
    debug!(id = note.id, "salary summary saved");
    Ok(Reply::message(SUMMARY_SAVED))
  }

  pub async fn list_salary_summaries(&self) -> Result<Vec<SalarySummaryNote>, S::Error> {
    self.store.salary_notes().await
  }

  pub async fn list_salary_snapshots(&self) -> Result<Vec<SalarySnapshot>, S::Error> {
    self.store.salary_snapshots().await
  }
}

fn non_empty(category: Option<String>) -> Option<String> {
  category.filter(|c| !c.is_empty())
}
