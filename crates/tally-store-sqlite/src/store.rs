//! [`SqliteStore`] — the SQLite implementation of [`LedgerStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::types::Value;
use tally_core::{
  entry::{
    CategoryTotal, Credit, CreditEdit, DateRange, EntryId, Expense, ExpenseEdit,
    NewCredit, NewExpense,
  },
  store::LedgerStore,
  summary::{SalarySnapshot, SalarySummaryNote},
};

use crate::{
  Error, Result,
  encode::{RawSalaryNote, RawSalarySnapshot, encode_dt},
  patch::{Assignment, credit_assignments, expense_assignments, update_sql},
  schema::SCHEMA,
};

const EXPENSES: &str = "expenses";
const CREDITS: &str = "credits";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Tally ledger backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl std::fmt::Debug for SqliteStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SqliteStore").finish_non_exhaustive()
  }
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.initialize().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.initialize().await?;
    Ok(store)
  }

  /// Create any missing tables. Existing tables and rows are left untouched,
  /// so this is safe to run on every start.
  pub async fn initialize(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("ledger schema ready");
    Ok(())
  }

  /// `DELETE FROM <table> WHERE id = ?`, returning the affected row count.
  async fn delete_row(&self, table: &'static str, id: EntryId) -> Result<u64> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          &format!("DELETE FROM {table} WHERE id = ?1"),
          rusqlite::params![id],
        )?)
      })
      .await?;
    Ok(deleted as u64)
  }

  /// Apply `assignments` to row `id`, returning the matched row count.
  async fn update_row(
    &self,
    table:       &'static str,
    id:          EntryId,
    assignments: Vec<Assignment>,
  ) -> Result<u64> {
    if assignments.is_empty() {
      return Err(Error::Core(tally_core::Error::NoFieldsToUpdate));
    }

    let sql = update_sql(table, &assignments);
    let mut values: Vec<Value> = assignments.into_iter().map(|a| a.value).collect();
    values.push(Value::Integer(id));

    let matched = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params_from_iter(values))?))
      .await?;
    Ok(matched as u64)
  }

  /// Sum `amount` per category over `range`, optionally for one category.
  async fn category_totals(
    &self,
    table:    &'static str,
    range:    DateRange,
    category: Option<String>,
  ) -> Result<Vec<CategoryTotal>> {
    let totals = self
      .conn
      .call(move |conn| {
        let mut sql = format!(
          "SELECT category, SUM(amount) AS total_amount
           FROM {table}
           WHERE date BETWEEN ?1 AND ?2"
        );
        let mut params = vec![Value::Text(range.start_date), Value::Text(range.end_date)];
        if let Some(c) = category {
          sql.push_str(" AND category = ?3");
          params.push(Value::Text(c));
        }
        sql.push_str(" GROUP BY category ORDER BY category ASC");

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), |row| {
            Ok(CategoryTotal {
              category:     row.get(0)?,
              total_amount: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(totals)
  }
}

// ─── LedgerStore impl ────────────────────────────────────────────────────────

impl LedgerStore for SqliteStore {
  type Error = Error;

  // ── Expenses ──────────────────────────────────────────────────────────────

  async fn insert_expense(&self, input: NewExpense) -> Result<EntryId> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO expenses (date, amount, category, subcategory, note)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            input.date,
            input.amount,
            input.category,
            input.subcategory,
            input.note,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  async fn update_expense(&self, id: EntryId, edit: ExpenseEdit) -> Result<u64> {
    self.update_row(EXPENSES, id, expense_assignments(edit)).await
  }

  async fn delete_expense(&self, id: EntryId) -> Result<u64> {
    self.delete_row(EXPENSES, id).await
  }

  async fn expenses_between(&self, range: DateRange) -> Result<Vec<Expense>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, date, amount, category, subcategory, note
           FROM expenses
           WHERE date BETWEEN ?1 AND ?2
           ORDER BY id ASC",
        )?;
        let rows = stmt
          .query_map(
            rusqlite::params![range.start_date, range.end_date],
            |row| {
              Ok(Expense {
                id:          row.get(0)?,
                date:        row.get(1)?,
                amount:      row.get(2)?,
                category:    row.get(3)?,
                subcategory: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                note:        row.get::<_, Option<String>>(5)?.unwrap_or_default(),
              })
            },
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn expense_totals(
    &self,
    range:    DateRange,
    category: Option<String>,
  ) -> Result<Vec<CategoryTotal>> {
    self.category_totals(EXPENSES, range, category).await
  }

  // ── Credits ───────────────────────────────────────────────────────────────

  async fn insert_credit(&self, input: NewCredit) -> Result<EntryId> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO credits (date, amount, category, note) VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![input.date, input.amount, input.category, input.note],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  async fn update_credit(&self, id: EntryId, edit: CreditEdit) -> Result<u64> {
    self.update_row(CREDITS, id, credit_assignments(edit)).await
  }

  async fn delete_credit(&self, id: EntryId) -> Result<u64> {
    self.delete_row(CREDITS, id).await
  }

  async fn credits_between(&self, range: DateRange) -> Result<Vec<Credit>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, date, amount, category, note
           FROM credits
           WHERE date BETWEEN ?1 AND ?2
           ORDER BY id ASC",
        )?;
        let rows = stmt
          .query_map(
            rusqlite::params![range.start_date, range.end_date],
            |row| {
              Ok(Credit {
                id:       row.get(0)?,
                date:     row.get(1)?,
                amount:   row.get(2)?,
                category: row.get(3)?,
                note:     row.get::<_, Option<String>>(4)?.unwrap_or_default(),
              })
            },
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn credit_totals(
    &self,
    range:    DateRange,
    category: Option<String>,
  ) -> Result<Vec<CategoryTotal>> {
    self.category_totals(CREDITS, range, category).await
  }

  // ── Salary summaries ──────────────────────────────────────────────────────

  async fn insert_salary_note(&self, summary_text: String) -> Result<SalarySummaryNote> {
    let timestamp = Utc::now();
    let at_str    = encode_dt(timestamp);
    let text      = summary_text.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO custom_salary_summaries (summary_text, timestamp) VALUES (?1, ?2)",
          rusqlite::params![text, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(SalarySummaryNote { id, summary_text, timestamp })
  }

  async fn salary_notes(&self) -> Result<Vec<SalarySummaryNote>> {
    let raws: Vec<RawSalaryNote> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, summary_text, timestamp
           FROM custom_salary_summaries
           ORDER BY julianday(timestamp) DESC, id DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSalaryNote {
              id:           row.get(0)?,
              summary_text: row.get(1)?,
              timestamp:    row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSalaryNote::into_note).collect()
  }

  async fn salary_snapshots(&self) -> Result<Vec<SalarySnapshot>> {
    let raws: Vec<RawSalarySnapshot> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, credit_id, start_date, end_date, original_salary,
                  total_expenses, updated_salary, summary_note, timestamp
           FROM salary_summaries
           ORDER BY id ASC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSalarySnapshot {
              id:              row.get(0)?,
              credit_id:       row.get(1)?,
              start_date:      row.get(2)?,
              end_date:        row.get(3)?,
              original_salary: row.get(4)?,
              total_expenses:  row.get(5)?,
              updated_salary:  row.get(6)?,
              summary_note:    row.get(7)?,
              timestamp:       row.get(8)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSalarySnapshot::into_snapshot).collect()
  }
}
