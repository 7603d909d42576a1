//! Handlers for `/expenses` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/expenses` | `?start_date&end_date`, inclusive; ascending id |
//! | `POST`   | `/expenses` | Body: [`NewExpense`]; returns 201 + `{"status":"ok","id":N}` |
//! | `PATCH`  | `/expenses/:id` | Body: [`ExpenseEdit`]; absent keys are left alone |
//! | `DELETE` | `/expenses/:id` | `{"status":"ok","deleted":0\|1}` |
//! | `GET`    | `/expenses/summary` | [`SummaryParams`]; totals per category |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use tally_core::{
  Reply,
  entry::{CategoryTotal, DateRange, EntryId, Expense, ExpenseEdit, NewExpense},
  store::LedgerStore,
};

use crate::{AppState, SummaryParams, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /expenses?start_date=<date>&end_date=<date>`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(range): Query<DateRange>,
) -> Result<Json<Vec<Expense>>, ApiError>
where
  S: LedgerStore,
{
  let rows = state.ledger.list_expenses(range).await.map_err(ApiError::store)?;
  Ok(Json(rows))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /expenses`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<NewExpense>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LedgerStore,
{
  let reply = state.ledger.add_expense(body).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(reply)))
}

// ─── Edit ─────────────────────────────────────────────────────────────────────

/// `PATCH /expenses/:id` — an empty body answers `{"status":"error"}`.
pub async fn edit<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<EntryId>,
  Json(body): Json<ExpenseEdit>,
) -> Result<Json<Reply>, ApiError>
where
  S: LedgerStore,
{
  let reply = state.ledger.edit_expense(id, body).await.map_err(ApiError::store)?;
  Ok(Json(reply))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /expenses/:id`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<EntryId>,
) -> Result<Json<Reply>, ApiError>
where
  S: LedgerStore,
{
  let reply = state.ledger.delete_expense(id).await.map_err(ApiError::store)?;
  Ok(Json(reply))
}

// ─── Summary ──────────────────────────────────────────────────────────────────

/// `GET /expenses/summary?start_date=<date>&end_date=<date>[&category=<c>]`
pub async fn summarize<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<SummaryParams>,
) -> Result<Json<Vec<CategoryTotal>>, ApiError>
where
  S: LedgerStore,
{
  let (range, category) = params.into_parts();
  let totals = state
    .ledger
    .summarize(range, category)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(totals))
}
