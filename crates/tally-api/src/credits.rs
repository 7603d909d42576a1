//! Handlers for `/credits` endpoints — the income mirror of
//! [`expenses`](crate::expenses), without a subcategory.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/credits` | `?start_date&end_date` |
//! | `POST`   | `/credits` | Body: [`NewCredit`]; returns 201 |
//! | `PATCH`  | `/credits/:id` | Body: [`CreditEdit`] |
//! | `DELETE` | `/credits/:id` | |
//! | `GET`    | `/credits/summary` | [`SummaryParams`] |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use tally_core::{
  Reply,
  entry::{CategoryTotal, Credit, CreditEdit, DateRange, EntryId, NewCredit},
  store::LedgerStore,
};

use crate::{AppState, SummaryParams, error::ApiError};

/// `GET /credits?start_date=<date>&end_date=<date>`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(range): Query<DateRange>,
) -> Result<Json<Vec<Credit>>, ApiError>
where
  S: LedgerStore,
{
  let rows = state.ledger.list_credits(range).await.map_err(ApiError::store)?;
  Ok(Json(rows))
}

/// `POST /credits`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<NewCredit>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LedgerStore,
{
  let reply = state.ledger.add_credit(body).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(reply)))
}

/// `PATCH /credits/:id`
pub async fn edit<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<EntryId>,
  Json(body): Json<CreditEdit>,
) -> Result<Json<Reply>, ApiError>
where
  S: LedgerStore,
{
  let reply = state.ledger.edit_credit(id, body).await.map_err(ApiError::store)?;
  Ok(Json(reply))
}

/// `DELETE /credits/:id`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<EntryId>,
) -> Result<Json<Reply>, ApiError>
where
  S: LedgerStore,
{
  let reply = state.ledger.delete_credit(id).await.map_err(ApiError::store)?;
  Ok(Json(reply))
}

/// `GET /credits/summary?start_date=<date>&end_date=<date>[&category=<c>]`
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
    .summarize_credits(range, category)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(totals))
}
