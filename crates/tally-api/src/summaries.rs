//! Handlers for salary summary notes and snapshots.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/salary-summaries` | Most recent first |
//! | `POST` | `/salary-summaries` | Body: `{"summary_text":"..."}`; returns 201 |
//! | `GET`  | `/salary-snapshots` | Read-only structured reports |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use tally_core::{
  store::LedgerStore,
  summary::{SalarySnapshot, SalarySummaryNote},
};

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct SaveBody {
  pub summary_text: String,
}

/// `POST /salary-summaries`
pub async fn save<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<SaveBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LedgerStore,
{
  let reply = state
    .ledger
    .save_salary_summary(body.summary_text)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(reply)))
}

/// `GET /salary-summaries`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<SalarySummaryNote>>, ApiError>
where
  S: LedgerStore,
{
  let notes = state.ledger.list_salary_summaries().await.map_err(ApiError::store)?;
  Ok(Json(notes))
}

/// `GET /salary-snapshots`
pub async fn snapshots<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<SalarySnapshot>>, ApiError>
where
  S: LedgerStore,
{
  let rows = state.ledger.list_salary_snapshots().await.map_err(ApiError::store)?;
  Ok(Json(rows))
}
