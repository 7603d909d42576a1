//! Handler for `GET /categories`.

use axum::{Json, extract::State};
use serde_json::Value;
use tally_core::store::LedgerStore;

use crate::{AppState, error::ApiError};

/// `GET /categories` — the catalog file's array, re-read on each request.
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<Value>>, ApiError>
where
  S: LedgerStore,
{
  Ok(Json(state.catalog.load().await?))
}
