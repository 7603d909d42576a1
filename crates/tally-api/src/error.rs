//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Only faults end up here. User-input problems such as an empty edit are
//! ordinary `{"status": "error"}` replies and are served with 200.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("catalog error: {0}")]
  Catalog(#[from] CatalogError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    tracing::error!(error = %self, "request failed");
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
