//! JSON REST API for Tally.
//!
//! Exposes an axum [`Router`] backed by a [`Ledger`] over any
//! [`tally_core::store::LedgerStore`], plus the read-through category
//! catalog. TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", tally_api::api_router(state))
//! ```

pub mod catalog;
pub mod categories;
pub mod credits;
pub mod error;
pub mod expenses;
pub mod summaries;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, patch},
};
use serde::Deserialize;
use tally_core::{Ledger, entry::DateRange, store::LedgerStore};

pub use catalog::Catalog;
pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<S> {
  pub ledger:  Arc<Ledger<S>>,
  pub catalog: Arc<Catalog>,
}

impl<S> AppState<S> {
  pub fn new(ledger: Ledger<S>, catalog: Catalog) -> Self {
    Self { ledger: Arc::new(ledger), catalog: Arc::new(catalog) }
  }
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self { ledger: self.ledger.clone(), catalog: self.catalog.clone() }
  }
}

// ─── Shared query params ──────────────────────────────────────────────────────

/// `?start_date=...&end_date=...[&category=...]` for the summary endpoints.
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
  pub start_date: String,
  pub end_date:   String,
  pub category:   Option<String>,
}

impl SummaryParams {
  fn into_parts(self) -> (DateRange, Option<String>) {
    (DateRange::new(self.start_date, self.end_date), self.category)
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: LedgerStore + 'static,
{
  Router::new()
    // Expenses
    .route("/expenses", get(expenses::list::<S>).post(expenses::create::<S>))
    .route("/expenses/summary", get(expenses::summarize::<S>))
    .route(
      "/expenses/{id}",
      patch(expenses::edit::<S>).delete(expenses::delete_one::<S>),
    )
    // Credits
    .route("/credits", get(credits::list::<S>).post(credits::create::<S>))
    .route("/credits/summary", get(credits::summarize::<S>))
    .route(
      "/credits/{id}",
      patch(credits::edit::<S>).delete(credits::delete_one::<S>),
    )
    // Salary summaries
    .route(
      "/salary-summaries",
      get(summaries::list::<S>).post(summaries::save::<S>),
    )
    .route("/salary-snapshots", get(summaries::snapshots::<S>))
    // Catalog
    .route("/categories", get(categories::list::<S>))
    .with_state(state)
}

#[cfg(test)]
mod tests;
