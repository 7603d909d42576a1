//! Async HTTP client wrapping the tally JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tally_core::{
  Reply,
  entry::{
    CategoryTotal, Credit, CreditEdit, DateRange, EntryId, Expense, ExpenseEdit,
    NewCredit, NewExpense,
  },
  summary::{SalarySnapshot, SalarySummaryNote},
};

/// Async HTTP client for the tally JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url: base_url.into() })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
  }

  fn request(&self, method: Method, path: &str) -> RequestBuilder {
    self.client.request(method, self.url(path))
  }

  /// Send `req`, fail on a non-2xx status, and decode the JSON body.
  async fn fetch<T: DeserializeOwned>(&self, what: &str, req: RequestBuilder) -> Result<T> {
    let resp: Response = req.send().await.with_context(|| format!("{what} failed"))?;

    let status = resp.status();
    if !status.is_success() {
      let detail = resp.text().await.unwrap_or_default();
      return Err(anyhow!("{what} → {status}: {detail}"));
    }
    resp.json().await.with_context(|| format!("deserialising {what} response"))
  }

  async fn send_json<B: Serialize, T: DeserializeOwned>(
    &self,
    method: Method,
    path:   &str,
    body:   &B,
  ) -> Result<T> {
    let what = format!("{method} {path}");
    self.fetch(&what, self.request(method, path).json(body)).await
  }

  // ── Expenses ──────────────────────────────────────────────────────────────

  /// `POST /api/expenses`
  pub async fn add_expense(&self, input: &NewExpense) -> Result<Reply> {
    self.send_json(Method::POST, "/expenses", input).await
  }

  /// `GET /api/expenses?start_date&end_date`
  pub async fn list_expenses(&self, range: &DateRange) -> Result<Vec<Expense>> {
    let req = self.request(Method::GET, "/expenses").query(range);
    self.fetch("GET /expenses", req).await
  }

  /// `PATCH /api/expenses/:id`
  pub async fn edit_expense(&self, id: EntryId, edit: &ExpenseEdit) -> Result<Reply> {
    self.send_json(Method::PATCH, &format!("/expenses/{id}"), edit).await
  }

  /// `DELETE /api/expenses/:id`
  pub async fn delete_expense(&self, id: EntryId) -> Result<Reply> {
    let path = format!("/expenses/{id}");
    self.fetch(&format!("DELETE {path}"), self.request(Method::DELETE, &path)).await
  }

  /// `GET /api/expenses/summary`
  pub async fn summarize(
    &self,
    range:    &DateRange,
    category: Option<&str>,
  ) -> Result<Vec<CategoryTotal>> {
    let mut req = self.request(Method::GET, "/expenses/summary").query(range);
    if let Some(c) = category {
      req = req.query(&[("category", c)]);
    }
    self.fetch("GET /expenses/summary", req).await
  }

  // ── Credits ───────────────────────────────────────────────────────────────

  /// `POST /api/credits`
  pub async fn add_credit(&self, input: &NewCredit) -> Result<Reply> {
    self.send_json(Method::POST, "/credits", input).await
  }

  /// `GET /api/credits?start_date&end_date`
  pub async fn list_credits(&self, range: &DateRange) -> Result<Vec<Credit>> {
    let req = self.request(Method::GET, "/credits").query(range);
    self.fetch("GET /credits", req).await
  }

  /// `PATCH /api/credits/:id`
  pub async fn edit_credit(&self, id: EntryId, edit: &CreditEdit) -> Result<Reply> {
    self.send_json(Method::PATCH, &format!("/credits/{id}"), edit).await
  }

  /// `DELETE /api/credits/:id`
  pub async fn delete_credit(&self, id: EntryId) -> Result<Reply> {
    let path = format!("/credits/{id}");
    self.fetch(&format!("DELETE {path}"), self.request(Method::DELETE, &path)).await
  }

  /// `GET /api/credits/summary`
  pub async fn summarize_credits(
    &self,
    range:    &DateRange,
    category: Option<&str>,
  ) -> Result<Vec<CategoryTotal>> {
    let mut req = self.request(Method::GET, "/credits/summary").query(range);
    if let Some(c) = category {
      req = req.query(&[("category", c)]);
    }
    self.fetch("GET /credits/summary", req).await
  }

  // ── Salary summaries ──────────────────────────────────────────────────────

  /// `POST /api/salary-summaries`
  pub async fn save_salary_summary(&self, summary_text: &str) -> Result<Reply> {
    let body = json!({ "summary_text": summary_text });
    self.send_json(Method::POST, "/salary-summaries", &body).await
  }

  /// `GET /api/salary-summaries`
  pub async fn list_salary_summaries(&self) -> Result<Vec<SalarySummaryNote>> {
    let req = self.request(Method::GET, "/salary-summaries");
    self.fetch("GET /salary-summaries", req).await
  }

  /// `GET /api/salary-snapshots`
  pub async fn list_salary_snapshots(&self) -> Result<Vec<SalarySnapshot>> {
    let req = self.request(Method::GET, "/salary-snapshots");
    self.fetch("GET /salary-snapshots", req).await
  }

  // ── Catalog ───────────────────────────────────────────────────────────────

  /// `GET /api/categories`
  pub async fn list_categories(&self) -> Result<Vec<Value>> {
    let req = self.request(Method::GET, "/categories");
    self.fetch("GET /categories", req).await
  }
}
