//! Router-level tests against an in-memory SQLite store.

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tally_core::Ledger;
use tally_store_sqlite::SqliteStore;
use tempfile::TempDir;
use tower::ServiceExt as _;

use crate::{AppState, Catalog, api_router};

struct Harness {
  router: Router,
  dir:    TempDir,
}

async fn harness() -> Harness {
  let dir = tempfile::tempdir().unwrap();
  let catalog_path = dir.path().join("categories.json");
  std::fs::write(&catalog_path, r#"["food", "transit"]"#).unwrap();

  let store = SqliteStore::open_in_memory().await.unwrap();
  let state = AppState::new(Ledger::new(store), Catalog::new(catalog_path));
  Harness { router: api_router(state), dir }
}

impl Harness {
  async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    let resp = self
      .router
      .clone()
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap();

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
  }
}

// ── Expenses ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_expense() {
  let h = harness().await;

  let (status, body) = h
    .call(
      "POST",
      "/expenses",
      Some(json!({ "date": "2024-01-05", "amount": 9.5, "category": "food" })),
    )
    .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body, json!({ "status": "ok", "id": 1 }));

  let (status, body) = h
    .call("GET", "/expenses?start_date=2024-01-01&end_date=2024-01-31", None)
    .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body,
    json!([{
      "id": 1,
      "date": "2024-01-05",
      "amount": 9.5,
      "category": "food",
      "subcategory": "",
      "note": ""
    }])
  );
}

#[tokio::test]
async fn empty_patch_is_a_structured_error() {
  let h = harness().await;
  h.call(
    "POST",
    "/expenses",
    Some(json!({ "date": "2024-01-05", "amount": 1, "category": "food" })),
  )
  .await;

  let (status, body) = h.call("PATCH", "/expenses/1", Some(json!({}))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "status": "error", "message": "No fields to update." }));
}

#[tokio::test]
async fn patch_updates_only_supplied_keys() {
  let h = harness().await;
  h.call(
    "POST",
    "/expenses",
    Some(json!({
      "date": "2024-01-05", "amount": 1, "category": "food",
      "subcategory": "snacks", "note": "chips"
    })),
  )
  .await;

  let (_, body) = h.call("PATCH", "/expenses/1", Some(json!({ "note": "" }))).await;
  assert_eq!(body, json!({ "status": "ok" }));

  let (_, rows) = h
    .call("GET", "/expenses?start_date=2024-01-05&end_date=2024-01-05", None)
    .await;
  assert_eq!(rows[0]["note"], "");
  assert_eq!(rows[0]["subcategory"], "snacks");
  assert_eq!(rows[0]["amount"], 1.0);
}

#[tokio::test]
async fn delete_reports_count() {
  let h = harness().await;
  h.call(
    "POST",
    "/expenses",
    Some(json!({ "date": "2024-01-05", "amount": 1, "category": "food" })),
  )
  .await;

  let (_, body) = h.call("DELETE", "/expenses/1", None).await;
  assert_eq!(body, json!({ "status": "ok", "deleted": 1 }));
  let (_, body) = h.call("DELETE", "/expenses/1", None).await;
  assert_eq!(body, json!({ "status": "ok", "deleted": 0 }));
}

#[tokio::test]
async fn expense_summary_with_and_without_filter() {
  let h = harness().await;
  for (date, amount, category) in [
    ("2024-01-01", 10, "food"),
    ("2024-01-02", 5, "food"),
    ("2024-01-03", 7, "transit"),
  ] {
    h.call(
      "POST",
      "/expenses",
      Some(json!({ "date": date, "amount": amount, "category": category })),
    )
    .await;
  }

  let (_, body) = h
    .call("GET", "/expenses/summary?start_date=2024-01-01&end_date=2024-01-03", None)
    .await;
  assert_eq!(
    body,
    json!([
      { "category": "food", "total_amount": 15.0 },
      { "category": "transit", "total_amount": 7.0 }
    ])
  );

  let (_, body) = h
    .call(
      "GET",
      "/expenses/summary?start_date=2024-01-01&end_date=2024-01-03&category=transit",
      None,
    )
    .await;
  assert_eq!(body, json!([{ "category": "transit", "total_amount": 7.0 }]));
}

// ── Credits ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn credit_endpoints_mirror_expenses() {
  let h = harness().await;

  let (status, body) = h
    .call(
      "POST",
      "/credits",
      Some(json!({ "date": "2024-01-25", "amount": 3000, "category": "salary" })),
    )
    .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body, json!({ "status": "ok", "id": 1 }));

  let (_, body) = h.call("PATCH", "/credits/1", Some(json!({}))).await;
  assert_eq!(body["status"], "error");

  let (_, body) = h.call("PATCH", "/credits/1", Some(json!({ "amount": 3200 }))).await;
  assert_eq!(body, json!({ "status": "ok" }));

  let (_, rows) = h
    .call("GET", "/credits?start_date=2024-01-01&end_date=2024-01-31", None)
    .await;
  assert_eq!(
    rows,
    json!([{
      "id": 1, "date": "2024-01-25", "amount": 3200.0, "category": "salary", "note": ""
    }])
  );

  let (_, body) = h
    .call("GET", "/credits/summary?start_date=2024-01-01&end_date=2024-01-31", None)
    .await;
  assert_eq!(body, json!([{ "category": "salary", "total_amount": 3200.0 }]));

  let (_, body) = h.call("DELETE", "/credits/1", None).await;
  assert_eq!(body, json!({ "status": "ok", "deleted": 1 }));
}

// ── Salary summaries ─────────────────────────────────────────────────────────

#[tokio::test]
async fn save_and_list_salary_summaries() {
  let h = harness().await;

  let (status, body) = h
    .call(
      "POST",
      "/salary-summaries",
      Some(json!({ "summary_text": "Saved 40% this month." })),
    )
    .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body, json!({ "status": "ok", "message": "Custom summary saved." }));

  let (_, body) = h.call("GET", "/salary-summaries", None).await;
  assert_eq!(body.as_array().unwrap().len(), 1);
  assert_eq!(body[0]["summary_text"], "Saved 40% this month.");
  assert_eq!(body[0]["id"], 1);

  let (status, body) = h.call("GET", "/salary-snapshots", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!([]));
}

// ── Catalog ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn categories_reflect_file_edits() {
  let h = harness().await;

  let (_, body) = h.call("GET", "/categories", None).await;
  assert_eq!(body, json!(["food", "transit"]));

  std::fs::write(h.dir.path().join("categories.json"), r#"["rent"]"#).unwrap();
  let (_, body) = h.call("GET", "/categories", None).await;
  assert_eq!(body, json!(["rent"]));
}

#[tokio::test]
async fn broken_catalog_is_a_server_error() {
  let h = harness().await;
  std::fs::remove_file(h.dir.path().join("categories.json")).unwrap();

  let (status, body) = h.call("GET", "/categories", None).await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert!(body["error"].as_str().unwrap().starts_with("catalog error"));
}
