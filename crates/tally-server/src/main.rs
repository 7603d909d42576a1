//! tally-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite ledger, and serves the JSON API under `/api`.
//!
//! Every setting can also come from the environment, e.g.
//! `TALLY_PORT=8080 TALLY_CATALOG_PATH=~/categories.json tally-server`.

mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use axum::Router;
use clap::Parser;
use tally_api::{AppState, Catalog};
use tally_core::Ledger;
use tally_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Tally ledger server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  // Open SQLite store; creates the schema if missing.
  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.store_path))?;
  tracing::info!(path = ?server_cfg.store_path, "ledger store open");

  let catalog = Catalog::new(&server_cfg.catalog_path);
  tracing::info!(path = ?catalog.path(), "serving category catalog");

  let state = AppState::new(Ledger::new(store), catalog);
  let app = Router::new()
    .nest("/api", tally_api::api_router(state))
    .layer(TraceLayer::new_for_http());

  let address = server_cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
