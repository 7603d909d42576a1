//! The category catalog — a JSON array of suggested category labels.
//!
//! The file is read fresh on every call so edits take effect without a
//! restart. Entries may be plain strings or objects; they are passed through
//! untouched. Nothing validates ledger entries against the catalog.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("cannot read {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid JSON in {path:?}: {source}")]
  Json {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("{0:?} does not contain a JSON array")]
  NotAnArray(PathBuf),
}

/// Read-through handle on the catalog file.
#[derive(Debug, Clone)]
pub struct Catalog {
  path: PathBuf,
}

impl Catalog {
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }

  /// Load and parse the catalog file as it is on disk right now.
  pub async fn load(&self) -> Result<Vec<Value>, CatalogError> {
    let raw = tokio::fs::read_to_string(&self.path)
      .await
      .map_err(|source| CatalogError::Io { path: self.path.clone(), source })?;

    match serde_json::from_str(&raw) {
      Ok(Value::Array(items)) => Ok(items),
      Ok(_) => Err(CatalogError::NotAnArray(self.path.clone())),
      Err(source) => Err(CatalogError::Json { path: self.path.clone(), source }),
    }
  }
}
