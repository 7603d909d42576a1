//! Server configuration: an optional TOML file layered under `TALLY_*`
//! environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// SQLite database file; created on first start.
  pub store_path:   PathBuf,
  /// JSON array of suggested categories, re-read on every request.
  pub catalog_path: PathBuf,
}

impl ServerConfig {
  /// Read `file` (if it exists) and the environment, falling back to
  /// defaults for anything unset.
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    let mut cfg: ServerConfig = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 5233)?
      .set_default("store_path", "expenses.db")?
      .set_default("catalog_path", "categories.json")?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("TALLY"))
      .build()?
      .try_deserialize()?;

    cfg.store_path   = expand_tilde(&cfg.store_path);
    cfg.catalog_path = expand_tilde(&cfg.catalog_path);
    Ok(cfg)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_apply_without_a_file() {
    let cfg = ServerConfig::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(cfg.port, 5233);
    assert_eq!(cfg.catalog_path, PathBuf::from("categories.json"));
  }

  #[test]
  fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    std::fs::write(&file, "port = 9000\nstore_path = \"/var/lib/tally/ledger.db\"\n").unwrap();

    let cfg = ServerConfig::load(&file).unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.store_path, PathBuf::from("/var/lib/tally/ledger.db"));
    assert_eq!(cfg.address(), "127.0.0.1:9000");
  }

  #[test]
  fn paths_without_tilde_are_unchanged() {
    assert_eq!(expand_tilde(Path::new("/tmp/x.db")), PathBuf::from("/tmp/x.db"));
  }
}
