//! Runtime server configuration.
//!
//! Layered from built-in defaults, an optional TOML file, and `FLOWFIELD_*`
//! environment variables (highest precedence).

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Settings for the leaderboard server.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite file; a leading `~/` is expanded to `$HOME`.
  pub store_path: PathBuf,
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Read configuration from `path` (if it exists) and the environment.
pub fn load(path: &Path) -> anyhow::Result<ServerConfig> {
  let settings = config::Config::builder()
    .set_default("host", "0.0.0.0")?
    .set_default("port", 3210)?
    .set_default("store_path", "flowfield.db")?
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("FLOWFIELD"))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
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
  fn missing_file_falls_back_to_defaults() {
    let cfg = load(Path::new("/nonexistent/flowfield-config.toml")).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 3210);
    assert_eq!(cfg.store_path, PathBuf::from("flowfield.db"));
  }

  #[test]
  fn file_values_override_defaults() {
    let path = std::env::temp_dir().join(format!(
      "flowfield-config-{}.toml",
      std::process::id()
    ));
    std::fs::write(&path, "port = 8080\nstore_path = \"/var/lib/flowfield/scores.db\"\n")
      .unwrap();

    let cfg = load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store_path, PathBuf::from("/var/lib/flowfield/scores.db"));
    assert_eq!(cfg.address(), "0.0.0.0:8080");
  }

  #[test]
  fn tilde_is_expanded_only_at_the_start() {
    let plain = Path::new("data/~/scores.db");
    assert_eq!(expand_tilde(plain), plain.to_path_buf());

    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/scores.db")),
        PathBuf::from(home).join("scores.db")
      );
    }
  }
}
