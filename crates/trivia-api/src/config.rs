//! Server configuration, deserialised from `config.toml` and `TRIVIA_*`
//! environment variables.

use std::path::PathBuf;

use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// SQLite database file. A leading `~/` is expanded by the binary.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Category labels that must exist; missing ones are added at start-up.
  #[serde(default)]
  pub categories: Vec<String>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 5000 }

fn default_store_path() -> PathBuf { PathBuf::from("trivia.db") }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       default_host(),
      port:       default_port(),
      store_path: default_store_path(),
      categories: Vec::new(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_source_uses_defaults() {
    let cfg: ServerConfig = config::Config::builder()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg.address(), "127.0.0.1:5000");
    assert_eq!(cfg.store_path, PathBuf::from("trivia.db"));
    assert!(cfg.categories.is_empty());
  }

  #[test]
  fn toml_overrides_defaults() {
    let toml = r#"
      port = 8080
      store_path = "/tmp/quiz.db"
      categories = ["Science", "Art"]
    "#;
    let cfg: ServerConfig = config::Config::builder()
      .add_source(config::File::from_str(toml, config::FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/quiz.db"));
    assert_eq!(cfg.categories, ["Science", "Art"]);
  }
}
