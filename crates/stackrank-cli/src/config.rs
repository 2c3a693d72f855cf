//! Project-local configuration for the `sr` binary.
//!
//! Settings live in `.stackrank/config.toml` next to the store. Both keys
//! are optional:
//!
//! ```toml
//! db_path = ".stackrank/stackrank.db"
//! default_strategy = "smart_balance"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use stackrank_core::model::Strategy;
use std::path::{Path, PathBuf};

/// Config file location, relative to the project root.
pub const CONFIG_RELATIVE_PATH: &str = ".stackrank/config.toml";

/// Default store location, relative to the project root.
pub const DEFAULT_DB_RELATIVE_PATH: &str = ".stackrank/stackrank.db";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    #[serde(default)]
    pub default_strategy: Strategy,
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_RELATIVE_PATH)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            default_strategy: Strategy::default(),
        }
    }
}

/// Load settings from the project root, falling back to defaults when no
/// config file exists.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed; a
/// misconfigured strategy name is a parse error, not a silent fallback.
pub fn load(project_root: &Path) -> Result<Settings> {
    let path = project_root.join(CONFIG_RELATIVE_PATH);
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_config_is_absent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let settings = load(dir.path()).expect("load defaults");
        assert_eq!(settings.db_path, PathBuf::from(DEFAULT_DB_RELATIVE_PATH));
        assert_eq!(settings.default_strategy, Strategy::SmartBalance);
    }

    #[test]
    fn parses_configured_values() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_dir = dir.path().join(".stackrank");
        std::fs::create_dir_all(&config_dir).expect("mkdir");
        std::fs::write(
            config_dir.join("config.toml"),
            "db_path = \"elsewhere/history.db\"\ndefault_strategy = \"high_impact\"\n",
        )
        .expect("write config");

        let settings = load(dir.path()).expect("load config");
        assert_eq!(settings.db_path, PathBuf::from("elsewhere/history.db"));
        assert_eq!(settings.default_strategy, Strategy::HighImpact);
    }

    #[test]
    fn rejects_unknown_strategy_names() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_dir = dir.path().join(".stackrank");
        std::fs::create_dir_all(&config_dir).expect("mkdir");
        std::fs::write(config_dir.join("config.toml"), "default_strategy = \"yolo\"\n")
            .expect("write config");

        assert!(load(dir.path()).is_err());
    }
}
