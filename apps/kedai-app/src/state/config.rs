//! # Application Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KEDAI_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock is needed.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use kedai_db::DbConfig;
use serde::{Deserialize, Serialize};

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,kedai=debug,sqlx=warn";

/// Database file name inside the platform data directory.
const DB_FILE_NAME: &str = "kedai.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// SQLite database file.
    ///
    /// Default: `kedai.db` in the platform data directory
    /// - **macOS**: `~/Library/Application Support/com.kedai.kedai/`
    /// - **Windows**: `%APPDATA%\kedai\kedai\data\`
    /// - **Linux**: `~/.local/share/kedai/`
    pub database_path: PathBuf,

    /// Pool size. Default: 5
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection. Default: 30
    pub connect_timeout_secs: u64,

    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: default_database_path(),
            max_connections: 5,
            connect_timeout_secs: 30,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Creates the configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KEDAI_DB_PATH`: database file path
    /// - `KEDAI_DB_MAX_CONNECTIONS`: pool size
    /// - `KEDAI_DB_TIMEOUT_SECS`: connection timeout
    /// - `KEDAI_LOG`: default log filter
    ///
    /// Values that fail to parse are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("KEDAI_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(max) = lookup("KEDAI_DB_MAX_CONNECTIONS").and_then(|v| v.trim().parse().ok()) {
            config.max_connections = max;
        }

        if let Some(secs) = lookup("KEDAI_DB_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            config.connect_timeout_secs = secs;
        }

        if let Some(filter) = lookup("KEDAI_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// Configuration for an in-memory database (tests, demos).
    pub fn in_memory() -> Self {
        AppConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            ..AppConfig::default()
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == ":memory:"
    }

    /// Pool settings for kedai-db.
    pub fn db_config(&self) -> DbConfig {
        if self.is_in_memory() {
            return DbConfig::in_memory();
        }

        DbConfig::new(self.database_path.clone())
            .max_connections(self.max_connections.max(1))
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}

/// `kedai.db` in the platform data directory, or in the working directory
/// when the platform has none.
fn default_database_path() -> PathBuf {
    match ProjectDirs::from("com", "kedai", "kedai") {
        Some(dirs) => dirs.data_dir().join(DB_FILE_NAME),
        None => PathBuf::from(DB_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.database_path.ends_with(DB_FILE_NAME));
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("KEDAI_DB_PATH", "/tmp/shop.db"),
            ("KEDAI_DB_MAX_CONNECTIONS", "8"),
            ("KEDAI_DB_TIMEOUT_SECS", "nope"),
            ("KEDAI_LOG", "warn"),
        ]));

        assert_eq!(config.database_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.connect_timeout_secs, 30);
        assert_eq!(config.log_filter, "warn");

        let db = config.db_config();
        assert_eq!(db.max_connections, 8);
        assert_eq!(db.database_path, PathBuf::from("/tmp/shop.db"));
    }

    #[test]
    fn test_in_memory_config() {
        let config = AppConfig::in_memory();
        assert!(config.is_in_memory());
        assert_eq!(config.db_config().max_connections, 1);
    }
}
