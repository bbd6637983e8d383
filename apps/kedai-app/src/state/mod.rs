//! # State Module
//!
//! Application state shared by every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  AppConfig::from_env()                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppState::bootstrap(config)                                           │
//! │       ├── Database::new(config.db_config())   (pool + migrations)      │
//! │       └── Ledger::open(db)                    (load business_* docs)  │
//! │                                                                         │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │  Ledger                  │  │  AppConfig               │            │
//! │  │  Mutex<Books> + storage  │  │  read-only after startup │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Ledger: one async lock around all mutations                         │
//! │  • AppConfig: immutable                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands receive `&AppState`; hosts that need sharing across tasks wrap
//! it in an `Arc`.

mod config;

pub use config::{AppConfig, DEFAULT_LOG_FILTER};

use kedai_db::{Database, DbError, Ledger};
use tracing::info;

use crate::error::ApiError;

/// Everything a command needs.
#[derive(Debug)]
pub struct AppState {
    ledger: Ledger,
    config: AppConfig,
}

impl AppState {
    /// Wraps an already opened ledger.
    pub fn new(ledger: Ledger, config: AppConfig) -> Self {
        AppState { ledger, config }
    }

    /// Opens the database described by `config` and loads the ledger.
    ///
    /// ## Startup Sequence
    /// 1. Create the database directory if needed
    /// 2. Connect and run migrations
    /// 3. Load products, sales and expenses
    pub async fn bootstrap(config: AppConfig) -> Result<Self, ApiError> {
        if !config.is_in_memory() {
            if let Some(dir) = config.database_path.parent() {
                std::fs::create_dir_all(dir)
                    .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;
            }
        }

        info!(path = %config.database_path.display(), "Opening ledger");
        let db = Database::new(config.db_config()).await?;
        let ledger = Ledger::open(db).await?;

        Ok(AppState::new(ledger, config))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// A fresh state over an in-memory database.
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    AppState::bootstrap(AppConfig::in_memory())
        .await
        .expect("in-memory state")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_in_memory() {
        let state = test_state().await;
        assert!(state.config().is_in_memory());
        assert_eq!(state.ledger().financial_summary().await.total_products, 0);
    }

    #[tokio::test]
    async fn test_bootstrap_creates_database_directory() {
        let dir = std::env::temp_dir().join(format!("kedai-app-{}", unique_suffix()));
        let config = AppConfig {
            database_path: dir.join("nested").join("kedai.db"),
            ..AppConfig::in_memory()
        };
        assert!(!config.is_in_memory());

        let state = AppState::bootstrap(config).await.unwrap();
        assert!(dir.join("nested").is_dir());

        drop(state);
        let _ = std::fs::remove_dir_all(&dir);
    }

    fn unique_suffix() -> String {
        format!(
            "{}-{}",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        )
    }
}
