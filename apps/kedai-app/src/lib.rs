//! # Kedai App Library
//!
//! Application facade for the Kedai business ledger. A UI host (webview
//! bridge, HTTP handler, test harness) builds one [`AppState`] at startup and
//! calls the functions in [`commands`] with it.
//!
//! ## Module Organization
//! ```text
//! kedai_app/
//! ├── lib.rs          ◄─── You are here (logging setup, exports)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState + bootstrap
//! │   └── config.rs   ◄─── AppConfig (KEDAI_* env vars, data dir)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product CRUD and stock
//! │   ├── sale.rs     ◄─── Recording sales
//! │   ├── expense.rs  ◄─── Expenses
//! │   ├── report.rs   ◄─── Dashboard and period reports
//! │   └── calculator.rs ◄─ Pricing calculators
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. AppConfig::from_env() ────────────────────────────────────────────► │
//! │     • KEDAI_DB_PATH or the platform data directory                      │
//! │                                                                         │
//! │  2. init_tracing(&config.log_filter) ─────────────────────────────────► │
//! │     • RUST_LOG wins when set                                            │
//! │                                                                         │
//! │  3. AppState::bootstrap(config) ──────────────────────────────────────► │
//! │     • SQLite with WAL mode, pending migrations                          │
//! │     • products / sales / expenses loaded into the Ledger                │
//! │                                                                         │
//! │  4. Hand &AppState to every command call                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use kedai_app::{commands, init_tracing, AppConfig, AppState};
//!
//! # async fn run() -> Result<(), kedai_app::ApiError> {
//! let config = AppConfig::from_env();
//! init_tracing(&config.log_filter);
//!
//! let state = AppState::bootstrap(config).await?;
//! let dashboard = commands::get_dashboard(&state).await?;
//! println!("{} products", dashboard.summary.total_products);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use state::{AppConfig, AppState, DEFAULT_LOG_FILTER};

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kedai=trace` - Show trace for kedai crates only
/// - Otherwise `default_filter` (normally [`DEFAULT_LOG_FILTER`])
///
/// Calling it twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        init_tracing(DEFAULT_LOG_FILTER);
        init_tracing("warn");
    }
}
