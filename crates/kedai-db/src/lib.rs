//! # kedai-db: Storage Layer for Kedai
//!
//! Durable storage for the business ledger. SQLite via sqlx holds one JSON
//! document per collection; [`Ledger`] keeps the in-memory [`Books`] and
//! the stored documents in step.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kedai Data Flow                                  │
//! │                                                                         │
//! │  kedai-app command (create_sale)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     kedai-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Ledger     │    │   Documents   │    │  Migrations  │  │   │
//! │  │   │  (ledger.rs)  │───►│ (document.rs) │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Mutex<Books>  │    │ kv_store rows │    │ 001_kv_store │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                                │   │
//! │  │                        ┌───────▼───────┐                       │   │
//! │  │                        │   Database    │                       │   │
//! │  │                        │   (pool.rs)   │                       │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (platform data dir or KEDAI_DB_PATH)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Key-value document repository
//! - [`ledger`] - The persisted ledger
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kedai_db::{Database, DbConfig, Ledger};
//!
//! let db = Database::new(DbConfig::new("path/to/kedai.db")).await?;
//! let ledger = Ledger::open(db).await?;
//!
//! let product = ledger.add_product(draft).await?;
//! let summary = ledger.financial_summary().await;
//! ```
//!
//! [`Books`]: kedai_core::Books

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use ledger::Ledger;
pub use pool::{Database, DbConfig};
pub use repository::document::DocumentRepository;
