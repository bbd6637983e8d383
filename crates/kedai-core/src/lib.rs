//! # kedai-core: Pure Business Logic for Kedai
//!
//! Products, sales, expenses and everything derived from them, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Kedai Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI (dashboard, forms, reports)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands (serde DTOs)                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kedai-app                                    │   │
//! │  │    AppState, AppConfig, ApiError, command functions            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kedai-db                                     │   │
//! │  │    Ledger (lock + persistence), kv_store documents             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kedai-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │   │
//! │  │   │  types  │ │  money  │ │ ledger  │ │ report  │ │calculat.│ │   │
//! │  │   │ Product │ │  Money  │ │  Books  │ │ Report  │ │ margin  │ │   │
//! │  │   │  Sale   │ │  cents  │ │         │ │ Period  │ │break-even│ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Expense, FinancialSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ledger`] - [`Books`]: the mutable collections and their rules
//! - [`period`] - Report periods (today, last 7 / 30 days, all)
//! - [`report`] - Dashboard and period reports
//! - [`calculator`] - Profit, suggested price and break-even tools
//! - [`error`] - Domain error types
//! - [`validation`] - Form validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use kedai_core::{Books, Money, NewProduct, NewSale};
//!
//! let now = Utc::now();
//! let mut books = Books::new();
//! books.add_product(
//!     "p-1",
//!     NewProduct {
//!         name: "Widget".to_string(),
//!         purchase_price: Money::from_cents(1000),
//!         selling_price: Money::from_cents(1500),
//!         stock: 5,
//!         min_stock: 2,
//!         ..NewProduct::default()
//!     },
//!     now,
//! );
//!
//! let sale = books.record_sale("s-1", NewSale::new("p-1", 3), now).unwrap();
//! assert_eq!(sale.total_amount.cents(), 4500);
//!
//! let summary = books.financial_summary();
//! assert_eq!(summary.total_revenue.cents(), 4500);
//! assert_eq!(summary.low_stock_count, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod ledger;
pub mod money;
pub mod period;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::Books;
pub use money::Money;
pub use period::Period;
pub use report::{Dashboard, Report};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest product name the product form accepts.
pub const MAX_NAME_LEN: usize = 200;

/// Longest description (product or expense) the forms accept.
pub const MAX_DESCRIPTION_LEN: usize = 1000;
