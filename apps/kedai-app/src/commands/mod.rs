//! # Commands Module
//!
//! Every operation the UI can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── product.rs     ◄─── Product CRUD, stock, availability
//! ├── sale.rs        ◄─── Record sale, sale history
//! ├── expense.rs     ◄─── Expense CRUD, total
//! ├── report.rs      ◄─── Dashboard, summary, period reports
//! └── calculator.rs  ◄─── Profit, suggested price, break-even
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  UI host (webview bridge, HTTP handler, test)                          │
//! │         │                                                               │
//! │         │  create_sale(&state, NewSale { productId, quantity })        │
//! │         ▼                                                               │
//! │  Command                                                                │
//! │  ├── validate form input (kedai_core::validation)                      │
//! │  ├── call the Ledger                                                   │
//! │  └── map errors ──► ApiError { code, message }                         │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  UI receives: Sale | ApiError                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command takes `&AppState` plus its arguments and returns
//! `Result<T, ApiError>`.

pub mod calculator;
pub mod expense;
pub mod product;
pub mod report;
pub mod sale;

pub use calculator::*;
pub use expense::*;
pub use product::*;
pub use report::*;
pub use sale::*;
