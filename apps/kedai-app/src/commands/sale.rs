//! # Sale Commands
//!
//! Recording sales and browsing sale history.
//!
//! ## Sale Flow
//! ```text
//! Sale form
//!   │  product (only products with stock) + quantity + optional customer
//!   ▼
//! create_sale
//!   ├── Ledger::add_sale
//!   │     ├── quantity > 0?                    no ──► VALIDATION_ERROR
//!   │     ├── product exists?                  no ──► NOT_FOUND
//!   │     ├── stock >= quantity?               no ──► INSUFFICIENT_STOCK
//!   │     ├── snapshot name + selling price into the Sale
//!   │     └── stock -= quantity, persist sales + products together
//!   ▼
//! Sale
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;
use kedai_core::report::sales_newest_first;
use kedai_core::{NewSale, Sale};

/// Records a sale and takes the quantity out of stock.
pub async fn create_sale(state: &AppState, draft: NewSale) -> Result<Sale, ApiError> {
    debug!(product_id = %draft.product_id, quantity = draft.quantity, "create_sale command");

    Ok(state.ledger().add_sale(draft).await?)
}

/// Sale history, newest first.
pub async fn list_sales(state: &AppState) -> Result<Vec<Sale>, ApiError> {
    debug!("list_sales command");

    Ok(state
        .ledger()
        .with_books(|b| sales_newest_first(b.sales()))
        .await)
}
