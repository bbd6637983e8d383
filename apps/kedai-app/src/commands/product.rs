//! # Product Commands
//!
//! Product listing and management.
//!
//! ## Product Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  [+ Add product]                                                │
//! │                                                                 │
//! │  ┌───────────────────────┐  ┌───────────────────────┐          │
//! │  │ Beras 5kg      [Low]  │  │ Teh Botol  [In stock] │          │
//! │  │ Cost 60.00            │  │ Cost 3.00             │          │
//! │  │ Price 72.00  +12.00   │  │ Price 5.00   +2.00    │ ◄── unit │
//! │  │ Stock 4 / min 5       │  │ Stock 40 / min 10     │   profit │
//! │  │ [Edit] [Delete]       │  │ [Edit] [Delete]       │          │
//! │  └───────────────────────┘  └───────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;
use kedai_core::report::available_for_sale;
use kedai_core::validation::{validate_new_product, validate_product_patch, validate_stock_level};
use kedai_core::{Money, NewProduct, Product, ProductPatch, StockStatus};

/// Product with the figures the product card shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(flatten)]
    pub product: Product,
    pub stock_status: StockStatus,
    /// Selling price minus purchase price.
    pub unit_profit: Money,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        ProductDto {
            stock_status: product.stock_status(),
            unit_profit: product.unit_profit(),
            product,
        }
    }
}

/// All products, in the order they were added.
pub async fn list_products(state: &AppState) -> Result<Vec<ProductDto>, ApiError> {
    debug!("list_products command");

    let products = state
        .ledger()
        .with_books(|b| b.products().to_vec())
        .await;

    Ok(products.into_iter().map(ProductDto::from).collect())
}

/// One product by id.
pub async fn get_product(state: &AppState, id: &str) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product command");

    state
        .ledger()
        .with_books(|b| b.product(id).cloned())
        .await
        .map(ProductDto::from)
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Products with stock left, for the sale form's product picker.
pub async fn list_available_products(state: &AppState) -> Result<Vec<ProductDto>, ApiError> {
    debug!("list_available_products command");

    let products = state
        .ledger()
        .with_books(|b| {
            available_for_sale(b.products())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
        .await;

    Ok(products.into_iter().map(ProductDto::from).collect())
}

/// Adds a product from the product form.
pub async fn add_product(state: &AppState, draft: NewProduct) -> Result<ProductDto, ApiError> {
    debug!(name = %draft.name, "add_product command");

    validate_new_product(&draft)?;
    let product = state.ledger().add_product(draft).await?;

    Ok(product.into())
}

/// Applies an edit. `Ok(None)` means the product no longer exists.
pub async fn update_product(
    state: &AppState,
    id: &str,
    patch: ProductPatch,
) -> Result<Option<ProductDto>, ApiError> {
    debug!(id = %id, "update_product command");

    validate_product_patch(&patch)?;
    let product = state.ledger().update_product(id, patch).await?;

    Ok(product.map(ProductDto::from))
}

/// Sets the stock level directly (restock, stock take).
pub async fn update_stock(
    state: &AppState,
    id: &str,
    stock: i64,
) -> Result<Option<ProductDto>, ApiError> {
    debug!(id = %id, stock = stock, "update_stock command");

    validate_stock_level("stock", stock)?;
    let product = state.ledger().update_stock(id, stock).await?;

    Ok(product.map(ProductDto::from))
}

/// Deletes a product. Returns whether it existed.
pub async fn delete_product(state: &AppState, id: &str) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_product command");

    Ok(state.ledger().delete_product(id).await?)
}

// =============================================================================
// Unit Tests
// =============================================================================
