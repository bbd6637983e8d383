//! # Books
//!
//! The in-memory state of the business: products, sales and expenses.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  kedai-db::Ledger  (lock + persistence)                                │
//! │       │                                                                 │
//! │       │  clone ──► mutate ──► persist ──► swap in                      │
//! │       ▼                                                                 │
//! │  Books  (THIS MODULE: pure, no I/O, no clock, no id generator)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  report / FinancialSummary  (read-only views)                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids and timestamps are passed in by the caller so every mutation here is
//! deterministic and testable without a runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{
    Expense, FinancialSummary, NewExpense, NewProduct, NewSale, Product, ProductPatch, Sale,
};
use crate::validation::validate_quantity;

/// Products, sales and expenses in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Books {
    products: Vec<Product>,
    sales: Vec<Sale>,
    expenses: Vec<Expense>,
}

impl Books {
    /// Creates empty books.
    pub fn new() -> Self {
        Books::default()
    }

    /// Rebuilds books from previously persisted collections.
    pub fn from_parts(products: Vec<Product>, sales: Vec<Sale>, expenses: Vec<Expense>) -> Self {
        Books {
            products,
            sales,
            expenses,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Looks a product up by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn product_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Appends a new product. Values are accepted as given.
    pub fn add_product(
        &mut self,
        id: impl Into<String>,
        draft: NewProduct,
        now: DateTime<Utc>,
    ) -> &Product {
        let index = self.products.len();
        self.products.push(Product::new(id, draft, now));
        &self.products[index]
    }

    /// Merges `patch` into the product with `id`.
    ///
    /// Returns `None` (and changes nothing) when no such product exists.
    pub fn update_product(
        &mut self,
        id: &str,
        patch: ProductPatch,
        now: DateTime<Utc>,
    ) -> Option<&Product> {
        let product = self.product_mut(id)?;
        product.apply(patch, now);
        Some(product)
    }

    /// Sets the stock level of a product directly.
    pub fn set_stock(&mut self, id: &str, stock: i64, now: DateTime<Utc>) -> Option<&Product> {
        self.update_product(id, ProductPatch::stock(stock), now)
    }

    /// Removes a product. Sales that reference it keep their snapshot.
    ///
    /// Returns whether a product was removed.
    pub fn delete_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// Records a sale and decrements the product's stock.
    ///
    /// ## Flow
    /// ```text
    /// quantity > 0? ──no──► Validation error
    ///      │
    /// product exists? ──no──► ProductNotFound
    ///      │
    /// stock >= quantity? ──no──► InsufficientStock
    ///      │
    /// price x quantity fits? ──no──► AmountOverflow
    ///      │
    /// snapshot name + selling price, append sale, stock -= quantity
    /// ```
    ///
    /// On any error the books are left exactly as they were.
    pub fn record_sale(
        &mut self,
        id: impl Into<String>,
        draft: NewSale,
        now: DateTime<Utc>,
    ) -> CoreResult<&Sale> {
        validate_quantity(draft.quantity)?;

        let product = self
            .product(&draft.product_id)
            .ok_or_else(|| CoreError::ProductNotFound(draft.product_id.clone()))?;

        if !product.can_sell(draft.quantity) {
            return Err(CoreError::InsufficientStock {
                product: product.name.clone(),
                available: product.stock,
                requested: draft.quantity,
            });
        }

        let total_amount = product
            .selling_price
            .checked_multiply_quantity(draft.quantity)
            .ok_or_else(|| CoreError::AmountOverflow {
                product: product.name.clone(),
                quantity: draft.quantity,
            })?;

        let sale = Sale {
            id: id.into(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity: draft.quantity,
            unit_price: product.selling_price,
            total_amount,
            date: draft.date.unwrap_or(now),
            customer_name: draft.customer_name,
        };
        let remaining = product.stock - draft.quantity;

        self.set_stock(&sale.product_id, remaining, now);

        let index = self.sales.len();
        self.sales.push(sale);
        Ok(&self.sales[index])
    }

    // =========================================================================
    // Expenses
    // =========================================================================

    /// Appends an expense dated `draft.date`, or `now` when absent.
    pub fn add_expense(
        &mut self,
        id: impl Into<String>,
        draft: NewExpense,
        now: DateTime<Utc>,
    ) -> &Expense {
        let index = self.expenses.len();
        self.expenses.push(Expense {
            id: id.into(),
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            date: draft.date.unwrap_or(now),
        });
        &self.expenses[index]
    }

    /// Removes an expense. Returns whether one was removed.
    pub fn delete_expense(&mut self, id: &str) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    // =========================================================================
    // Summary
    // =========================================================================

    /// Headline figures over everything in the books.
    pub fn financial_summary(&self) -> FinancialSummary {
        FinancialSummary::compute(&self.products, &self.sales, &self.expenses)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
