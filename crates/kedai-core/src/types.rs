//! # Domain Types
//!
//! Core domain types used throughout Kedai.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Expense      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │◄──│  product_id     │   │  id (UUID)      │       │
//! │  │  purchase_price │   │  product_name * │   │  amount         │       │
//! │  │  selling_price  │──►│  unit_price *   │   │  category       │       │
//! │  │  stock          │   │  quantity       │   │  date           │       │
//! │  │  min_stock      │   │  total_amount   │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                          * snapshot taken at sale time                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProductCategory │   │ ExpenseCategory │   │   Percentage    │       │
//! │  │  fixed set      │   │  fixed set      │   │  bps (i64)      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! All records serialize with camelCase field names and RFC 3339 dates, the
//! layout of the persisted `business_*` documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{parse_scaled, Money};

// =============================================================================
// Percentage
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 2000 bps = 20%.
/// Signed, because a target margin may be typed as a negative number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentage(i64);

impl Percentage {
    /// 100% in basis points.
    pub const WHOLE_BPS: i64 = 10_000;

    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: i64) -> Self {
        Percentage(bps)
    }

    /// Parses a percentage typed into a form field ("20", "12.5").
    ///
    /// Follows the same rules as [`Money::parse`].
    pub fn parse(input: &str) -> Option<Self> {
        parse_scaled(input, 2).map(Percentage)
    }

    /// Returns the value in basis points.
    #[inline]
    pub const fn bps(&self) -> i64 {
        self.0
    }

    /// Returns the value as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percentage(0)
    }

    /// Checks whether this is 100% or more.
    #[inline]
    pub const fn is_whole_or_more(&self) -> bool {
        self.0 >= Self::WHOLE_BPS
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage::zero()
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Product categories offered by the product form.
///
/// Stored as stable snake_case codes; display labels belong to the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Food,
    Beverage,
    Electronics,
    Clothing,
    Health,
    #[default]
    Other,
}

impl ProductCategory {
    /// Every category, in form order.
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Food,
        ProductCategory::Beverage,
        ProductCategory::Electronics,
        ProductCategory::Clothing,
        ProductCategory::Health,
        ProductCategory::Other,
    ];
}

/// Expense categories offered by the expense form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Buying stock for resale.
    InventoryPurchase,
    Rent,
    /// Electricity and water.
    Utilities,
    Transport,
    Marketing,
    /// Employee salaries.
    Payroll,
    Equipment,
    #[default]
    Other,
}

impl ExpenseCategory {
    /// Every category, in form order.
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::InventoryPurchase,
        ExpenseCategory::Rent,
        ExpenseCategory::Utilities,
        ExpenseCategory::Transport,
        ExpenseCategory::Marketing,
        ExpenseCategory::Payroll,
        ExpenseCategory::Equipment,
        ExpenseCategory::Other,
    ];
}

// =============================================================================
// Product
// =============================================================================

/// A product kept in stock and sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    pub category: ProductCategory,

    /// What one unit costs the business.
    pub purchase_price: Money,

    /// What one unit sells for. Snapshotted into each sale.
    pub selling_price: Money,

    /// Units on hand.
    pub stock: i64,

    /// Restock threshold: stock at or below this is "low".
    pub min_stock: i64,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Never earlier than `created_at`.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a product from form data, stamping both timestamps with `now`.
    pub fn new(id: impl Into<String>, draft: NewProduct, now: DateTime<Utc>) -> Self {
        Product {
            id: id.into(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            purchase_price: draft.purchase_price,
            selling_price: draft.selling_price,
            stock: draft.stock,
            min_stock: draft.min_stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges the fields present in `patch` and bumps `updated_at`.
    ///
    /// A clock that moved backwards never pushes `updated_at` before
    /// `created_at`.
    pub fn apply(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.purchase_price {
            self.purchase_price = price;
        }
        if let Some(price) = patch.selling_price {
            self.selling_price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(min_stock) = patch.min_stock {
            self.min_stock = min_stock;
        }
        self.updated_at = now.max(self.created_at);
    }

    /// Profit on one unit (selling price minus purchase price).
    #[inline]
    pub fn unit_profit(&self) -> Money {
        self.selling_price - self.purchase_price
    }

    /// Stock at or below the restock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Enough units on hand to sell `quantity`.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }

    /// Stock level classification shown next to each product.
    pub fn stock_status(&self) -> StockStatus {
        if self.stock <= 0 {
            StockStatus::OutOfStock
        } else if self.is_low_stock() {
            StockStatus::Low
        } else {
            StockStatus::InStock
        }
    }
}

/// Product form data (everything except id and timestamps).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ProductCategory,
    pub purchase_price: Money,
    pub selling_price: Money,
    pub stock: i64,
    pub min_stock: i64,
}

/// Partial product update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<ProductCategory>,
    pub purchase_price: Option<Money>,
    pub selling_price: Option<Money>,
    pub stock: Option<i64>,
    pub min_stock: Option<i64>,
}

impl ProductPatch {
    /// A patch that only sets the stock level.
    pub fn stock(stock: i64) -> Self {
        ProductPatch {
            stock: Some(stock),
            ..ProductPatch::default()
        }
    }
}

/// Stock level classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    /// At or below `min_stock`, but not empty.
    Low,
    OutOfStock,
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale of one product.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    /// Product at time of sale; the product may since have been deleted.
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    pub quantity: i64,
    /// Selling price at time of sale (frozen).
    pub unit_price: Money,
    /// `unit_price × quantity`.
    pub total_amount: Money,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub customer_name: Option<String>,
}

/// Sale form data. Name and price come from the product, not the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub product_id: String,
    pub quantity: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Defaults to the time the sale is recorded.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub date: Option<DateTime<Utc>>,
}

impl NewSale {
    /// A sale of `quantity` units dated now, without a customer.
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        NewSale {
            product_id: product_id.into(),
            quantity,
            customer_name: None,
            date: None,
        }
    }
}

// =============================================================================
// Expense
// =============================================================================

/// A business expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: Money,
    pub category: ExpenseCategory,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

/// Expense form data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub category: ExpenseCategory,
    /// Defaults to the time the expense is recorded.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub date: Option<DateTime<Utc>>,
}

// =============================================================================
// Financial Summary
// =============================================================================

/// Dashboard headline figures over the whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Sum of every sale's total amount.
    pub total_revenue: Money,
    /// Sum of every expense amount.
    pub total_expenses: Money,
    /// Revenue minus expenses.
    pub net_profit: Money,
    /// Number of sales.
    pub total_sales: usize,
    /// Number of products.
    pub total_products: usize,
    /// Products with stock at or below their threshold.
    pub low_stock_count: usize,
}

impl FinancialSummary {
    /// Computes the summary in one pass over each collection.
    pub fn compute(products: &[Product], sales: &[Sale], expenses: &[Expense]) -> Self {
        let total_revenue: Money = sales.iter().map(|s| s.total_amount).sum();
        let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();

        FinancialSummary {
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
            total_sales: sales.len(),
            total_products: products.len(),
            low_stock_count: products.iter().filter(|p| p.is_low_stock()).count(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0).unwrap()
    }

    fn widget() -> Product {
        Product::new(
            "p-1",
            NewProduct {
                name: "Widget".to_string(),
                description: "A widget".to_string(),
                category: ProductCategory::Electronics,
                purchase_price: Money::from_cents(1000),
                selling_price: Money::from_cents(1500),
                stock: 5,
                min_stock: 2,
            },
            at(9),
        )
    }

    #[test]
    fn test_percentage_parse() {
        assert_eq!(Percentage::parse("20"), Some(Percentage::from_bps(2000)));
        assert_eq!(Percentage::parse("12.5"), Some(Percentage::from_bps(1250)));
        assert_eq!(Percentage::parse("-5"), Some(Percentage::from_bps(-500)));
        assert_eq!(Percentage::parse("x"), None);
        assert!((Percentage::from_bps(825).percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_percentage_whole() {
        assert!(!Percentage::from_bps(9999).is_whole_or_more());
        assert!(Percentage::from_bps(10_000).is_whole_or_more());
        assert!(Percentage::from_bps(15_000).is_whole_or_more());
    }

    #[test]
    fn test_categories_default_to_other() {
        assert_eq!(ProductCategory::default(), ProductCategory::Other);
        assert_eq!(ExpenseCategory::default(), ExpenseCategory::Other);
    }

    #[test]
    fn test_new_product_stamps_timestamps() {
        let product = widget();
        assert_eq!(product.created_at, at(9));
        assert_eq!(product.updated_at, at(9));
    }

    #[test]
    fn test_apply_patch_merges_present_fields() {
        let mut product = widget();
        product.apply(
            ProductPatch {
                name: Some("Gadget".to_string()),
                selling_price: Some(Money::from_cents(1800)),
                ..ProductPatch::default()
            },
            at(10),
        );

        assert_eq!(product.name, "Gadget");
        assert_eq!(product.selling_price.cents(), 1800);
        assert_eq!(product.purchase_price.cents(), 1000);
        assert_eq!(product.stock, 5);
        assert_eq!(product.updated_at, at(10));
    }

    #[test]
    fn test_apply_patch_never_moves_updated_at_before_created_at() {
        let mut product = widget();
        product.apply(ProductPatch::stock(1), at(9) - Duration::hours(3));
        assert_eq!(product.stock, 1);
        assert_eq!(product.updated_at, product.created_at);
    }

    #[test]
    fn test_stock_status() {
        let mut product = widget();
        assert_eq!(product.stock_status(), StockStatus::InStock);

        product.stock = 2;
        assert!(product.is_low_stock());
        assert_eq!(product.stock_status(), StockStatus::Low);

        product.stock = 0;
        assert_eq!(product.stock_status(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_unit_profit_and_can_sell() {
        let product = widget();
        assert_eq!(product.unit_profit().cents(), 500);
        assert!(product.can_sell(5));
        assert!(!product.can_sell(6));
    }

    #[test]
    fn test_financial_summary_empty() {
        let summary = FinancialSummary::compute(&[], &[], &[]);
        assert_eq!(summary, FinancialSummary::default());
        assert!(summary.net_profit.is_zero());
    }

    #[test]
    fn test_product_wire_format_is_camel_case() {
        let json = serde_json::to_value(widget()).unwrap();
        assert_eq!(json["purchasePrice"], 1000);
        assert_eq!(json["minStock"], 2);
        assert_eq!(json["category"], "electronics");
        assert!(json["createdAt"].as_str().unwrap().starts_with("2026-03-14T09:00:00"));
    }

    #[test]
    fn test_patch_deserializes_from_partial_json() {
        let patch: ProductPatch = serde_json::from_str(r#"{"stock": 7}"#).unwrap();
        assert_eq!(patch, ProductPatch::stock(7));
    }
}
