//! # Reports
//!
//! Read-only views derived from [`Books`]. Nothing here is cached; every
//! function recomputes from the collections it is handed.
//!
//! ## Reports Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Period: [all | today | week | month]                                  │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐                    │
//! │  │ Revenue      │ │ Expenses     │ │ Profit       │  ◄── PeriodSummary │
//! │  └──────────────┘ └──────────────┘ └──────────────┘                    │
//! │                                                                         │
//! │  Product performance (revenue desc)      ◄── ProductPerformance        │
//! │  Top expense categories (max 5)          ◄── CategoryExpense           │
//! │  Recent activity (max 10, newest first)  ◄── Activity                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Percentages
//! Percentages are `f64` for display and are 0 whenever their denominator
//! is zero, so they are never NaN or infinite.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ledger::Books;
use crate::money::Money;
use crate::period::Period;
use crate::types::{Expense, ExpenseCategory, FinancialSummary, Product, ProductCategory, Sale};

/// Number of expense categories shown in a report.
pub const TOP_EXPENSE_CATEGORIES: usize = 5;

/// Number of entries in the recent activity feed.
pub const ACTIVITY_FEED_LEN: usize = 10;

/// Number of sales shown on the dashboard.
pub const DASHBOARD_RECENT_SALES: usize = 5;

// =============================================================================
// Report Types
// =============================================================================

/// Revenue, expenses and profit within one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub revenue: Money,
    pub expenses: Money,
    pub profit: Money,
    /// Profit as a share of revenue; 0 when there is no revenue.
    pub profit_margin_pct: f64,
    pub sale_count: usize,
    pub expense_count: usize,
}

/// How one product sold within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformance {
    pub product_id: String,
    pub name: String,
    pub category: ProductCategory,
    pub units_sold: i64,
    pub revenue: Money,
    /// Revenue minus units sold at the product's current purchase price.
    pub profit: Money,
    pub profit_margin_pct: f64,
}

/// Total spent in one expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpense {
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Share of all expenses in the period.
    pub share_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Sale,
    Expense,
}

/// One line of the recent activity feed.
///
/// Sales carry the product name and quantity; the UI decides how to word
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub kind: ActivityKind,
    pub description: String,
    pub quantity: Option<i64>,
    pub amount: Money,
    /// Money in (sales) rather than money out (expenses).
    pub positive: bool,
}

/// Everything the reports screen shows for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub period: Period,
    pub summary: PeriodSummary,
    pub products: Vec<ProductPerformance>,
    pub expense_categories: Vec<CategoryExpense>,
    pub activity: Vec<Activity>,
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: FinancialSummary,
    pub recent_sales: Vec<Sale>,
    pub low_stock: Vec<Product>,
}

// =============================================================================
// Builders
// =============================================================================

impl Report {
    /// Builds the full report for `period`, ending at `now`.
    pub fn build<Tz: TimeZone>(books: &Books, period: Period, now: &DateTime<Tz>) -> Self {
        let sales = period.filter(books.sales(), now);
        let expenses = period.filter(books.expenses(), now);

        Report {
            period,
            summary: period_summary(&sales, &expenses),
            products: product_performance(books.products(), &sales),
            expense_categories: expenses_by_category(&expenses),
            activity: recent_activity(&sales, &expenses),
        }
    }
}

impl Dashboard {
    pub fn build(books: &Books) -> Self {
        Dashboard {
            summary: books.financial_summary(),
            recent_sales: recent_sales(books.sales(), DASHBOARD_RECENT_SALES),
            low_stock: low_stock(books.products()).into_iter().cloned().collect(),
        }
    }
}

/// Share of `part` in `whole` as a percentage, 0 when `whole` is zero.
fn share(part: Money, whole: Money) -> f64 {
    part.percent_of(whole)
}

/// Totals for the sales and expenses of one period.
pub fn period_summary(sales: &[&Sale], expenses: &[&Expense]) -> PeriodSummary {
    let revenue: Money = sales.iter().map(|s| s.total_amount).sum();
    let spent: Money = expenses.iter().map(|e| e.amount).sum();
    let profit = revenue - spent;

    PeriodSummary {
        revenue,
        expenses: spent,
        profit,
        profit_margin_pct: share(profit, revenue),
        sale_count: sales.len(),
        expense_count: expenses.len(),
    }
}

/// Per-product units, revenue and profit, highest revenue first.
///
/// Every product appears, including ones with no sales. Ties keep the
/// product list order.
pub fn product_performance(products: &[Product], sales: &[&Sale]) -> Vec<ProductPerformance> {
    let mut rows: Vec<ProductPerformance> = products
        .iter()
        .map(|product| {
            let (units_sold, revenue) = sales
                .iter()
                .filter(|s| s.product_id == product.id)
                .fold((0_i64, Money::zero()), |(units, revenue), s| {
                    (units + s.quantity, revenue + s.total_amount)
                });
            let profit = revenue - product.purchase_price.multiply_quantity(units_sold);

            ProductPerformance {
                product_id: product.id.clone(),
                name: product.name.clone(),
                category: product.category,
                units_sold,
                revenue,
                profit,
                profit_margin_pct: share(profit, revenue),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    rows
}

/// Expense totals per category, largest first, at most
/// [`TOP_EXPENSE_CATEGORIES`] entries.
pub fn expenses_by_category(expenses: &[&Expense]) -> Vec<CategoryExpense> {
    let total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut order: Vec<ExpenseCategory> = Vec::new();
    let mut sums: HashMap<ExpenseCategory, Money> = HashMap::new();
    for expense in expenses {
        let sum = sums.entry(expense.category).or_insert_with(|| {
            order.push(expense.category);
            Money::zero()
        });
        *sum += expense.amount;
    }

    let mut rows: Vec<CategoryExpense> = order
        .into_iter()
        .map(|category| {
            let amount = sums.get(&category).copied().unwrap_or_default();
            CategoryExpense {
                category,
                amount,
                share_pct: share(amount, total),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.amount.cmp(&a.amount));
    rows.truncate(TOP_EXPENSE_CATEGORIES);
    rows
}

/// Sales and expenses merged, newest first, at most [`ACTIVITY_FEED_LEN`].
pub fn recent_activity(sales: &[&Sale], expenses: &[&Expense]) -> Vec<Activity> {
    let mut feed: Vec<Activity> = sales
        .iter()
        .map(|sale| Activity {
            date: sale.date,
            kind: ActivityKind::Sale,
            description: sale.product_name.clone(),
            quantity: Some(sale.quantity),
            amount: sale.total_amount,
            positive: true,
        })
        .chain(expenses.iter().map(|expense| Activity {
            date: expense.date,
            kind: ActivityKind::Expense,
            description: expense.description.clone(),
            quantity: None,
            amount: expense.amount,
            positive: false,
        }))
        .collect();

    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(ACTIVITY_FEED_LEN);
    feed
}

/// Products at or below their restock threshold.
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

/// Products with at least one unit on hand.
pub fn available_for_sale(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.stock > 0).collect()
}

/// The last `limit` recorded sales, most recently recorded first.
pub fn recent_sales(sales: &[Sale], limit: usize) -> Vec<Sale> {
    sales.iter().rev().take(limit).cloned().collect()
}

/// All sales, most recently recorded first.
pub fn sales_newest_first(sales: &[Sale]) -> Vec<Sale> {
    sales.iter().rev().cloned().collect()
}

/// All expenses, most recently entered first.
pub fn expenses_newest_first(expenses: &[Expense]) -> Vec<Expense> {
    expenses.iter().rev().cloned().collect()
}

/// Sum of every expense amount.
pub fn total_expenses(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
