//! # Report Commands
//!
//! Dashboard, lifetime summary and per-period reports.
//!
//! ## Report Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Period: [All] [Today] [7 days] [30 days]                       │
//! │                                                                 │
//! │  Revenue        Expenses        Profit         Margin           │
//! │  1,250.00       400.00          850.00         68.0%            │
//! │                                                                 │
//! │  Products by revenue          Expenses by category (top 5)     │
//! │  ─────────────────────        ────────────────────────────     │
//! │  Beras 5kg      720.00        Rent          300.00   75.0%     │
//! │  Teh Botol      530.00        Utilities     100.00   25.0%     │
//! │                                                                 │
//! │  Recent activity (last 10, sales and expenses merged)           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Period windows are evaluated against the local clock, so "Today" starts
//! at local midnight.

use chrono::Local;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;
use kedai_core::{Dashboard, FinancialSummary, Period, Report};

/// Home screen: lifetime totals, the latest sales and restock warnings.
pub async fn get_dashboard(state: &AppState) -> Result<Dashboard, ApiError> {
    debug!("get_dashboard command");

    Ok(state.ledger().dashboard().await)
}

/// Lifetime totals across every product, sale and expense.
pub async fn get_financial_summary(state: &AppState) -> Result<FinancialSummary, ApiError> {
    debug!("get_financial_summary command");

    Ok(state.ledger().financial_summary().await)
}

/// Report for one period code: `all`, `today`, `week` or `month`.
pub async fn get_report(state: &AppState, period: &str) -> Result<Report, ApiError> {
    debug!(period = %period, "get_report command");

    let period: Period = period
        .parse()
        .map_err(|e: kedai_core::period::UnknownPeriod| ApiError::validation(e.to_string()))?;

    Ok(state.ledger().report(period, &Local::now()).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::expense::add_expense;
    use crate::commands::product::add_product;
    use crate::commands::sale::create_sale;
    use crate::error::ErrorCode;
    use crate::state::test_state;
    use kedai_core::{ExpenseCategory, Money, NewExpense, NewProduct, NewSale, ProductCategory};

    async fn seed(state: &AppState) {
        let product = add_product(
            state,
            NewProduct {
                name: "Beras 5kg".to_string(),
                description: String::new(),
                category: ProductCategory::Food,
                purchase_price: Money::from_cents(6_000),
                selling_price: Money::from_cents(7_200),
                stock: 10,
                min_stock: 8,
            },
        )
        .await
        .unwrap();

        create_sale(state, NewSale::new(&product.product.id, 3))
            .await
            .unwrap();

        add_expense(
            state,
            NewExpense {
                description: "Listrik".to_string(),
                amount: Money::from_cents(5_000),
                category: ExpenseCategory::Utilities,
                date: None,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_dashboard_and_summary() {
        let state = test_state().await;
        seed(&state).await;

        let summary = get_financial_summary(&state).await.unwrap();
        assert_eq!(summary.total_revenue.cents(), 21_600);
        assert_eq!(summary.total_expenses.cents(), 5_000);
        assert_eq!(summary.net_profit.cents(), 16_600);
        assert_eq!(summary.low_stock_count, 1);

        let dashboard = get_dashboard(&state).await.unwrap();
        assert_eq!(dashboard.summary, summary);
        assert_eq!(dashboard.recent_sales.len(), 1);
        assert_eq!(dashboard.low_stock.len(), 1);
    }

    #[tokio::test]
    async fn test_report_for_today() {
        let state = test_state().await;
        seed(&state).await;

        let report = get_report(&state, "today").await.unwrap();
        assert_eq!(report.period, Period::Today);
        assert_eq!(report.summary.sale_count, 1);
        assert_eq!(report.summary.expense_count, 1);
        assert_eq!(report.products.len(), 1);
        assert_eq!(report.products[0].units_sold, 3);
        assert_eq!(report.expense_categories.len(), 1);
        assert_eq!(report.activity.len(), 2);
    }

    #[tokio::test]
    async fn test_report_rejects_unknown_period() {
        let state = test_state().await;

        let err = get_report(&state, "year").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("year"));
    }
}
