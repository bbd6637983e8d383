//! # Expense Commands
//!
//! Expense listing, entry and removal.

use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;
use kedai_core::report;
use kedai_core::validation::validate_new_expense;
use kedai_core::{Expense, Money, NewExpense};

/// All expenses, most recently entered first.
pub async fn list_expenses(state: &AppState) -> Result<Vec<Expense>, ApiError> {
    debug!("list_expenses command");

    Ok(state
        .ledger()
        .with_books(|b| report::expenses_newest_first(b.expenses()))
        .await)
}

/// Adds an expense from the expense form.
pub async fn add_expense(state: &AppState, draft: NewExpense) -> Result<Expense, ApiError> {
    debug!(category = ?draft.category, amount = %draft.amount, "add_expense command");

    validate_new_expense(&draft)?;
    Ok(state.ledger().add_expense(draft).await?)
}

/// Deletes an expense. Returns whether it existed.
pub async fn delete_expense(state: &AppState, id: &str) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_expense command");

    Ok(state.ledger().delete_expense(id).await?)
}

/// Sum of every expense, shown above the expense list.
pub async fn get_total_expenses(state: &AppState) -> Result<Money, ApiError> {
    debug!("get_total_expenses command");

    Ok(state
        .ledger()
        .with_books(|b| report::total_expenses(b.expenses()))
        .await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::test_state;
    use kedai_core::ExpenseCategory;

    fn draft(description: &str, cents: i64) -> NewExpense {
        NewExpense {
            description: description.to_string(),
            amount: Money::from_cents(cents),
            category: ExpenseCategory::Rent,
            date: None,
        }
    }

    #[tokio::test]
    async fn test_add_list_and_total() {
        let state = test_state().await;
        add_expense(&state, draft("Sewa kios", 150_000)).await.unwrap();
        add_expense(&state, draft("Listrik", 25_050)).await.unwrap();

        let expenses = list_expenses(&state).await.unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].description, "Listrik");
        assert_eq!(expenses[1].description, "Sewa kios");

        let total = get_total_expenses(&state).await.unwrap();
        assert_eq!(total.cents(), 175_050);
    }

    #[tokio::test]
    async fn test_add_expense_validation() {
        let state = test_state().await;

        let err = add_expense(&state, draft("", 100)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_expense(&state, draft("Refund", -100)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(list_expenses(&state).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_expense() {
        let state = test_state().await;
        let expense = add_expense(&state, draft("Bensin", 3_000)).await.unwrap();

        assert!(delete_expense(&state, &expense.id).await.unwrap());
        assert!(!delete_expense(&state, &expense.id).await.unwrap());
        assert_eq!(get_total_expenses(&state).await.unwrap(), Money::zero());
    }
}
