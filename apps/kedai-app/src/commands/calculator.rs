//! # Calculator Commands
//!
//! The three pricing calculators. They take the raw form strings and never
//! touch the ledger; blank or malformed fields count as zero.

use tracing::debug;

use crate::error::ApiError;
use kedai_core::calculator::{
    BreakEven, BreakEvenInput, PricingInput, ProfitCalculation, ProfitInput, SuggestedPrice,
};

/// Profit per unit, total profit and margin for a purchase/selling price pair.
pub fn calculate_profit(input: &ProfitInput) -> Result<ProfitCalculation, ApiError> {
    debug!("calculate_profit command");

    Ok(input.calculate())
}

/// Selling price that yields the requested margin on the price.
///
/// A margin of 100% or more is rejected with `VALIDATION_ERROR` when the cost
/// is positive.
pub fn suggest_price(input: &PricingInput) -> Result<SuggestedPrice, ApiError> {
    debug!("suggest_price command");

    Ok(input.calculate()?)
}

/// Units and revenue needed to cover fixed costs.
pub fn calculate_break_even(input: &BreakEvenInput) -> Result<BreakEven, ApiError> {
    debug!("calculate_break_even command");

    Ok(input.calculate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_calculate_profit() {
        let result = calculate_profit(&ProfitInput::new("3", "5", "10")).unwrap();
        assert_eq!(result.profit_per_unit.cents(), 200);
        assert_eq!(result.total_profit.cents(), 2_000);
        assert!((result.profit_margin_pct - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_suggest_price() {
        let result = suggest_price(&PricingInput::new("100", "20")).unwrap();
        assert_eq!(result.price.cents(), 12_500);

        let err = suggest_price(&PricingInput::new("100", "100")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_calculate_break_even() {
        let result = calculate_break_even(&BreakEvenInput::new("1000", "4", "10")).unwrap();
        assert_eq!(result.contribution_margin.cents(), 600);
        assert_eq!(result.break_even_units, 167);
        assert_eq!(result.break_even_revenue.cents(), 167_000);
    }

    #[test]
    fn test_blank_fields_are_zero() {
        let result = calculate_profit(&ProfitInput::default()).unwrap();
        assert_eq!(result, ProfitCalculation::default());
    }
}
