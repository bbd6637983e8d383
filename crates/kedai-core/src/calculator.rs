//! # Calculators
//!
//! Standalone pricing tools. They never touch the books.
//!
//! ## Input Handling
//! Inputs arrive as the raw text of form fields. Anything that does not
//! parse as a number counts as 0, so a half-filled form still produces a
//! result instead of an error.
//!
//! | Calculator      | Inputs                               | Output               |
//! |-----------------|--------------------------------------|----------------------|
//! | Profit          | purchase price, selling price, qty   | [`ProfitCalculation`]|
//! | Suggested price | cost, target margin %                | [`SuggestedPrice`]   |
//! | Break-even      | fixed costs, variable cost, price    | [`BreakEven`]        |
//!
//! ## Example
//! ```rust
//! use kedai_core::calculator::BreakEvenInput;
//!
//! let result = BreakEvenInput::new("1000", "4", "10").calculate();
//! assert_eq!(result.break_even_units, 167);
//! assert_eq!(result.break_even_revenue.cents(), 167_000);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{parse_scaled, Money};
use crate::types::Percentage;

fn money_or_zero(input: &str) -> Money {
    Money::parse(input).unwrap_or_default()
}

/// Quantities are whole units; fractional input is rounded half-up.
fn quantity_or_zero(input: &str) -> i64 {
    parse_scaled(input, 0).unwrap_or(0)
}

/// `numerator / denominator` rounded half away from zero. `denominator > 0`.
fn div_round(numerator: i128, denominator: i128) -> i128 {
    if numerator >= 0 {
        (numerator * 2 + denominator) / (denominator * 2)
    } else {
        -((-numerator * 2 + denominator) / (denominator * 2))
    }
}

/// `ceil(numerator / denominator)`. `denominator > 0`.
fn div_ceil(numerator: i128, denominator: i128) -> i128 {
    -((-numerator).div_euclid(denominator))
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

// =============================================================================
// Profit
// =============================================================================

/// Raw profit calculator form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfitInput {
    pub purchase_price: String,
    pub selling_price: String,
    pub quantity: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfitCalculation {
    pub profit_per_unit: Money,
    pub total_profit: Money,
    /// Profit per unit as a share of the selling price; 0 when the selling
    /// price is not positive.
    pub profit_margin_pct: f64,
}

impl ProfitInput {
    pub fn new(purchase_price: &str, selling_price: &str, quantity: &str) -> Self {
        ProfitInput {
            purchase_price: purchase_price.to_string(),
            selling_price: selling_price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    pub fn calculate(&self) -> ProfitCalculation {
        let purchase = money_or_zero(&self.purchase_price);
        let selling = money_or_zero(&self.selling_price);
        let quantity = quantity_or_zero(&self.quantity);

        let profit_per_unit = selling - purchase;
        let profit_margin_pct = if selling.is_positive() {
            profit_per_unit.percent_of(selling)
        } else {
            0.0
        };

        ProfitCalculation {
            profit_per_unit,
            total_profit: profit_per_unit.multiply_quantity(quantity),
            profit_margin_pct,
        }
    }
}

// =============================================================================
// Suggested Price
// =============================================================================

/// Raw margin calculator form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingInput {
    pub cost: String,
    /// Target margin in percent ("20" for 20%).
    pub margin: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedPrice {
    pub cost: Money,
    pub margin: Percentage,
    /// Price at which `margin` of the price is profit.
    pub price: Money,
}

impl PricingInput {
    pub fn new(cost: &str, margin: &str) -> Self {
        PricingInput {
            cost: cost.to_string(),
            margin: margin.to_string(),
        }
    }

    /// Computes `cost / (1 - margin)`.
    ///
    /// ## Errors
    /// A margin of 100% or more has no finite price. With a positive cost
    /// this is [`CoreError::MarginOutOfRange`]; with no cost the price is 0.
    ///
    /// ## Example
    /// ```rust
    /// use kedai_core::calculator::PricingInput;
    ///
    /// let result = PricingInput::new("100", "20").calculate().unwrap();
    /// assert_eq!(result.price.cents(), 12_500);
    ///
    /// assert!(PricingInput::new("100", "100").calculate().is_err());
    /// ```
    pub fn calculate(&self) -> CoreResult<SuggestedPrice> {
        let cost = money_or_zero(&self.cost);
        let margin = Percentage::parse(&self.margin).unwrap_or_default();

        if margin.is_whole_or_more() {
            if cost.is_positive() {
                return Err(CoreError::MarginOutOfRange {
                    margin_bps: margin.bps(),
                });
            }
            return Ok(SuggestedPrice {
                cost,
                margin,
                price: Money::zero(),
            });
        }

        let remaining = i128::from(Percentage::WHOLE_BPS - margin.bps());
        let price = div_round(
            i128::from(cost.cents()) * i128::from(Percentage::WHOLE_BPS),
            remaining,
        );

        Ok(SuggestedPrice {
            cost,
            margin,
            price: Money::from_cents(saturate(price)),
        })
    }
}

// =============================================================================
// Break-Even
// =============================================================================

/// Raw break-even calculator form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakEvenInput {
    pub fixed_costs: String,
    pub variable_cost: String,
    pub selling_price: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BreakEven {
    /// Selling price minus variable cost per unit.
    pub contribution_margin: Money,
    /// Units needed to cover fixed costs; 0 when each unit loses money.
    pub break_even_units: i64,
    pub break_even_revenue: Money,
}

impl BreakEvenInput {
    pub fn new(fixed_costs: &str, variable_cost: &str, selling_price: &str) -> Self {
        BreakEvenInput {
            fixed_costs: fixed_costs.to_string(),
            variable_cost: variable_cost.to_string(),
            selling_price: selling_price.to_string(),
        }
    }

    pub fn calculate(&self) -> BreakEven {
        let fixed = money_or_zero(&self.fixed_costs);
        let variable = money_or_zero(&self.variable_cost);
        let price = money_or_zero(&self.selling_price);

        let contribution_margin = price - variable;
        let break_even_units = if contribution_margin.is_positive() {
            saturate(div_ceil(
                i128::from(fixed.cents()),
                i128::from(contribution_margin.cents()),
            ))
        } else {
            0
        };

        BreakEven {
            contribution_margin,
            break_even_units,
            break_even_revenue: price.multiply_quantity(break_even_units),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
