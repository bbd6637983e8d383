//! # Validation Module
//!
//! Input validation utilities for Kedai.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI forms                                                     │
//! │  ├── Required fields, numeric inputs                                   │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: kedai-app commands                                           │
//! │  └── THIS MODULE: form data checks (names, prices, stock levels)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger                                                       │
//! │  └── Sale rules only: product exists, quantity > 0, stock suffices     │
//! │                                                                         │
//! │  The ledger accepts products and expenses as given; callers guarantee  │
//! │  sane values through this module.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kedai_core::validation::{validate_product_name, validate_quantity};
//!
//! assert!(validate_product_name("Teh Botol").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewExpense, NewProduct, ProductPatch};
use crate::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most `MAX_NAME_LEN` characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name, MAX_NAME_LEN)
}

/// Validates a free-form description (may be empty).
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates an expense description, which unlike product descriptions is
/// required.
pub fn validate_expense_description(description: &str) -> ValidationResult<()> {
    validate_required_text("description", description, MAX_DESCRIPTION_LEN)
}

fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price or amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, zero-cost stock)
///
/// ## Example
/// ```rust
/// use kedai_core::money::Money;
/// use kedai_core::validation::validate_amount;
///
/// assert!(validate_amount("sellingPrice", Money::from_cents(1099)).is_ok());
/// assert!(validate_amount("sellingPrice", Money::zero()).is_ok());
/// assert!(validate_amount("sellingPrice", Money::from_cents(-100)).is_err());
/// ```
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level or restock threshold.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_stock_level(field: &str, level: i64) -> ValidationResult<()> {
    if level < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the product form before `add_product`.
pub fn validate_new_product(draft: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&draft.name)?;
    validate_description(&draft.description)?;
    validate_amount("purchasePrice", draft.purchase_price)?;
    validate_amount("sellingPrice", draft.selling_price)?;
    validate_stock_level("stock", draft.stock)?;
    validate_stock_level("minStock", draft.min_stock)?;
    Ok(())
}

/// Validates the fields present in a product patch.
pub fn validate_product_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_product_name(name)?;
    }
    if let Some(description) = &patch.description {
        validate_description(description)?;
    }
    if let Some(price) = patch.purchase_price {
        validate_amount("purchasePrice", price)?;
    }
    if let Some(price) = patch.selling_price {
        validate_amount("sellingPrice", price)?;
    }
    if let Some(stock) = patch.stock {
        validate_stock_level("stock", stock)?;
    }
    if let Some(min_stock) = patch.min_stock {
        validate_stock_level("minStock", min_stock)?;
    }
    Ok(())
}

/// Validates the expense form before `add_expense`.
pub fn validate_new_expense(draft: &NewExpense) -> ValidationResult<()> {
    validate_expense_description(&draft.description)?;
    validate_amount("amount", draft.amount)?;
    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use kedai_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExpenseCategory, ProductCategory};

    fn draft() -> NewProduct {
        NewProduct {
            name: "Kopi Susu".to_string(),
            description: String::new(),
            category: ProductCategory::Beverage,
            purchase_price: Money::from_cents(800),
            selling_price: Money::from_cents(1500),
            stock: 10,
            min_stock: 3,
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Kopi Susu").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(MAX_DESCRIPTION_LEN)).is_ok());
        assert!(validate_description(&"d".repeat(MAX_DESCRIPTION_LEN + 1)).is_err());
        assert!(validate_expense_description("").is_err());
        assert!(validate_expense_description("Listrik bulan Maret").is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10_000).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_stock_level() {
        assert!(validate_stock_level("stock", 0).is_ok());
        assert!(validate_stock_level("stock", -1).is_err());
    }

    #[test]
    fn test_validate_new_product() {
        assert!(validate_new_product(&draft()).is_ok());

        let mut bad = draft();
        bad.selling_price = Money::from_cents(-1);
        let err = validate_new_product(&bad).unwrap_err();
        assert!(err.to_string().starts_with("sellingPrice"));

        let mut bad = draft();
        bad.min_stock = -2;
        assert!(validate_new_product(&bad).is_err());
    }

    #[test]
    fn test_validate_product_patch_only_checks_present_fields() {
        assert!(validate_product_patch(&ProductPatch::default()).is_ok());
        assert!(validate_product_patch(&ProductPatch::stock(4)).is_ok());
        assert!(validate_product_patch(&ProductPatch::stock(-4)).is_err());
        assert!(validate_product_patch(&ProductPatch {
            name: Some(String::new()),
            ..ProductPatch::default()
        })
        .is_err());
    }

    #[test]
    fn test_validate_new_expense() {
        let expense = NewExpense {
            description: "Sewa toko".to_string(),
            amount: Money::from_cents(150_000),
            category: ExpenseCategory::Rent,
            date: None,
        };
        assert!(validate_new_expense(&expense).is_ok());

        let negative = NewExpense {
            amount: Money::from_cents(-1),
            ..expense
        };
        assert!(validate_new_expense(&negative).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
        assert!(validate_uuid("123").is_err());
    }
}
