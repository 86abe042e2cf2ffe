//! # Validation Module
//!
//! The calculation rule and the profit/loss it produces.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (ledger-api)                                  │
//! │  ├── Body must be JSON, path ids must be integers                      │
//! │  └── Rejections become 400 responses                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── income and cost cannot both be ≤ 0 (absent = 0)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL profit_or_loss                                           │
//! │  └── shipment_id foreign key                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Zero Rule
//! | income | cost | result |
//! |--------|------|--------|
//! | 100    | 50   | Ok(50) |
//! | 0      | 30   | Ok(-30) |
//! | 40     | 0    | Ok(40) |
//! | -5     | 10   | Ok(-15) (negatives are not rejected by themselves) |
//! | 0 / null | 0 / null | Err |
//! | -5     | 0    | Err (neither side is above zero) |

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Absent amounts count as zero, for the check and for the subtraction.
#[inline]
fn or_zero(amount: Option<f64>) -> f64 {
    amount.unwrap_or(0.0)
}

/// Rejects a calculation whose income and cost are both ≤ 0.
///
/// ## Example
/// ```rust
/// use ledger_core::validation::validate_amounts;
///
/// assert!(validate_amounts(Some(0.0), Some(25.0)).is_ok());
/// assert!(validate_amounts(None, None).is_err());
/// ```
pub fn validate_amounts(income: Option<f64>, cost: Option<f64>) -> ValidationResult<()> {
    if or_zero(income) <= 0.0 && or_zero(cost) <= 0.0 {
        return Err(ValidationError::IncomeAndCostNotPositive);
    }

    Ok(())
}

/// `income - cost`, absent amounts counted as zero.
#[inline]
pub fn profit_or_loss(income: Option<f64>, cost: Option<f64>) -> f64 {
    or_zero(income) - or_zero(cost)
}

/// Validates the amounts and returns the profit or loss they produce.
///
/// This is the whole validation-and-computation unit: no side effects,
/// same input, same output.
pub fn evaluate(income: Option<f64>, cost: Option<f64>) -> ValidationResult<f64> {
    validate_amounts(income, cost)?;
    Ok(profit_or_loss(income, cost))
}

// =============================================================================
// Unit Tests
// =============================================================================
