//! # Error Types
//!
//! Domain-specific error types for ledger-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ledger-core errors (this file)                                        │
//! │  ├── CoreError        - What a workflow can fail with                  │
//! │  └── ValidationError  - Calculation input rejected                     │
//! │                                                                         │
//! │  ledger-db errors (separate crate)                                     │
//! │  └── DbError          - Database failures, folded into CoreError       │
//! │                                                                         │
//! │  ledger-api errors (in app)                                            │
//! │  └── ApiError         - Status code + JSON error body                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ← DbError,  CoreError → ApiError    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Contract
//! The `Display` output of these errors is sent to clients verbatim, so the
//! wording is part of the API:
//! - `Shipment not found with id : '42'`
//! - `Income and Cost cannot both be 0`

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the ledger workflows.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record looked up by key does not exist.
    ///
    /// ## When This Occurs
    /// - Shipment id unknown (get, delete, list/create calculations)
    /// - Calculation id unknown (delete)
    #[error("{resource} not found with {field} : '{value}'")]
    NotFound {
        resource: String,
        field: String,
        value: String,
    },

    /// Request input broke a business rule. Maps to 400.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage collaborator failed. Maps to 500; the message is logged,
    /// never shown to clients.
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl CoreError {
    /// Creates a NotFound error keyed on `id`.
    ///
    /// ```rust
    /// use ledger_core::CoreError;
    ///
    /// let err = CoreError::not_found("Shipment", 999);
    /// assert_eq!(err.to_string(), "Shipment not found with id : '999'");
    /// ```
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        CoreError::NotFound {
            resource: resource.into(),
            field: "id".to_string(),
            value: id.to_string(),
        }
    }

    /// Creates a Storage error from anything printable.
    pub fn storage(message: impl Into<String>) -> Self {
        CoreError::Storage(message.into())
    }

    /// True for NotFound.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Calculation input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Neither income nor cost is above zero (absent counts as zero).
    #[error("Income and Cost cannot both be 0")]
    IncomeAndCostNotPositive,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
