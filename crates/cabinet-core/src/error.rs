//! # Error Types
//!
//! Domain-specific error types for cabinet-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cabinet-core errors (this file)                                        │
//! │  ├── CoreError        - Cart and catalog rule violations                │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  cabinet-catalog      └── CatalogError  - Spreadsheet problems          │
//! │  cabinet-invoice      └── InvoiceError  - Rendering problems            │
//! │  cabinet-cli          └── CliError      - What the user sees            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The cart has no rows.
    ///
    /// ## When This Occurs
    /// - Invoice requested before anything was added
    /// - Invoice requested right after `clear()`
    ///
    /// The pricing engine itself never raises this: an empty cart simply has
    /// zero totals. Only the invoice boundary refuses it.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// Quantity below 1.
    #[error("Invalid quantity {requested}: must be at least 1")]
    InvalidQuantity { requested: i64 },

    /// The row would push a cart total past [`crate::MAX_AMOUNT_CENTS`].
    #[error("Quantity {quantity} of {name} exceeds the largest supported amount")]
    AmountOverflow { name: String, quantity: i64 },

    /// No catalog item matches the requested type and name.
    #[error("Item not found in catalog: {item_type} / {name}")]
    ItemNotFound { item_type: String, name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the boundary, before any value reaches the pricing engine.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a price that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
