//! # Error Types
//!
//! Domain-specific error types for varasto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  varasto-core errors (this file)                                       │
//! │  ├── CoreError        - Registry operation failures                    │
//! │  └── ValidationError  - Untrusted input failures                       │
//! │                                                                         │
//! │  varasto-web errors (app crate)                                        │
//! │  ├── WebError         - Startup / serving failures                     │
//! │  └── flash messages   - What the user sees after a redirect            │
//! │                                                                         │
//! │  Flow: ValidationError | CoreError → flash message → Browser           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Stock` has no error type at all: out-of-range input is clamped.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (warehouse ID, product name)
//! 3. A failed operation never leaves partial changes behind

use thiserror::Error;

use crate::types::WarehouseId;

// =============================================================================
// Core Error
// =============================================================================

/// Registry operation failures.
///
/// Each variant corresponds to one column of the registry's failure policy:
///
/// ```text
/// ┌──────────────────────────┬──────────────────┬─────────────────┬──────────────────┐
/// │ Operation                │ Missing          │ Negative        │ Missing product  │
/// │                          │ warehouse        │ quantity        │ key              │
/// ├──────────────────────────┼──────────────────┼─────────────────┼──────────────────┤
/// │ add_product              │ WarehouseNotFound│ InvalidQuantity │ (creates key)    │
/// │ update_product_quantity  │ WarehouseNotFound│ InvalidQuantity │ ProductNotFound  │
/// │ remove_product           │ WarehouseNotFound│ n/a             │ ProductNotFound  │
/// └──────────────────────────┴──────────────────┴─────────────────┴──────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The warehouse ID was never created or has been deleted.
    #[error("Warehouse not found: {0}")]
    WarehouseNotFound(WarehouseId),

    /// The warehouse exists but has no product under that name.
    #[error("Product '{product}' not found in warehouse {warehouse}")]
    ProductNotFound {
        warehouse: WarehouseId,
        product: String,
    },

    /// Quantity is negative, NaN or infinite.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(f64),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning untrusted form/path input into domain values, before
/// any registry operation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Field is not a number at all.
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Field parsed as NaN or infinity.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Field is below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
