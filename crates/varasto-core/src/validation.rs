//! # Validation Module
//!
//! Turns untrusted input (form fields, path segments) into domain values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser                                                      │
//! │  ├── `required` / `type=number` attributes on the forms                │
//! │  └── Trivially bypassed, never trusted                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Route handler (varasto-web)                                  │
//! │  └── THIS MODULE: names trimmed, quantities parsed, IDs parsed         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: WarehouseRegistry                                            │
//! │  ├── Existence checks (warehouse, product)                             │
//! │  └── Quantity must be finite and >= 0                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use varasto_core::validation::{parse_quantity, validate_warehouse_name};
//!
//! assert_eq!(validate_warehouse_name("  Main  ").unwrap(), "Main");
//! assert_eq!(parse_quantity(Some("2.5")).unwrap(), 2.5);
//! assert!(parse_quantity(Some("lots")).is_err());
//! assert!(parse_quantity(None).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::WarehouseId;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a warehouse name.
///
/// ## Rules
/// - Surrounding whitespace is dropped
/// - Must not be empty after trimming
/// - At most `MAX_NAME_LENGTH` characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_warehouse_name(name: &str) -> ValidationResult<String> {
    validate_name("name", name)
}

/// Validates a product name.
///
/// Same rules as [`validate_warehouse_name`].
///
/// ## Example
/// ```rust
/// use varasto_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Apple").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    validate_name("product name", name)
}

fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a product quantity from raw form input.
///
/// ## Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Input            Result                                                │
/// │  ─────            ──────                                                │
/// │  None / ""        Err(Required)                                         │
/// │  "abc"            Err(InvalidNumber)                                    │
/// │  "NaN" / "inf"    Err(NotFinite)                                        │
/// │  "-1"             Err(MustBeNonNegative)                                │
/// │  "0"              Ok(0.0)      zero is a valid quantity                 │
/// │  " 2.5 "          Ok(2.5)                                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(raw: Option<&str>) -> ValidationResult<f64> {
    let raw = raw.map(str::trim).unwrap_or_default();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let value: f64 = raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "quantity".to_string(),
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "quantity".to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(value)
}

/// Checks that a quantity can be stored: finite and not negative.
#[inline]
pub fn is_valid_quantity(qty: f64) -> bool {
    qty.is_finite() && qty >= 0.0
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Parses a warehouse ID from a path segment.
///
/// Anything that is not a non-negative integer yields `None`; route handlers
/// treat that exactly like an ID that does not exist.
pub fn parse_warehouse_id(raw: &str) -> Option<WarehouseId> {
    raw.parse().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
