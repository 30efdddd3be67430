//! # Domain Types
//!
//! Core domain types used throughout Varasto.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  WarehouseId    │   │   Warehouse     │   │   ProductMap    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u64, from 1    │──►│  name           │──►│  "Apple" → 10.0 │       │
//! │  │  never reused   │   │  products       │   │  "Pear"  → 2.5  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Warehouse ID
// =============================================================================

/// Identifier of a warehouse inside a [`WarehouseRegistry`](crate::WarehouseRegistry).
///
/// IDs are handed out by the registry starting at 1 and are never reused,
/// even after the warehouse they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(u64);

impl WarehouseId {
    /// Wraps a raw integer. Does not check that the ID exists anywhere.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        WarehouseId(raw)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WarehouseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(WarehouseId)
    }
}

impl From<u64> for WarehouseId {
    fn from(raw: u64) -> Self {
        WarehouseId(raw)
    }
}

// =============================================================================
// Products
// =============================================================================

/// Product name → quantity on hand.
///
/// Quantities are always finite and non-negative. Keys are kept sorted so
/// listings are stable without extra work at render time.
pub type ProductMap = BTreeMap<String, f64>;

// =============================================================================
// Warehouse
// =============================================================================

/// A named container of products.
///
/// Values of this type handed out by the registry are clones; mutating them
/// never touches registry state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Display name, as entered by the user (already trimmed).
    pub name: String,

    /// Products stored in this warehouse.
    pub products: ProductMap,
}

impl Warehouse {
    /// Creates an empty warehouse.
    pub fn new(name: impl Into<String>) -> Self {
        Warehouse {
            name: name.into(),
            products: ProductMap::new(),
        }
    }

    /// Number of distinct products.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Sum of all product quantities.
    pub fn total_quantity(&self) -> f64 {
        self.products.values().sum()
    }

    /// Checks if the warehouse holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warehouse_id_parsing() {
        assert_eq!("7".parse::<WarehouseId>().unwrap(), WarehouseId::new(7));
        assert_eq!(" 12 ".parse::<WarehouseId>().unwrap().get(), 12);
        assert!("abc".parse::<WarehouseId>().is_err());
        assert!("-1".parse::<WarehouseId>().is_err());
        assert!("1.5".parse::<WarehouseId>().is_err());
    }

    #[test]
    fn test_warehouse_id_display() {
        assert_eq!(WarehouseId::from(42).to_string(), "42");
    }

    #[test]
    fn test_new_warehouse_is_empty() {
        let warehouse = Warehouse::new("Main");
        assert_eq!(warehouse.name, "Main");
        assert!(warehouse.is_empty());
        assert_eq!(warehouse.product_count(), 0);
        assert_eq!(warehouse.total_quantity(), 0.0);
    }

    #[test]
    fn test_warehouse_totals() {
        let mut warehouse = Warehouse::new("Main");
        warehouse.products.insert("Apple".to_string(), 10.0);
        warehouse.products.insert("Pear".to_string(), 2.5);

        assert_eq!(warehouse.product_count(), 2);
        assert!((warehouse.total_quantity() - 12.5).abs() < 1e-9);
    }
}
