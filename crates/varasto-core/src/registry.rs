//! # Warehouse Registry
//!
//! The ID-keyed collection of warehouses and their products.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registry Operations                                  │
//! │                                                                         │
//! │  Route                        Registry call            State change     │
//! │  ─────                        ─────────────            ────────────     │
//! │                                                                         │
//! │  POST /warehouse/new ───────► create_warehouse() ────► insert(next_id)  │
//! │                                                                         │
//! │  POST .../edit ─────────────► rename_warehouse() ────► name = new       │
//! │                                                                         │
//! │  POST .../delete ───────────► delete_warehouse() ────► remove(id)       │
//! │                                                                         │
//! │  POST .../product/add ──────► add_product() ─────────► qty += n         │
//! │                                                                         │
//! │  POST .../product/x/update ─► update_product_quantity() ► qty = n       │
//! │                                                                         │
//! │  POST .../product/x/remove ─► remove_product() ──────► remove(key)      │
//! │                                                                         │
//! │  POST .../clear ────────────► clear_products() ──────► products = {}    │
//! │                                                                         │
//! │  GET  /warehouse/{id} ──────► warehouse() / products() (clones)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - IDs start at 1, increase by one per creation, and are never reused
//! - Every stored quantity is finite and `>= 0`
//! - Failed operations change nothing
//! - Readers get clones, never references into the registry
//!
//! The registry itself is not synchronized. The web layer wraps it in a
//! single `Mutex`, which is enough because every operation is a short,
//! non-blocking map update.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{ProductMap, Warehouse, WarehouseId};
use crate::validation::is_valid_quantity;

/// In-memory store of warehouses.
///
/// `BTreeMap` keeps warehouses ordered by ID, which is also creation order
/// because IDs only ever grow.
#[derive(Debug, Clone)]
pub struct WarehouseRegistry {
    warehouses: BTreeMap<WarehouseId, Warehouse>,
    next_id: u64,
}

impl WarehouseRegistry {
    /// Creates an empty registry. The first warehouse will get ID 1.
    pub fn new() -> Self {
        WarehouseRegistry {
            warehouses: BTreeMap::new(),
            next_id: 1,
        }
    }

    // =========================================================================
    // Warehouses
    // =========================================================================

    /// Creates a warehouse and returns its freshly assigned ID.
    ///
    /// Always succeeds. Name validation is the caller's job.
    pub fn create_warehouse(&mut self, name: impl Into<String>) -> WarehouseId {
        let id = WarehouseId::new(self.next_id);
        self.warehouses.insert(id, Warehouse::new(name));
        self.next_id += 1;
        id
    }

    /// Returns a copy of the warehouse, or `None` if the ID is unknown.
    pub fn warehouse(&self, id: WarehouseId) -> Option<Warehouse> {
        self.warehouses.get(&id).cloned()
    }

    /// Returns copies of all warehouses in ID order.
    pub fn warehouses(&self) -> Vec<(WarehouseId, Warehouse)> {
        self.warehouses
            .iter()
            .map(|(id, warehouse)| (*id, warehouse.clone()))
            .collect()
    }

    /// Renames a warehouse.
    pub fn rename_warehouse(&mut self, id: WarehouseId, new_name: impl Into<String>) -> CoreResult<()> {
        let warehouse = self.get_mut(id)?;
        warehouse.name = new_name.into();
        Ok(())
    }

    /// Deletes a warehouse and everything in it.
    ///
    /// ## Returns
    /// The removed warehouse, so callers can still report its name.
    pub fn delete_warehouse(&mut self, id: WarehouseId) -> CoreResult<Warehouse> {
        self.warehouses
            .remove(&id)
            .ok_or(CoreError::WarehouseNotFound(id))
    }

    /// Checks if a warehouse with this ID currently exists.
    pub fn contains(&self, id: WarehouseId) -> bool {
        self.warehouses.contains_key(&id)
    }

    /// Number of warehouses.
    pub fn len(&self) -> usize {
        self.warehouses.len()
    }

    /// Checks if there are no warehouses.
    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty()
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Adds stock of a product.
    ///
    /// ## Behavior
    /// - Product already present: quantity is **added** to the existing one
    /// - Product not present: inserted with `qty`
    /// - `qty == 0` is accepted
    ///
    /// ## Errors
    /// - `WarehouseNotFound` if the ID is unknown
    /// - `InvalidQuantity` if `qty` is negative or not finite, or if the
    ///   accumulated total would overflow to infinity
    pub fn add_product(&mut self, id: WarehouseId, product: &str, qty: f64) -> CoreResult<()> {
        let warehouse = self.get_mut(id)?;
        check_quantity(qty)?;

        let total = warehouse.products.get(product).copied().unwrap_or(0.0) + qty;
        check_quantity(total)?;

        warehouse.products.insert(product.to_string(), total);
        Ok(())
    }

    /// Returns a copy of the warehouse's products, or `None` if the ID is
    /// unknown.
    pub fn products(&self, id: WarehouseId) -> Option<ProductMap> {
        self.warehouses
            .get(&id)
            .map(|warehouse| warehouse.products.clone())
    }

    /// Removes a product from a warehouse entirely.
    ///
    /// ## Errors
    /// - `WarehouseNotFound` if the ID is unknown
    /// - `ProductNotFound` if the warehouse has no such product
    pub fn remove_product(&mut self, id: WarehouseId, product: &str) -> CoreResult<()> {
        let warehouse = self.get_mut(id)?;

        match warehouse.products.remove(product) {
            Some(_) => Ok(()),
            None => Err(product_not_found(id, product)),
        }
    }

    /// Overwrites the quantity of an existing product.
    ///
    /// Unlike [`add_product`](Self::add_product) this never creates a product.
    ///
    /// ## Errors
    /// - `WarehouseNotFound` if the ID is unknown
    /// - `InvalidQuantity` if `new_qty` is negative or not finite
    /// - `ProductNotFound` if the warehouse has no such product
    pub fn update_product_quantity(
        &mut self,
        id: WarehouseId,
        product: &str,
        new_qty: f64,
    ) -> CoreResult<()> {
        let warehouse = self.get_mut(id)?;
        check_quantity(new_qty)?;

        match warehouse.products.get_mut(product) {
            Some(qty) => {
                *qty = new_qty;
                Ok(())
            }
            None => Err(product_not_found(id, product)),
        }
    }

    /// Removes every product from a warehouse.
    pub fn clear_products(&mut self, id: WarehouseId) -> CoreResult<()> {
        let warehouse = self.get_mut(id)?;
        warehouse.products = ProductMap::new();
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn get_mut(&mut self, id: WarehouseId) -> CoreResult<&mut Warehouse> {
        self.warehouses
            .get_mut(&id)
            .ok_or(CoreError::WarehouseNotFound(id))
    }
}

impl Default for WarehouseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn check_quantity(qty: f64) -> CoreResult<()> {
    if is_valid_quantity(qty) {
        Ok(())
    } else {
        Err(CoreError::InvalidQuantity(qty))
    }
}

fn product_not_found(id: WarehouseId, product: &str) -> CoreError {
    CoreError::ProductNotFound {
        warehouse: id,
        product: product.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
