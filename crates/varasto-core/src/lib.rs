//! # varasto-core: Pure Business Logic for Varasto
//!
//! This crate is the **heart** of Varasto. It contains the stock and
//! warehouse bookkeeping as plain data structures with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Varasto Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser (HTML forms)                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    varasto-web (axum routes)                    │   │
//! │  │    create_warehouse, add_product, update_product, etc.         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ varasto-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   stock   │  │ registry  │  │   types   │  │ validation│  │   │
//! │  │   │   Stock   │  │ Warehouse │  │ Warehouse │  │  names    │  │   │
//! │  │   │ (clamped) │  │ Registry  │  │    Id     │  │ quantities│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO GLOBAL STATE                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stock`] - `Stock`, a single quantity clamped into `[0, capacity]`
//! - [`registry`] - `WarehouseRegistry`, the ID-keyed warehouse collection
//! - [`types`] - Domain types (WarehouseId, Warehouse, ProductMap)
//! - [`error`] - Domain error types
//! - [`validation`] - Parsing and validation of untrusted input
//!
//! ## Example Usage
//!
//! ```rust
//! use varasto_core::{Stock, WarehouseRegistry};
//!
//! let mut juice = Stock::new(10.0);
//! juice.add(8.0);
//! assert_eq!(juice.remaining_capacity(), 2.0);
//!
//! let mut registry = WarehouseRegistry::new();
//! let id = registry.create_warehouse("Main");
//! registry.add_product(id, "Apple", 10.0).unwrap();
//! registry.add_product(id, "Apple", 5.0).unwrap();
//! assert_eq!(registry.products(id).unwrap()["Apple"], 15.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod registry;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use registry::WarehouseRegistry;
pub use stock::Stock;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a warehouse or product name, in characters.
///
/// ## Business Reason
/// Names end up in page titles and URL paths; anything longer is almost
/// certainly a paste accident.
pub const MAX_NAME_LENGTH: usize = 200;
