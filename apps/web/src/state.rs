//! # Registry State
//!
//! Shares one `WarehouseRegistry` between all request handlers.
//!
//! ## Thread Safety
//! The registry is wrapped in `Arc<Mutex<T>>` because:
//! 1. axum runs handlers concurrently on a multi-threaded runtime
//! 2. Two requests touching the same warehouse must not lose updates
//! 3. Every operation is a short map update, so one global lock is enough
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Handler                 RegistryState              Registry            │
//! │  ───────                 ─────────────              ────────            │
//! │                                                                         │
//! │  add_product ──────────► with_registry_mut() ─────► lock → mutate      │
//! │                                                                         │
//! │  view_warehouse ───────► with_registry() ─────────► lock → clone out   │
//! │                                                                         │
//! │  NOTE: Reads also take the lock, so a copied product list can never    │
//! │        observe half of a write.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use varasto_core::WarehouseRegistry;

/// Handle to the process-wide registry.
///
/// Cloning the handle is cheap and every clone points at the same registry.
#[derive(Debug, Clone)]
pub struct RegistryState {
    registry: Arc<Mutex<WarehouseRegistry>>,
}

impl RegistryState {
    /// Creates state around an empty registry.
    pub fn new() -> Self {
        Self::from_registry(WarehouseRegistry::new())
    }

    /// Creates state around an existing registry (used by tests to seed data).
    pub fn from_registry(registry: WarehouseRegistry) -> Self {
        RegistryState {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    /// Executes a function with read access to the registry.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_registry(|registry| registry.len());
    /// ```
    pub fn with_registry<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&WarehouseRegistry) -> R,
    {
        // A panic inside a closure cannot leave a half-applied operation
        // behind, so the data is still consistent after poisoning.
        let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        f(&registry)
    }

    /// Executes a function with write access to the registry.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_registry_mut(|registry| registry.add_product(id, "Apple", 1.0))?;
    /// ```
    pub fn with_registry_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut WarehouseRegistry) -> R,
    {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut registry)
    }
}

impl Default for RegistryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_registry() {
        let state = RegistryState::new();
        let other = state.clone();

        let id = state.with_registry_mut(|registry| registry.create_warehouse("Main"));

        assert_eq!(other.with_registry(|registry| registry.len()), 1);
        assert!(other.with_registry(|registry| registry.contains(id)));
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let state = RegistryState::new();
        let id = state.with_registry_mut(|registry| registry.create_warehouse("Main"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        state
                            .with_registry_mut(|registry| registry.add_product(id, "Apple", 1.0))
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let products = state.with_registry(|registry| registry.products(id)).unwrap();
        assert_eq!(products["Apple"], 800.0);
    }
}
