//! # Stock Module
//!
//! Provides the `Stock` type: one quantity bounded by a fixed capacity.
//!
//! ## Clamping, Not Rejecting
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EVERY INPUT IS ACCEPTED                                                │
//! │                                                                         │
//! │  Stock::new(-5.0)            → capacity 0                               │
//! │  Stock::with_balance(10, 15) → balance 10   (clamped to capacity)       │
//! │  add(-3.0)                   → nothing happens                          │
//! │  add(1000.0)                 → balance = capacity, excess discarded     │
//! │  take(-2.0)                  → returns 0, nothing happens               │
//! │  take(1000.0)                → returns whatever was there, balance 0    │
//! │                                                                         │
//! │  0 ≤ balance ≤ capacity holds after every call.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers that would rather reject bad input must validate it before
//! calling in; changing this type to return errors would change observable
//! behavior for every existing caller.
//!
//! ## Usage
//! ```rust
//! use varasto_core::stock::Stock;
//!
//! let mut beer = Stock::with_balance(100.0, 20.2);
//! beer.add(1000.0);
//! assert_eq!(beer.balance(), 100.0);
//!
//! let got = beer.take(1000.0);
//! assert_eq!(got, 100.0);
//! assert_eq!(beer.balance(), 0.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Stock Type
// =============================================================================

/// A single stored quantity with a fixed capacity.
///
/// Fields are private so the `0 ≤ balance ≤ capacity` invariant cannot be
/// broken from outside. NaN is treated like any other non-positive input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    capacity: f64,
    balance: f64,
}

impl Stock {
    /// Creates an empty stock.
    ///
    /// A negative capacity becomes 0.
    pub fn new(capacity: f64) -> Self {
        Self::with_balance(capacity, 0.0)
    }

    /// Creates a stock with an initial balance.
    ///
    /// ## Clamping
    /// - `capacity < 0` → 0
    /// - `initial < 0` → 0
    /// - `initial > capacity` → capacity
    pub fn with_balance(capacity: f64, initial: f64) -> Self {
        // f64::max ignores a NaN operand
        let capacity = capacity.max(0.0);
        let balance = if initial > 0.0 {
            initial.min(capacity)
        } else {
            0.0
        };

        Stock { capacity, balance }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Returns the current balance.
    #[inline]
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Returns how much more fits in (`capacity - balance`).
    #[inline]
    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.balance
    }

    /// Checks if the balance is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.balance == 0.0
    }

    /// Checks if nothing more fits in.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.balance >= self.capacity
    }

    /// Adds to the balance.
    ///
    /// Non-positive amounts are ignored. Anything beyond capacity is
    /// discarded silently.
    pub fn add(&mut self, amount: f64) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }

        self.balance = (self.balance + amount).min(self.capacity);
    }

    /// Takes up to `amount` out of the stock and returns what was taken.
    ///
    /// ## Returns
    /// - `0.0` for non-positive amounts (balance untouched)
    /// - `min(balance, amount)` otherwise
    pub fn take(&mut self, amount: f64) -> f64 {
        if amount.is_nan() || amount <= 0.0 {
            return 0.0;
        }

        let taken = amount.min(self.balance);
        self.balance -= taken;
        taken
    }
}

impl Default for Stock {
    fn default() -> Self {
        Stock::new(0.0)
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "balance = {}, room for {}",
            self.balance,
            self.remaining_capacity()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
