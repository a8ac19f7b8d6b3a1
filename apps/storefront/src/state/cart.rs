//! # Cart State
//!
//! The session's single shared cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several views (listing, detail, drawer, checkout) hold the same cart
//! 2. Only one operation may modify the cart at a time
//! 3. Commands can arrive from concurrent tasks
//!
//! Every command runs under one lock acquisition, so concurrent callers see
//! some total order of whole operations: no lost updates, no half-applied
//! quantity changes, never two lines for one product.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View Action              Command                 Cart Change           │
//! │  ───────────              ───────                 ───────────           │
//! │  Click "Add" ────────────► add_to_cart() ───────► merge or push line   │
//! │  +/- buttons ────────────► update_cart_item() ──► line.qty = n         │
//! │  Trash icon ─────────────► remove_from_cart() ──► drop line            │
//! │  "Clear" ────────────────► clear_cart() ────────► lines.clear()        │
//! │  Badge / drawer ─────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex lock exclusively.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use storefront_core::{Cart, CartLine, Money};

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products
    pub line_count: usize,
    /// Sum of quantities (the badge number)
    pub item_count: i64,
    pub total_price: Money,
}

impl CartTotals {
    /// Reads the totals off a cart; pass as `with_cart(CartTotals::from_cart)`.
    pub fn from_cart(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            item_count: cart.total_item_count(),
            total_price: cart.total_price(),
        }
    }
}

/// Cart contents plus totals, as returned by every cart command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn from_cart(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from_cart(cart),
        }
    }
}

/// Session-managed cart state.
///
/// Cloning a `CartState` yields another handle to the same cart.
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them write.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recovers the guard from a poisoned lock: every cart operation leaves
    /// the cart valid, so a panic elsewhere cannot corrupt it.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use storefront_lib::state::{CartState, CartTotals};
    ///
    /// let cart_state = CartState::new();
    /// let totals = cart_state.with_cart(CartTotals::from_cart);
    /// assert_eq!(totals.item_count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }
}
