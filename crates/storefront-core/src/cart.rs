//! # Cart
//!
//! The shopping cart state container and its derived totals.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Operations                                 │
//! │                                                                         │
//! │  View Action              Operation               State Change          │
//! │  ───────────              ─────────               ────────────          │
//! │                                                                         │
//! │  "Add to cart" ─────────► add_item() ───────────► merge or push line    │
//! │                                                                         │
//! │  +/- buttons ───────────► set_quantity() ───────► line.qty = n          │
//! │                                                   (n <= 0 removes)      │
//! │                                                                         │
//! │  Trash icon ────────────► remove_item() ────────► lines.retain(..)      │
//! │                                                                         │
//! │  "Clear" / checkout ────► clear() ──────────────► lines.clear()         │
//! │                                                                         │
//! │  Badge / drawer ────────► items(), total_item_count(), total_price()    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input Policy
//! No operation fails. Unknown product ids are no-ops, and `add_item`
//! clamps a non-positive quantity to 1: a view that sends `0` still meant
//! "add this product". `set_quantity` treats a non-positive quantity as a
//! removal instead, matching the "minus" button on a quantity of one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// Smallest quantity a line can hold.
const MIN_LINE_QUANTITY: i64 = 1;

// =============================================================================
// Cart Line
// =============================================================================

/// A product and its quantity in the cart.
///
/// Display fields are frozen when the product is first added, so the drawer
/// shows a stable price even if the catalog entry changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: String,

    /// Product name at time of adding (frozen)
    pub name: String,

    pub image: String,

    /// Unit price at time of adding (frozen)
    pub unit_price: Money,

    /// Always >= 1
    pub quantity: i64,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// unit price × quantity
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product merges)
/// - Lines keep the order in which their product was first added
/// - Every line has `quantity >= 1`
///
/// Lines are private; callers read them through [`Cart::items`] and change
/// them only through the operations below.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart or increases its quantity if present.
    ///
    /// A non-positive `quantity` is clamped to 1. Stock is not checked.
    ///
    /// ```rust
    /// use storefront_core::{Cart, Product};
    ///
    /// let mug = Product::new("7", "Ceramic Mug", 320_000);
    /// let mut cart = Cart::new();
    /// cart.add_item(&mug, 1);
    /// cart.add_item(&mug, 1);
    ///
    /// assert_eq!(cart.items().len(), 1);
    /// assert_eq!(cart.items()[0].quantity, 2);
    /// ```
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        let quantity = quantity.max(MIN_LINE_QUANTITY);

        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.lines.push(CartLine::from_product(product, quantity));
    }

    /// Removes the line for `product_id`.
    ///
    /// Returns `true` if a line was removed; an absent id is a no-op.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != initial_len
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove_item`]
    /// - product not in cart: no-op
    ///
    /// Returns `true` if the cart changed.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity < MIN_LINE_QUANTITY {
            return self.remove_item(product_id);
        }

        match self.line_mut(product_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in first-add order.
    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up the line for a product.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }

    /// Sum of all line quantities; 0 for an empty cart.
    pub fn total_item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of `quantity × unit_price` over all lines; 0 for an empty cart.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
