//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate holds every piece of storefront logic that can be expressed
//! without I/O: the shopping cart and its totals, the product catalog,
//! checkout arithmetic, order history and profile editing.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend (views)                         │   │
//! │  │   Listing ──► Detail ──► Cart Drawer ──► Checkout ──► Orders    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    add_to_cart, update_cart_item, place_order, etc.             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │   cart   │ │ catalog  │ │ checkout │ │ order / profile  │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────────┐                   │   │
//! │  │   │  money   │ │  types   │ │  validation  │                   │   │
//! │  │   └──────────┘ └──────────┘ └──────────────┘                   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO GLOBALS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart state container and its derived totals
//! - [`catalog`] - Read-only product catalog (search, categories, similar)
//! - [`checkout`] - Checkout summary and order placement
//! - [`order`] - Order history
//! - [`profile`] - User profile with edit-draft semantics
//! - [`types`] - Domain types (Product, Order, PaymentMethod, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Catalog};
//!
//! let catalog = Catalog::mock();
//! let mut cart = Cart::new();
//!
//! let bag = catalog.get("1").unwrap();
//! cart.add_item(bag, 3);
//!
//! // 1,250,000 × 3, computed with integers only
//! assert_eq!(cart.total_price().amount(), 3_750_000);
//! assert_eq!(cart.total_item_count(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod order;
pub mod profile;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use checkout::CheckoutSummary;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::OrderHistory;
pub use profile::ProfileEditor;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping charge applied to every non-empty checkout.
pub const DEFAULT_SHIPPING_COST: Money = Money::from_amount(50_000);

/// Maximum number of similar products suggested on a product page.
pub const MAX_SIMILAR_PRODUCTS: usize = 4;

/// Highest product rating, in tenths of a star (5.0 stars).
pub const MAX_RATING_TENTHS: u8 = 50;
