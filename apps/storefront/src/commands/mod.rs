//! # Commands Module
//!
//! All commands exposed to the views.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Listing, detail, categories, similar products
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── checkout.rs  ◄─── Checkout summary and order placement
//! ├── order.rs     ◄─── Order history
//! ├── profile.rs   ◄─── Profile view and edit
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_products(catalog: &CatalogState, ...)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs both
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, ...)
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod order;
pub mod product;
pub mod profile;
