//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                 │              │
//! │       │           add_to_cart                            │              │
//! │       │           update_cart_item                       │              │
//! │       │           remove_from_cart                       │              │
//! │       │                │                                 │              │
//! │       └──── clear_cart ┴──────── (place_order clears) ◄──┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the full cart so the drawer and the header badge
//! can re-render from one reply.

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartResponse, CartState, CatalogState};

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(CartResponse::from_cart)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases
/// - Product not in cart: appended as a new line
/// - `quantity` defaults to 1; zero or negative is treated as 1
/// - Out-of-stock products are accepted
///
/// ## Errors
/// Only an unknown product id fails; the cart itself never does.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let product = catalog.inner().require(product_id)?;

    Ok(cart.with_cart_mut(|c| {
        c.add_item(product, quantity);
        CartResponse::from_cart(c)
    }))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0 or less: removes the line
/// - Product not in cart: no change
pub fn update_cart_item(cart: &CartState, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        if !c.set_quantity(product_id, quantity) {
            debug!(product_id = %product_id, "update_cart_item changed nothing");
        }
        CartResponse::from_cart(c)
    })
}

/// Removes a line from the cart. Unknown ids are ignored.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(product_id);
        CartResponse::from_cart(c)
    })
}

/// Clears all lines from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from_cart(c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_add_to_cart_uses_catalog_price() {
        let catalog = CatalogState::default();
        let cart = CartState::new();

        let resp = add_to_cart(&catalog, &cart, "1", Some(3)).unwrap();
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].name, "Leather Handbag");
        assert_eq!(resp.totals.item_count, 3);
        assert_eq!(resp.totals.total_price.amount(), 3_750_000);
    }

    #[test]
    fn test_add_to_cart_defaults_and_clamps_quantity() {
        let catalog = CatalogState::default();
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, "7", None).unwrap();
        let resp = add_to_cart(&catalog, &cart, "7", Some(0)).unwrap();
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].quantity, 2);
    }

    #[test]
    fn test_add_out_of_stock_product() {
        let catalog = CatalogState::default();
        let cart = CartState::new();

        let resp = add_to_cart(&catalog, &cart, "4", None).unwrap();
        assert_eq!(resp.totals.item_count, 1);
    }

    #[test]
    fn test_add_unknown_product() {
        let catalog = CatalogState::default();
        let cart = CartState::new();

        let err = add_to_cart(&catalog, &cart, "404", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_drawer_flow() {
        let catalog = CatalogState::default();
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, "3", Some(1)).unwrap();
        add_to_cart(&catalog, &cart, "8", Some(2)).unwrap();

        // "+" then "-" twice on the headphones line
        let resp = update_cart_item(&cart, "3", 2);
        assert_eq!(resp.totals.item_count, 4);
        update_cart_item(&cart, "3", 1);
        let resp = update_cart_item(&cart, "3", 0);
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].product_id, "8");

        let resp = remove_from_cart(&cart, "missing");
        assert_eq!(resp.totals.item_count, 2);

        let resp = clear_cart(&cart);
        assert!(resp.items.is_empty());
        assert!(resp.totals.total_price.is_zero());
    }
}
