//! # Checkout Commands
//!
//! ## Order Placement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  invoke place_order { address, paymentMethod }                          │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  lock cart ─► lock orders                                      │    │
//! │  │  1. next order id (ORD-NNN)                                    │    │
//! │  │  2. storefront_core::checkout::place_order (validates)         │    │
//! │  │  3. record order                                               │    │
//! │  │  4. clear cart                                                 │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Order (status: pending) ─► views navigate to order history            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both locks are held for the whole placement, so an add racing with a
//! checkout lands either in the order or in the fresh cart, never nowhere.

use chrono::Utc;
use storefront_core::checkout::{self, CheckoutRequest};
use storefront_core::{CheckoutSummary, Order};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartState, ConfigState, OrderState};

/// Subtotal, shipping and total for the checkout sidebar.
pub fn checkout_summary(cart: &CartState, config: &ConfigState) -> CheckoutSummary {
    debug!("checkout_summary command");
    cart.with_cart(|c| CheckoutSummary::for_cart(c, config.shipping_cost))
}

/// Places an order for everything in the cart and clears the cart.
///
/// ## Errors
/// - `EMPTY_CART` when there is nothing to order
/// - `VALIDATION_ERROR` when an address field is missing
///
/// On error the cart is left as it was.
pub fn place_order(
    cart: &CartState,
    orders: &OrderState,
    config: &ConfigState,
    request: CheckoutRequest,
) -> Result<Order, ApiError> {
    debug!(payment_method = ?request.payment_method, "place_order command");

    let order = cart.with_cart_mut(|c| {
        orders.with_history_mut(|history| {
            let order = checkout::place_order(
                c,
                request,
                history.next_order_id(),
                config.shipping_cost,
                Utc::now(),
            )?;

            history.record(order.clone());
            c.clear();
            Ok::<Order, ApiError>(order)
        })
    })?;

    info!(
        order_id = %order.id,
        items = order.item_count(),
        total = %config.format_price(order.total),
        "order placed"
    );
    Ok(order)
}
