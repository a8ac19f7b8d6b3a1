//! # Checkout
//!
//! Turns the cart into an order. Nothing is charged and nothing leaves the
//! process; the result is appended to the in-memory order history.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart drawer "Checkout"                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CheckoutSummary::for_cart() ──► subtotal + shipping = total           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Address form + payment method                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  place_order() ← THIS MODULE                                           │
//! │       ├── cart empty?      → CoreError::EmptyCart                      │
//! │       ├── address invalid? → CoreError::Validation                     │
//! │       └── OK → Order (status Pending), caller clears the cart          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Order, OrderLine, OrderStatus, PaymentMethod, ShippingAddress};
use crate::validation::validate_shipping_address;

/// Totals shown in the checkout sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutSummary {
    pub item_count: i64,
    pub subtotal: Money,
    /// Flat rate; zero when the cart is empty.
    pub shipping: Money,
    pub total: Money,
}

impl CheckoutSummary {
    /// Computes the summary for the current cart.
    pub fn for_cart(cart: &Cart, shipping_cost: Money) -> Self {
        let subtotal = cart.total_price();
        let shipping = if cart.is_empty() {
            Money::zero()
        } else {
            shipping_cost
        };

        CheckoutSummary {
            item_count: cart.total_item_count(),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

/// Everything the checkout form submits.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutRequest {
    pub address: ShippingAddress,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// Builds an order from the cart.
///
/// The cart itself is left untouched so the caller can clear it only once
/// the order has been recorded.
pub fn place_order(
    cart: &Cart,
    request: CheckoutRequest,
    order_id: String,
    shipping_cost: Money,
    placed_at: DateTime<Utc>,
) -> CoreResult<Order> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    validate_shipping_address(&request.address)?;

    let summary = CheckoutSummary::for_cart(cart, shipping_cost);

    Ok(Order {
        id: order_id,
        placed_at,
        status: OrderStatus::Pending,
        lines: cart.items().iter().map(OrderLine::from).collect(),
        subtotal: summary.subtotal,
        shipping: summary.shipping,
        total: summary.total,
        payment_method: Some(request.payment_method),
        shipping_address: Some(request.address),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;
    use crate::DEFAULT_SHIPPING_COST;

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            address: ShippingAddress {
                full_name: "Ali Ahmadi".to_string(),
                phone: "09121234567".to_string(),
                province: "Tehran".to_string(),
                city: "Tehran".to_string(),
                street: "Valiasr St, No. 123".to_string(),
                postal_code: "1234567890".to_string(),
            },
            payment_method: PaymentMethod::CashOnDelivery,
        }
    }

    fn cart_with_bag_and_mug() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&Product::new("1", "Leather Handbag", 1_250_000), 2);
        cart.add_item(&Product::new("7", "Ceramic Mug", 320_000), 1);
        cart
    }

    #[test]
    fn test_summary_adds_flat_shipping() {
        let summary = CheckoutSummary::for_cart(&cart_with_bag_and_mug(), DEFAULT_SHIPPING_COST);

        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal.amount(), 2_820_000);
        assert_eq!(summary.shipping.amount(), 50_000);
        assert_eq!(summary.total.amount(), 2_870_000);
    }

    #[test]
    fn test_summary_for_empty_cart_is_zero() {
        let summary = CheckoutSummary::for_cart(&Cart::new(), DEFAULT_SHIPPING_COST);
        assert!(summary.total.is_zero());
        assert_eq!(summary.item_count, 0);
    }

    #[test]
    fn test_place_order_snapshots_cart() {
        let cart = cart_with_bag_and_mug();
        let order = place_order(
            &cart,
            request(),
            "ORD-004".to_string(),
            DEFAULT_SHIPPING_COST,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(order.id, "ORD-004");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines[0].line_total.amount(), 2_500_000);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.total.amount(), 2_870_000);
        assert_eq!(order.payment_method, Some(PaymentMethod::CashOnDelivery));

        // the cart is the caller's to clear
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_place_order_rejects_empty_cart() {
        let result = place_order(
            &Cart::new(),
            request(),
            "ORD-004".to_string(),
            DEFAULT_SHIPPING_COST,
            Utc::now(),
        );
        assert!(matches!(result, Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_place_order_rejects_incomplete_address() {
        let mut req = request();
        req.address.city = "  ".to_string();

        let result = place_order(
            &cart_with_bag_and_mug(),
            req,
            "ORD-004".to_string(),
            DEFAULT_SHIPPING_COST,
            Utc::now(),
        );
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_request_defaults_to_online_payment() {
        let json = r#"{"address":{"fullName":"A","phone":"1","province":"P","city":"C","street":"S","postalCode":"1"}}"#;
        let req: CheckoutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.payment_method, PaymentMethod::Online);
    }
}
