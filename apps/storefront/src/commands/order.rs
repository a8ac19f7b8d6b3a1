//! # Order Commands
//!
//! Order history for the orders view.

use storefront_core::Order;
use tracing::debug;

use crate::error::ApiError;
use crate::state::OrderState;

/// All orders, oldest first.
pub fn list_orders(orders: &OrderState) -> Vec<Order> {
    debug!("list_orders command");
    orders.with_history(|h| h.list().to_vec())
}

/// One order for the expanded order card.
pub fn get_order(orders: &OrderState, id: &str) -> Result<Order, ApiError> {
    debug!(id = %id, "get_order command");
    orders.with_history(|h| h.get(id).cloned().map_err(ApiError::from))
}
