//! # Order History
//!
//! In-memory list of placed orders, seeded with the demo's past orders.

use chrono::{TimeZone, Utc};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Order, OrderLine, OrderStatus};

const ORDER_ID_PREFIX: &str = "ORD-";

/// Orders in the sequence they were placed.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three past orders shown in the demo, built from `catalog`.
    ///
    /// Products missing from the catalog are skipped.
    pub fn mock(catalog: &Catalog) -> Self {
        let seed: [(&str, (i32, u32, u32), OrderStatus, &[&str]); 3] = [
            ("ORD-001", (2024, 12, 5), OrderStatus::Delivered, &["1", "2"]),
            ("ORD-002", (2024, 12, 22), OrderStatus::Shipped, &["3"]),
            ("ORD-003", (2024, 12, 28), OrderStatus::Processing, &["7", "8"]),
        ];

        let orders = seed
            .into_iter()
            .map(|(id, (y, m, d), status, product_ids)| {
                let lines: Vec<OrderLine> = product_ids
                    .iter()
                    .filter_map(|pid| catalog.get(pid))
                    .map(OrderLine::from)
                    .collect();
                let subtotal: Money = lines.iter().map(|l| l.line_total).sum();

                Order {
                    id: id.to_string(),
                    placed_at: Utc
                        .with_ymd_and_hms(y, m, d, 10, 0, 0)
                        .single()
                        .unwrap_or_else(Utc::now),
                    status,
                    lines,
                    subtotal,
                    shipping: Money::zero(),
                    total: subtotal,
                    payment_method: None,
                    shipping_address: None,
                }
            })
            .collect();

        OrderHistory { orders }
    }

    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> CoreResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))
    }

    /// Next sequential id, one past the highest `ORD-NNN` recorded.
    pub fn next_order_id(&self) -> String {
        let next = self
            .orders
            .iter()
            .filter_map(|o| o.id.strip_prefix(ORDER_ID_PREFIX)?.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        format!("{ORDER_ID_PREFIX}{next:03}")
    }

    pub fn record(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_history_totals() {
        let history = OrderHistory::mock(&Catalog::mock());
        let totals: Vec<i64> = history.list().iter().map(|o| o.total.amount()).collect();
        assert_eq!(totals, vec![4_450_000, 2_800_000, 500_000]);
        assert_eq!(history.get("ORD-002").unwrap().status, OrderStatus::Shipped);
    }

    #[test]
    fn test_get_unknown_order() {
        let history = OrderHistory::new();
        assert!(matches!(history.get("ORD-999"), Err(CoreError::OrderNotFound(_))));
    }

    #[test]
    fn test_next_order_id() {
        assert_eq!(OrderHistory::new().next_order_id(), "ORD-001");

        let mut history = OrderHistory::mock(&Catalog::mock());
        assert_eq!(history.next_order_id(), "ORD-004");

        let mut order = history.list()[0].clone();
        order.id = history.next_order_id();
        history.record(order);
        assert_eq!(history.len(), 4);
        assert_eq!(history.next_order_id(), "ORD-005");
    }
}
