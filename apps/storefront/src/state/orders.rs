//! # Order State
//!
//! The session's order history behind `Arc<Mutex<T>>`.
//!
//! ## Lock Order
//! `place_order` holds the cart lock while it records the order. Anything
//! that needs both locks must take the cart first.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_core::OrderHistory;

#[derive(Debug, Clone, Default)]
pub struct OrderState {
    history: Arc<Mutex<OrderHistory>>,
}

impl OrderState {
    pub fn new(history: OrderHistory) -> Self {
        OrderState {
            history: Arc::new(Mutex::new(history)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, OrderHistory> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_history<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderHistory) -> R,
    {
        f(&self.lock())
    }

    pub fn with_history_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderHistory) -> R,
    {
        f(&mut self.lock())
    }
}
