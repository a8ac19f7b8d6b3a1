//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use storefront_core::{Money, DEFAULT_SHIPPING_COST};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the header
    pub store_name: String,

    /// Label printed after every amount
    pub currency_label: String,

    /// Flat shipping charge for non-empty checkouts
    pub shipping_cost: Money,

    /// Seed the catalog, order history and profile with demo data.
    /// When off, the session starts with an empty catalog and history.
    pub demo_data: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Minimal Shop"
    /// - Currency: Toman
    /// - Shipping: 50,000
    /// - Demo data: on
    fn default() -> Self {
        ConfigState {
            store_name: "Minimal Shop".to_string(),
            currency_label: "Toman".to_string(),
            shipping_cost: DEFAULT_SHIPPING_COST,
            demo_data: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CURRENCY`: Override currency label
    /// - `STOREFRONT_SHIPPING_COST`: Override shipping (whole units, e.g. "75000")
    /// - `STOREFRONT_DEMO_DATA`: "0" or "false" to start empty
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(label) = lookup("STOREFRONT_CURRENCY") {
            config.currency_label = label;
        }

        if let Some(raw) = lookup("STOREFRONT_SHIPPING_COST") {
            match raw.trim().parse::<i64>() {
                Ok(amount) if amount >= 0 => config.shipping_cost = Money::from_amount(amount),
                _ => warn!(value = %raw, "ignoring invalid STOREFRONT_SHIPPING_COST"),
            }
        }

        if let Some(raw) = lookup("STOREFRONT_DEMO_DATA") {
            config.demo_data = !matches!(raw.trim().to_lowercase().as_str(), "0" | "false" | "no");
        }

        config
    }

    /// Formats an amount with the configured currency label.
    ///
    /// ```rust
    /// use storefront_core::Money;
    /// use storefront_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(Money::from_amount(1_250_000)), "1,250,000 Toman");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        amount.format_with(&self.currency_label)
    }
}
