//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │  OrderStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (ORD-NNN)   │   │  Pending        │       │
//! │  │  name           │   │  placed_at      │   │  Processing     │       │
//! │  │  price          │   │  lines          │   │  Shipped        │       │
//! │  │  original_price │   │  subtotal       │   │  Delivered      │       │
//! │  │  category       │   │  shipping       │   └─────────────────┘       │
//! │  │  in_stock       │   │  total          │                              │
//! │  │  rating_tenths  │   └─────────────────┘   ┌─────────────────┐       │
//! │  └─────────────────┘                         │ PaymentMethod   │       │
//! │                                              │  Online         │       │
//! │  ┌─────────────────┐   ┌─────────────────┐   │  Wallet         │       │
//! │  │ ShippingAddress │   │  UserProfile    │   │  CashOnDelivery │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are owned by the catalog and are read-only to everything else.
//! Carts and orders keep snapshots of the fields they display.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product offered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in the smallest currency unit.
    pub price: Money,

    /// Price before discount; at least `price` when present.
    pub original_price: Option<Money>,

    /// Image URL.
    pub image: String,

    /// Category label used for filtering and "similar products".
    pub category: String,

    pub description: String,

    /// Advisory only: the cart accepts out-of-stock products.
    pub in_stock: bool,

    /// Rating in tenths of a star, 0..=50.
    pub rating_tenths: u8,
}

impl Product {
    /// Creates an in-stock product with the given id, name and price.
    ///
    /// Remaining fields start empty and can be filled with the `with_*`
    /// helpers.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: i64) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price: Money::from_amount(price),
            original_price: None,
            image: String::new(),
            category: String::new(),
            description: String::new(),
            in_stock: true,
            rating_tenths: 0,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_original_price(mut self, original_price: i64) -> Self {
        self.original_price = Some(Money::from_amount(original_price));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating_tenths(mut self, rating_tenths: u8) -> Self {
        self.rating_tenths = rating_tenths;
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Discount badge value, e.g. `Some(20)` for "20% off".
    ///
    /// `None` when there is no original price to compare against.
    pub fn discount_percent(&self) -> Option<u8> {
        self.original_price
            .and_then(|original| self.price.percent_off(original))
    }

    /// Rating as stars (for display only).
    #[inline]
    pub fn rating(&self) -> f32 {
        self.rating_tenths as f32 / 10.0
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, not yet picked up by the warehouse.
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Human-readable label shown in the order list.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer chose to pay at checkout. Nothing is charged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Online card gateway.
    #[default]
    Online,
    /// Store wallet balance.
    Wallet,
    /// Pay the courier on delivery.
    CashOnDelivery,
}

// =============================================================================
// Shipping Address
// =============================================================================

/// Delivery details collected by the checkout form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingAddress {
    pub full_name: String,
    pub phone: String,
    pub province: String,
    pub city: String,
    pub street: String,
    pub postal_code: String,
}

// =============================================================================
// Order
// =============================================================================

/// A line in a placed order.
/// Uses snapshot pattern to freeze product data at time of checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    pub product_id: String,
    /// Product name at time of checkout (frozen).
    pub name: String,
    pub image: String,
    /// Unit price at time of checkout (frozen).
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price × quantity
    pub line_total: Money,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        OrderLine {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            image: line.image.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

impl From<&Product> for OrderLine {
    /// Single-unit line, used when seeding historical orders.
    fn from(product: &Product) -> Self {
        OrderLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity: 1,
            line_total: product.price,
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// Human-readable id, e.g. `ORD-004`.
    pub id: String,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    pub shipping: Money,
    /// subtotal + shipping
    pub total: Money,
    /// `None` for orders imported from the legacy demo data.
    pub payment_method: Option<PaymentMethod>,
    pub shipping_address: Option<ShippingAddress>,
}

impl Order {
    /// Total number of units across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }
}

// =============================================================================
// User Profile
// =============================================================================

/// The signed-in customer's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[ts(as = "String")]
    pub join_date: NaiveDate,
}

/// The editable part of a [`UserProfile`], as submitted by the profile form.
///
/// The join date is read-only and so has no field here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<&UserProfile> for ProfileUpdate {
    fn from(profile: &UserProfile) -> Self {
        ProfileUpdate {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percent() {
        let headphones = Product::new("3", "Wireless Headphones", 2_800_000)
            .with_original_price(3_500_000);
        assert_eq!(headphones.discount_percent(), Some(20));

        let watch = Product::new("2", "Classic Wristwatch", 3_200_000);
        assert_eq!(watch.discount_percent(), None);
    }

    #[test]
    fn test_rating() {
        let p = Product::new("1", "Bag", 1).with_rating_tenths(45);
        assert!((p.rating() - 4.5).abs() < 0.001);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(PaymentMethod::default(), PaymentMethod::Online);
    }

    #[test]
    fn test_enum_serialization() {
        let json = serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap();
        assert_eq!(json, "\"cash_on_delivery\"");

        let status: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(status, OrderStatus::Shipped);
        assert_eq!(status.label(), "Shipped");
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let p = Product::new("5", "Sunglasses", 980_000);
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["originalPrice"], serde_json::Value::Null);
        assert_eq!(value["inStock"], true);
        assert_eq!(value["price"], 980_000);
    }
}
