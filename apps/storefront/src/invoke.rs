//! # Command Routing
//!
//! Maps one JSON request line onto one command and wraps the outcome.
//!
//! ## Wire Shape
//! ```text
//! request:  {"cmd":"update_cart_item","productId":"3","quantity":2}
//! success:  {"ok":true,"data":{...}}
//! failure:  {"ok":false,"error":{"code":"NOT_FOUND","message":"..."}}
//! ```
//!
//! Command names are snake_case, argument names camelCase.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_core::checkout::CheckoutRequest;
use storefront_core::{PaymentMethod, ProfileUpdate, ShippingAddress};

use crate::commands;
use crate::error::ApiError;
use crate::state::Session;

/// A parsed command request.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Invocation {
    ListProducts {
        #[serde(default)]
        query: String,
        category: Option<String>,
    },
    GetProduct {
        id: String,
    },
    SimilarProducts {
        id: String,
    },
    ListCategories,
    GetCart,
    AddToCart {
        product_id: String,
        quantity: Option<i64>,
    },
    UpdateCartItem {
        product_id: String,
        quantity: i64,
    },
    RemoveFromCart {
        product_id: String,
    },
    ClearCart,
    CheckoutSummary,
    PlaceOrder {
        address: ShippingAddress,
        #[serde(default)]
        payment_method: PaymentMethod,
    },
    ListOrders,
    GetOrder {
        id: String,
    },
    GetProfile,
    UpdateProfile {
        profile: ProfileUpdate,
    },
    GetConfig,
}

/// One reply line.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Ok { ok: bool, data: Value },
    Err { ok: bool, error: ApiError },
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        matches!(self, Reply::Ok { .. })
    }
}

impl From<Result<Value, ApiError>> for Reply {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Reply::Ok { ok: true, data },
            Err(error) => Reply::Err { ok: false, error },
        }
    }
}

/// Parses and runs one request line.
pub fn handle_line(session: &Session, line: &str) -> Reply {
    let result = serde_json::from_str::<Invocation>(line)
        .map_err(ApiError::from)
        .and_then(|invocation| dispatch(session, invocation));
    Reply::from(result)
}

/// Runs a parsed command against the session.
pub fn dispatch(session: &Session, invocation: Invocation) -> Result<Value, ApiError> {
    use commands::{cart, checkout, config, order, product, profile};

    let value = match invocation {
        Invocation::ListProducts { query, category } => {
            to_value(product::list_products(&session.catalog, &query, category.as_deref())?)?
        }
        Invocation::GetProduct { id } => to_value(product::get_product(&session.catalog, &id)?)?,
        Invocation::SimilarProducts { id } => {
            to_value(product::similar_products(&session.catalog, &id))?
        }
        Invocation::ListCategories => to_value(product::list_categories(&session.catalog))?,
        Invocation::GetCart => to_value(cart::get_cart(&session.cart))?,
        Invocation::AddToCart {
            product_id,
            quantity,
        } => to_value(cart::add_to_cart(
            &session.catalog,
            &session.cart,
            &product_id,
            quantity,
        )?)?,
        Invocation::UpdateCartItem {
            product_id,
            quantity,
        } => to_value(cart::update_cart_item(&session.cart, &product_id, quantity))?,
        Invocation::RemoveFromCart { product_id } => {
            to_value(cart::remove_from_cart(&session.cart, &product_id))?
        }
        Invocation::ClearCart => to_value(cart::clear_cart(&session.cart))?,
        Invocation::CheckoutSummary => {
            to_value(checkout::checkout_summary(&session.cart, &session.config))?
        }
        Invocation::PlaceOrder {
            address,
            payment_method,
        } => to_value(checkout::place_order(
            &session.cart,
            &session.orders,
            &session.config,
            CheckoutRequest {
                address,
                payment_method,
            },
        )?)?,
        Invocation::ListOrders => to_value(order::list_orders(&session.orders))?,
        Invocation::GetOrder { id } => to_value(order::get_order(&session.orders, &id)?)?,
        Invocation::GetProfile => to_value(profile::get_profile(&session.profile))?,
        Invocation::UpdateProfile { profile: update } => {
            to_value(profile::update_profile(&session.profile, update)?)?
        }
        Invocation::GetConfig => to_value(config::get_config(&session.config))?,
    };

    Ok(value)
}

fn to_value<T: Serialize>(data: T) -> Result<Value, ApiError> {
    serde_json::to_value(data).map_err(|e| ApiError::invalid_request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(session: &Session, request: Value) -> Value {
        serde_json::to_value(handle_line(session, &request.to_string())).unwrap()
    }

    #[test]
    fn test_cart_scenario_over_json() {
        let session = Session::default();

        let reply = call(&session, json!({"cmd": "add_to_cart", "productId": "1", "quantity": 2}));
        assert_eq!(reply["ok"], true);
        assert_eq!(reply["data"]["totals"]["itemCount"], 2);
        assert_eq!(reply["data"]["totals"]["totalPrice"], 2_500_000);
        assert_eq!(reply["data"]["items"][0]["productId"], "1");

        let reply = call(&session, json!({"cmd": "update_cart_item", "productId": "1", "quantity": 0}));
        assert_eq!(reply["data"]["items"], json!([]));
    }

    #[test]
    fn test_checkout_over_json() {
        let session = Session::default();
        call(&session, json!({"cmd": "add_to_cart", "productId": "8"}));

        let reply = call(
            &session,
            json!({
                "cmd": "place_order",
                "address": {
                    "fullName": "Ali Ahmadi",
                    "phone": "09121234567",
                    "province": "Tehran",
                    "city": "Tehran",
                    "street": "Valiasr St",
                    "postalCode": "1234567890"
                },
                "paymentMethod": "cash_on_delivery"
            }),
        );

        assert_eq!(reply["ok"], true, "{reply}");
        assert_eq!(reply["data"]["id"], "ORD-004");
        assert_eq!(reply["data"]["total"], 230_000);
        assert_eq!(reply["data"]["status"], "pending");

        let reply = call(&session, json!({"cmd": "get_cart"}));
        assert_eq!(reply["data"]["totals"]["itemCount"], 0);
    }

    #[test]
    fn test_errors_over_json() {
        let session = Session::default();

        let reply = call(&session, json!({"cmd": "get_product", "id": "99"}));
        assert_eq!(reply["ok"], false);
        assert_eq!(reply["error"]["code"], "NOT_FOUND");

        let reply = call(&session, json!({"cmd": "fly_to_moon"}));
        assert_eq!(reply["error"]["code"], "INVALID_REQUEST");

        let reply = handle_line(&session, "not json");
        assert!(!reply.is_ok());
    }

    #[test]
    fn test_update_profile_over_json() {
        let session = Session::default();

        let reply = call(
            &session,
            json!({
                "cmd": "update_profile",
                "profile": {
                    "name": "Ali",
                    "email": "ali@example.com",
                    "phone": "0912",
                    "address": "Tehran"
                }
            }),
        );
        assert_eq!(reply["ok"], true, "{reply}");
        assert_eq!(reply["data"]["name"], "Ali");
        assert_eq!(reply["data"]["joinDate"], "2023-09-06");

        // a client echoing the read-only join date back cannot change it
        let reply = call(
            &session,
            json!({
                "cmd": "update_profile",
                "profile": {
                    "name": "Ali Ahmadi",
                    "email": "ali@example.com",
                    "phone": "0912",
                    "address": "Tehran",
                    "joinDate": "2000-01-01"
                }
            }),
        );
        assert_eq!(reply["data"]["joinDate"], "2023-09-06");

        let reply = call(&session, json!({"cmd": "get_profile"}));
        assert_eq!(reply["data"]["name"], "Ali Ahmadi");
    }

    #[test]
    fn test_listing_over_json() {
        let session = Session::default();

        let reply = call(&session, json!({"cmd": "list_products", "category": "Bags"}));
        assert_eq!(reply["data"].as_array().map(Vec::len), Some(2));

        let reply = call(&session, json!({"cmd": "list_categories"}));
        assert_eq!(reply["data"][0], "Bags");

        let reply = call(&session, json!({"cmd": "get_config"}));
        assert_eq!(reply["data"]["shippingCost"], 50_000);
    }
}
