//! # Validation Module
//!
//! Input validation for the parts of the storefront that accept free-form
//! input: catalog records, the checkout address form and profile edits.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                 │
//! │  └── `required` attributes, immediate feedback                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command deserialization (serde)                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                   │
//! │  └── Business rules (required fields, price relations, email shape)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is deliberately absent here: it normalizes its input instead
//! of rejecting it.

use crate::error::ValidationError;
use crate::types::{Product, ShippingAddress, UserProfile};
use crate::MAX_RATING_TENTHS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_SEARCH_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Requires a non-blank value of at most `max` characters.
fn require(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a search query and returns it trimmed.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - Maximum 100 characters
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates an email address.
///
/// Only the shape is checked: one `@`, a non-empty local part and a domain
/// containing a dot.
///
/// ```rust
/// use storefront_core::validation::validate_email;
///
/// assert!(validate_email("ali@example.com").is_ok());
/// assert!(validate_email("ali.example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    require("email", email, MAX_NAME_LEN)?;

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@domain.tld".to_string(),
    };

    let (local, domain) = email.trim().split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || domain.contains(char::is_whitespace) {
        return Err(invalid());
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validates a phone number: digits with an optional leading `+`.
///
/// Non-ASCII decimal digits (e.g. Persian numerals) are accepted.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    require("phone", phone, 20)?;

    let phone = phone.trim();
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let has_digit = digits.chars().any(char::is_numeric);
    if !has_digit || !digits.chars().all(|c| c.is_numeric() || c == ' ' || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a catalog product record.
///
/// ## Rules
/// - `id` and `name` are required
/// - `price` must be positive
/// - `original_price`, when present, must be >= `price`
/// - `rating_tenths` must be within 0..=50
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    require("id", &product.id, 64)?;
    require("name", &product.name, MAX_NAME_LEN)?;

    if !product.price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if let Some(original) = product.original_price {
        if original < product.price {
            return Err(ValidationError::OutOfRange {
                field: "original price".to_string(),
                min: product.price.amount(),
                max: i64::MAX,
            });
        }
    }

    if product.rating_tenths > MAX_RATING_TENTHS {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: MAX_RATING_TENTHS as i64,
        });
    }

    Ok(())
}

/// Validates the checkout address form. Every field is required.
pub fn validate_shipping_address(address: &ShippingAddress) -> ValidationResult<()> {
    require("full name", &address.full_name, MAX_NAME_LEN)?;
    validate_phone(&address.phone)?;
    require("province", &address.province, MAX_NAME_LEN)?;
    require("city", &address.city, MAX_NAME_LEN)?;
    require("address", &address.street, 500)?;
    require("postal code", &address.postal_code, 20)?;
    Ok(())
}

/// Validates an edited profile before it replaces the saved one.
pub fn validate_profile(profile: &UserProfile) -> ValidationResult<()> {
    require("name", &profile.name, MAX_NAME_LEN)?;
    validate_email(&profile.email)?;
    validate_phone(&profile.phone)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Ali Ahmadi".to_string(),
            phone: "09121234567".to_string(),
            province: "Tehran".to_string(),
            city: "Tehran".to_string(),
            street: "Valiasr St, No. 123".to_string(),
            postal_code: "1234567890".to_string(),
        }
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  bag ").unwrap(), "bag");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ali@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ali@example").is_err());
        assert!(validate_email("ali@@example.com").is_err());
        assert!(validate_email("ali@.com").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("09121234567").is_ok());
        assert!(validate_phone("+98 912 123 4567").is_ok());
        assert!(validate_phone("۰۹۱۲۱۲۳۴۵۶۷").is_ok());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("   ").is_err());
        assert!(validate_phone("+").is_err());
        assert!(validate_phone("-").is_err());
        assert!(validate_phone("- -").is_err());
    }

    #[test]
    fn test_validate_product() {
        let ok = Product::new("1", "Leather Handbag", 1_250_000).with_original_price(1_500_000);
        assert!(validate_product(&ok).is_ok());

        let free = Product::new("2", "Freebie", 0);
        assert!(matches!(
            validate_product(&free),
            Err(ValidationError::MustBePositive { .. })
        ));

        let inverted = Product::new("3", "Odd", 1_000).with_original_price(900);
        assert!(validate_product(&inverted).is_err());

        let overrated = Product::new("4", "Hype", 1_000).with_rating_tenths(51);
        assert!(validate_product(&overrated).is_err());

        let nameless = Product::new("5", " ", 1_000);
        assert!(validate_product(&nameless).is_err());
    }

    #[test]
    fn test_validate_shipping_address() {
        assert!(validate_shipping_address(&address()).is_ok());

        let mut missing_postal = address();
        missing_postal.postal_code.clear();
        let err = validate_shipping_address(&missing_postal).unwrap_err();
        assert_eq!(err.to_string(), "postal code is required");

        let mut punctuation_phone = address();
        punctuation_phone.phone = "+ -".to_string();
        assert!(validate_shipping_address(&punctuation_phone).is_err());
    }

    #[test]
    fn test_validate_profile() {
        let mut profile = UserProfile {
            name: "Ali Ahmadi".to_string(),
            email: "ali@example.com".to_string(),
            phone: "09121234567".to_string(),
            ..Default::default()
        };
        assert!(validate_profile(&profile).is_ok());

        profile.email = "nope".to_string();
        assert!(validate_profile(&profile).is_err());
    }
}
