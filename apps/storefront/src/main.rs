//! # Storefront Entry Point
//!
//! Reads one JSON command per line from stdin and answers with one JSON
//! reply per line on stdout. Logs go to stderr.
//!
//! ```text
//! $ echo '{"cmd":"add_to_cart","productId":"1","quantity":2}' | storefront
//! {"ok":true,"data":{"items":[...],"totals":{"itemCount":2,...}}}
//! ```

#[tokio::main]
async fn main() -> Result<(), storefront_lib::AppError> {
    // The actual setup is in lib.rs for better testability
    storefront_lib::run().await
}
