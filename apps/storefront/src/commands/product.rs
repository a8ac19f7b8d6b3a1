//! # Product Commands
//!
//! Commands for the listing and detail views.

use serde::{Deserialize, Serialize};
use storefront_core::{Money, Product};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Product DTO (Data Transfer Object) for the views.
///
/// Adds the derived values the listing cards display (discount badge,
/// star rating) so views do no arithmetic of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub original_price: Option<Money>,
    /// e.g. 20 for a "20% off" badge
    pub discount_percent: Option<u8>,
    pub image: String,
    pub category: String,
    pub description: String,
    pub in_stock: bool,
    pub rating: f32,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price,
            original_price: p.original_price,
            discount_percent: p.discount_percent(),
            image: p.image.clone(),
            category: p.category.clone(),
            description: p.description.clone(),
            in_stock: p.in_stock,
            rating: p.rating(),
        }
    }
}

/// Lists products matching a search query and optional category.
///
/// ## Arguments
/// * `query` - Substring of name, description or category ("" for all)
/// * `category` - Exact category label to filter by
pub fn list_products(
    catalog: &CatalogState,
    query: &str,
    category: Option<&str>,
) -> Result<Vec<ProductDto>, ApiError> {
    debug!(query = %query, category = ?category, "list_products command");

    let products = catalog.inner().search(query, category)?;
    debug!(count = products.len(), "list_products matched");
    Ok(products.into_iter().map(ProductDto::from).collect())
}

/// Gets one product for the detail view.
pub fn get_product(catalog: &CatalogState, id: &str) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product command");
    Ok(ProductDto::from(catalog.inner().require(id)?))
}

/// Up to four products from the same category, excluding `id`.
pub fn similar_products(catalog: &CatalogState, id: &str) -> Vec<ProductDto> {
    debug!(id = %id, "similar_products command");
    catalog
        .inner()
        .similar(id)
        .into_iter()
        .map(ProductDto::from)
        .collect()
}

/// Category chips for the listing view.
pub fn list_categories(catalog: &CatalogState) -> Vec<String> {
    debug!("list_categories command");
    catalog
        .inner()
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect()
}
