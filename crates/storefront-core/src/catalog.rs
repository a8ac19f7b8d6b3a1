//! # Catalog
//!
//! The read-only product catalog consumed by the listing and detail views.
//!
//! ```text
//! Listing view ──► search(query, category) ──► Vec<&Product>
//!                  categories()            ──► filter chips
//! Detail view  ──► get(id)                 ──► Option<&Product>
//!                  similar(id)             ──► up to 4 same-category products
//! ```
//!
//! The catalog never changes after construction; the cart only ever sees
//! `&Product` borrowed from here.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;
use crate::validation::{validate_product, validate_search_query};
use crate::MAX_SIMILAR_PRODUCTS;

/// In-memory product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from caller-supplied products.
    ///
    /// Every record is validated and ids must be unique.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        for (i, product) in products.iter().enumerate() {
            validate_product(product)?;

            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// The eight demo products the storefront ships with.
    pub fn mock() -> Self {
        Catalog {
            products: mock_products(),
        }
    }

    /// All products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`] but with a typed error for command handlers.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Distinct category labels in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Filters the catalog for the listing view.
    ///
    /// ## Matching
    /// - `query` matches as a case-insensitive substring of the name,
    ///   description or category; a blank query matches everything
    /// - `category`, when given, must equal the product's category
    pub fn search(&self, query: &str, category: Option<&str>) -> CoreResult<Vec<&Product>> {
        let query = validate_search_query(query)?.to_lowercase();

        let matches = self
            .products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| {
                query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
                    || p.category.to_lowercase().contains(&query)
            })
            .collect();

        Ok(matches)
    }

    /// Other products in the same category, at most four.
    ///
    /// An unknown id yields an empty list.
    pub fn similar(&self, id: &str) -> Vec<&Product> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(MAX_SIMILAR_PRODUCTS)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn mock_products() -> Vec<Product> {
    const IMG: &str = "https://images.unsplash.com/photo-";

    vec![
        Product::new("1", "Leather Handbag", 1_250_000)
            .with_original_price(1_500_000)
            .with_image(format!("{IMG}1548036328-c9fa89d128fa?w=400&h=400&fit=crop"))
            .with_category("Bags")
            .with_description("Genuine leather handbag with a minimal design")
            .with_rating_tenths(45),
        Product::new("2", "Classic Wristwatch", 3_200_000)
            .with_image(format!("{IMG}1523275335684-37898b6baf30?w=400&h=400&fit=crop"))
            .with_category("Watches")
            .with_description("Wristwatch with a black leather strap")
            .with_rating_tenths(48),
        Product::new("3", "Wireless Headphones", 2_800_000)
            .with_original_price(3_500_000)
            .with_image(format!("{IMG}1505740420928-5e560c06d30e?w=400&h=400&fit=crop"))
            .with_category("Electronics")
            .with_description("Headphones with excellent sound quality")
            .with_rating_tenths(46),
        Product::new("4", "Sport Sneakers", 1_800_000)
            .with_image(format!("{IMG}1542291026-7eec264c27ff?w=400&h=400&fit=crop"))
            .with_category("Shoes")
            .with_description("Comfortable sneakers for everyday wear")
            .with_rating_tenths(43)
            .out_of_stock(),
        Product::new("5", "Sunglasses", 980_000)
            .with_image(format!("{IMG}1572635196237-14b3f281503f?w=400&h=400&fit=crop"))
            .with_category("Accessories")
            .with_description("Sunglasses with a black frame")
            .with_rating_tenths(44),
        Product::new("6", "Backpack", 1_450_000)
            .with_original_price(1_700_000)
            .with_image(format!("{IMG}1553062407-98eeb64c6a62?w=400&h=400&fit=crop"))
            .with_category("Bags")
            .with_description("Backpack that fits a laptop")
            .with_rating_tenths(47),
        Product::new("7", "Ceramic Mug", 320_000)
            .with_image(format!("{IMG}1514228742587-6b1558fcca3d?w=400&h=400&fit=crop"))
            .with_category("Home")
            .with_description("Handmade mug with a minimal pattern")
            .with_rating_tenths(42),
        Product::new("8", "Notebook", 180_000)
            .with_image(format!("{IMG}1531346878377-a5be20888e57?w=400&h=400&fit=crop"))
            .with_category("Stationery")
            .with_description("Notebook with a leather cover")
            .with_rating_tenths(45),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_mock_catalog_is_valid() {
        let catalog = Catalog::mock();
        assert_eq!(catalog.len(), 8);
        assert!(Catalog::new(catalog.all().to_vec()).is_ok());
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::mock();
        assert_eq!(catalog.get("7").map(|p| p.name.as_str()), Some("Ceramic Mug"));
        assert!(catalog.get("99").is_none());
        assert!(matches!(
            catalog.require("99"),
            Err(CoreError::ProductNotFound(id)) if id == "99"
        ));
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = Catalog::mock();
        assert_eq!(
            catalog.categories(),
            vec!["Bags", "Watches", "Electronics", "Shoes", "Accessories", "Home", "Stationery"]
        );
    }

    #[test]
    fn test_search_blank_query_returns_everything() {
        let catalog = Catalog::mock();
        assert_eq!(catalog.search("   ", None).unwrap().len(), 8);
    }

    #[test]
    fn test_search_matches_name_description_and_category() {
        let catalog = Catalog::mock();

        assert_eq!(ids(&catalog.search("mug", None).unwrap()), vec!["7"]);
        // "leather" appears in descriptions of the bag, watch and notebook
        assert_eq!(ids(&catalog.search("Leather", None).unwrap()), vec!["1", "2", "8"]);
        assert_eq!(ids(&catalog.search("bags", None).unwrap()), vec!["1", "6"]);
    }

    #[test]
    fn test_search_with_category_filter() {
        let catalog = Catalog::mock();

        assert_eq!(ids(&catalog.search("", Some("Bags")).unwrap()), vec!["1", "6"]);
        assert_eq!(ids(&catalog.search("laptop", Some("Bags")).unwrap()), vec!["6"]);
        assert!(catalog.search("laptop", Some("Home")).unwrap().is_empty());
    }

    #[test]
    fn test_search_rejects_overlong_query() {
        let catalog = Catalog::mock();
        assert!(catalog.search(&"x".repeat(200), None).is_err());
    }

    #[test]
    fn test_similar_products() {
        let catalog = Catalog::mock();
        assert_eq!(ids(&catalog.similar("1")), vec!["6"]);
        assert!(catalog.similar("2").is_empty());
        assert!(catalog.similar("missing").is_empty());
    }

    #[test]
    fn test_similar_caps_at_four() {
        let products = (1..=6)
            .map(|i| Product::new(i.to_string(), format!("Pen {i}"), 1_000).with_category("Pens"))
            .collect();
        let catalog = Catalog::new(products).unwrap();

        assert_eq!(ids(&catalog.similar("1")), vec!["2", "3", "4", "5"]);
    }

    #[test]
    fn test_new_rejects_duplicates_and_invalid_records() {
        let dup = vec![Product::new("1", "A", 10), Product::new("1", "B", 20)];
        assert!(matches!(
            Catalog::new(dup),
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));

        let invalid = vec![Product::new("1", "A", 10).with_original_price(5)];
        assert!(Catalog::new(invalid).is_err());
    }

    #[test]
    fn test_discount_badges_on_mock_data() {
        let catalog = Catalog::mock();
        let badges: Vec<(String, u8)> = catalog
            .all()
            .iter()
            .filter_map(|p| p.discount_percent().map(|d| (p.id.clone(), d)))
            .collect();
        assert_eq!(
            badges,
            vec![("1".to_string(), 17), ("3".to_string(), 20), ("6".to_string(), 15)]
        );
    }
}
