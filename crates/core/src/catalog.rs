//! The read-only product catalog and its filter.
//!
//! The catalog is fixed at startup and never mutated; every lookup and
//! filter borrows from it. Filtering is a pure function over the product
//! list and is cheap enough to run on every keystroke.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId};

/// A purchasable product as defined by the catalog.
///
/// Immutable at runtime. `image` is a URL reference and is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub image: String,
}

/// The fixed set of purchasable products, in definition order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        let product = |id: i32, name: &str, cents: i64, category: Category, image: &str| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_cents(cents),
            category,
            image: image.to_string(),
        };

        Self::new(vec![
            product(
                1,
                "Smartphone X",
                69999,
                Category::Phone,
                "https://via.placeholder.com/300x200/4A90E2/FFFFFF?text=Smartphone",
            ),
            product(
                2,
                "Ultra Laptop Pro",
                129_999,
                Category::Laptop,
                "https://via.placeholder.com/300x200/50E3C2/FFFFFF?text=Laptop",
            ),
            product(
                3,
                "Wireless Headphones",
                19999,
                Category::Audio,
                "https://via.placeholder.com/300x200/9013FE/FFFFFF?text=Headphones",
            ),
            product(
                4,
                "Smart Watch",
                29999,
                Category::Wearable,
                "https://via.placeholder.com/300x200/F5A623/FFFFFF?text=Smart+Watch",
            ),
            product(
                5,
                "Tablet Mini",
                49999,
                Category::Tablet,
                "https://via.placeholder.com/300x200/D0021B/FFFFFF?text=Tablet",
            ),
            product(
                6,
                "Gaming Console",
                39999,
                Category::Gaming,
                "https://via.placeholder.com/300x200/7ED321/FFFFFF?text=Console",
            ),
        ])
    }

    /// All products in definition order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Filter products by search term and category, preserving catalog order.
    ///
    /// A product is included when both conditions hold:
    /// - its name contains `search_term` case-insensitively (an empty term
    ///   matches everything)
    /// - its category equals `category`, if one is selected
    #[must_use]
    pub fn filter(&self, search_term: &str, category: Option<Category>) -> Vec<&Product> {
        let needle = search_term.to_lowercase();

        self.products
            .iter()
            .filter(|product| {
                let matches_search =
                    needle.is_empty() || product.name.to_lowercase().contains(&needle);
                let matches_category = category.is_none_or(|c| product.category == c);
                matches_search && matches_category
            })
            .collect()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
