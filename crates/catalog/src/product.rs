use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use cartwright_core::{DomainError, DomainResult, ProductId};

/// A purchasable item in the catalog.
///
/// Products are immutable once defined. The cart holds copies of these
/// records, never cart-specific entities of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in whole currency units.
    pub price: u64,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Read-only, ordered product catalog fixed at startup.
///
/// The catalog exposes enumeration and id lookup only; there is no mutation
/// and no loading step. A lookup miss yields `None`, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    ///
    /// Ids must be unique: every cart entry resolves to exactly one catalog
    /// record.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "product {} has an empty name",
                    product.id
                )));
            }
            if !seen.insert(product.id) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// The built-in demo catalog (five products, ids 1-5).
    pub fn demo() -> Self {
        Self {
            products: vec![
                Product::new(1, "Product 1", 10),
                Product::new(2, "Product 2", 20),
                Product::new(3, "Product 3", 30),
                Product::new(4, "Product 4", 40),
                Product::new(5, "Product 5", 50),
            ],
        }
    }

    /// Look a product up by id.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_is_ordered_by_id() {
        let catalog = Catalog::demo();
        let ids: Vec<u32> = catalog.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn demo_catalog_prices_scale_with_id() {
        let catalog = Catalog::demo();
        for product in catalog.iter() {
            assert_eq!(product.price, u64::from(product.id.value()) * 10);
        }
    }

    #[test]
    fn find_returns_matching_product() {
        let catalog = Catalog::demo();
        let product = catalog.find(ProductId::new(3)).unwrap();
        assert_eq!(product.name, "Product 3");
        assert_eq!(product.price, 30);
    }

    #[test]
    fn find_miss_yields_none_not_an_error() {
        let catalog = Catalog::demo();
        assert!(catalog.find(ProductId::new(99)).is_none());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            Product::new(1, "Product 1", 10),
            Product::new(1, "Product 1 again", 15),
        ])
        .unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation for duplicate id"),
        }
    }

    #[test]
    fn new_rejects_empty_names() {
        let err = Catalog::new(vec![Product::new(1, "   ", 10)]).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn product_serializes_to_id_name_price() {
        let product = Product::new(1, "Product 1", 10);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Product 1", "price": 10})
        );
    }
}
