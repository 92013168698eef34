//! # Product Types
//!
//! Product catalog types for checkout-rs.
//! Catalogs are usually loaded from `config/products.toml`.

use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product name (catalog key)
    pub name: String,

    /// Unit price in integer currency units
    pub price: i64,

    /// Short description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Product {
    /// Create a new product
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
            description: String::new(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}

/// Product catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Builder: add a product
    pub fn with_product(mut self, product: Product) -> Self {
        self.add(product);
        self
    }

    /// Find a product by name
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Mutable lookup by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Reject duplicate names and negative prices
    pub fn validate(&self) -> CartResult<()> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if product.price < 0 {
                return Err(CartError::Configuration(format!(
                    "product {} has negative price {}",
                    product.name, product.price
                )));
            }
            if !seen.insert(product.name.as_str()) {
                return Err(CartError::Configuration(format!(
                    "duplicate product name: {}",
                    product.name
                )));
            }
        }
        Ok(())
    }

    /// Load and validate a catalog from a TOML string
    pub fn from_toml(toml_str: &str) -> CartResult<Self> {
        let catalog: ProductCatalog = toml::from_str(toml_str)?;
        catalog.validate()?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = ProductCatalog::new()
            .with_product(Product::new("Apple", 10))
            .with_product(Product::new("Pear", 12).with_description("Green"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Pear").map(|p| p.price), Some(12));
        assert!(catalog.get("Mango").is_none());
    }

    #[test]
    fn test_from_toml() {
        let catalog = ProductCatalog::from_toml(
            r#"
            [[products]]
            name = "Apple"
            price = 10

            [[products]]
            name = "Banana"
            price = 4
            description = "Ripe"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Banana").unwrap().description, "Ripe");
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = ProductCatalog::from_toml(
            r#"
            [[products]]
            name = "Apple"
            price = 10

            [[products]]
            name = "Apple"
            price = 11
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, CartError::Configuration(_)));
    }

    #[test]
    fn test_rejects_negative_price() {
        let catalog = ProductCatalog::new().with_product(Product::new("Apple", -1));
        assert!(catalog.validate().is_err());
    }
}
