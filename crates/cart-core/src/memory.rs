//! # In-Memory Store
//!
//! `CartStore` backed by process memory. Used by tests and by the API
//! when `CART_BACKEND=memory`.

use crate::cart::CartItem;
use crate::error::{CartError, CartResult};
use crate::product::{Product, ProductCatalog};
use crate::store::CartStore;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Catalog and cart held behind async locks
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalog: RwLock<ProductCatalog>,
    cart: RwLock<Vec<CartItem>>,
}

impl InMemoryStore {
    /// Create a store with the given catalog and an empty cart.
    ///
    /// The catalog is validated first (unique names, prices >= 0).
    pub fn new(catalog: ProductCatalog) -> CartResult<Self> {
        catalog.validate()?;
        Ok(Self {
            catalog: RwLock::new(catalog),
            cart: RwLock::new(Vec::new()),
        })
    }

    /// Builder: seed the cart
    pub fn with_cart(self, items: Vec<CartItem>) -> Self {
        Self {
            catalog: self.catalog,
            cart: RwLock::new(items),
        }
    }

    /// Change a catalog price. Items already in the cart keep their snapshot.
    pub async fn set_price(&self, name: &str, price: i64) -> CartResult<()> {
        if price < 0 {
            return Err(CartError::Configuration(format!(
                "product {} has negative price {}",
                name, price
            )));
        }

        let mut catalog = self.catalog.write().await;
        let product = catalog
            .get_mut(name)
            .ok_or_else(|| CartError::ProductNotFound {
                name: name.to_string(),
            })?;
        product.price = price;
        Ok(())
    }
}

#[async_trait]
impl CartStore for InMemoryStore {
    async fn get_product_by_name(&self, name: &str) -> CartResult<Product> {
        self.catalog
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| CartError::ProductNotFound {
                name: name.to_string(),
            })
    }

    async fn get_product_data(&self) -> CartResult<Vec<Product>> {
        Ok(self.catalog.read().await.products.clone())
    }

    async fn get_cart_items(&self) -> CartResult<Vec<CartItem>> {
        Ok(self.cart.read().await.clone())
    }

    async fn save_cart_items(&self, items: Vec<CartItem>) -> CartResult<()> {
        debug!(items = items.len(), "Saving cart in memory");
        *self.cart.write().await = items;
        Ok(())
    }

    async fn swap_cart_items(&self, expected: &[CartItem], new: Vec<CartItem>) -> CartResult<bool> {
        let mut cart = self.cart.write().await;
        if cart.as_slice() != expected {
            return Ok(false);
        }
        *cart = new;
        Ok(true)
    }

    fn store_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryStore {
        InMemoryStore::new(
            ProductCatalog::new()
                .with_product(Product::new("Apple", 10))
                .with_product(Product::new("Pear", 7)),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_product_lookup() {
        let store = store();

        assert_eq!(store.get_product_by_name("Pear").await.unwrap().price, 7);
        assert!(matches!(
            store.get_product_by_name("Mango").await,
            Err(CartError::ProductNotFound { .. })
        ));
        assert_eq!(store.get_product_data().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_save_replaces_cart() {
        let store = store().with_cart(vec![CartItem::new("Apple", 10, 1)]);

        store
            .save_cart_items(vec![CartItem::new("Pear", 7, 2)])
            .await
            .unwrap();

        assert_eq!(
            store.get_cart_items().await.unwrap(),
            vec![CartItem::new("Pear", 7, 2)]
        );
    }

    #[tokio::test]
    async fn test_swap_only_when_unchanged() {
        let seeded = vec![CartItem::new("Apple", 10, 1)];
        let store = store().with_cart(seeded.clone());

        assert!(!store.swap_cart_items(&[], Vec::new()).await.unwrap());
        assert_eq!(store.get_cart_items().await.unwrap(), seeded);

        assert!(store.swap_cart_items(&seeded, Vec::new()).await.unwrap());
        assert!(store.get_cart_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_price() {
        let store = store();
        store.set_price("Apple", 12).await.unwrap();

        assert_eq!(store.get_product_by_name("Apple").await.unwrap().price, 12);
        assert!(store.set_price("Mango", 1).await.is_err());
    }

    #[tokio::test]
    async fn test_set_price_rejects_negative() {
        let store = store();

        let err = store.set_price("Apple", -5).await.unwrap_err();
        assert!(matches!(err, CartError::Configuration(_)));
        assert_eq!(store.get_product_by_name("Apple").await.unwrap().price, 10);
    }

    #[test]
    fn test_new_validates_catalog() {
        let negative = ProductCatalog::new().with_product(Product::new("Apple", -1));
        assert!(matches!(
            InMemoryStore::new(negative),
            Err(CartError::Configuration(_))
        ));

        let duplicate = ProductCatalog::new()
            .with_product(Product::new("Apple", 1))
            .with_product(Product::new("Apple", 2));
        assert!(InMemoryStore::new(duplicate).is_err());
    }
}
