//! # Cart Service
//!
//! The six cart operations: add, remove, show, reset, list products, pay.
//!
//! The service holds no cart state. Every call reads from the store,
//! applies a pure transformation and writes the result back; store
//! errors are returned to the caller as-is.

use crate::cart::{CartItem, PaymentInformation};
use crate::error::{CartError, CartResult};
use crate::product::Product;
use crate::store::BoxedCartStore;
use tracing::{info, instrument, warn};

/// Orchestrates catalog lookups and cart persistence
#[derive(Clone)]
pub struct CartService {
    store: BoxedCartStore,
}

impl CartService {
    pub fn new(store: BoxedCartStore) -> Self {
        Self { store }
    }

    /// Backing store handle
    pub fn store(&self) -> &BoxedCartStore {
        &self.store
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// An existing line for the same product is incremented and keeps its
    /// snapshot price; otherwise a new line is appended at the current
    /// catalog price.
    #[instrument(skip(self), fields(store = self.store.store_name()))]
    pub async fn add_cart(&self, product_name: &str, quantity: i64) -> CartResult<()> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        let product = self.store.get_product_by_name(product_name).await?;
        let mut items = self.store.get_cart_items().await?;

        match items.iter_mut().find(|i| i.product_name == product_name) {
            Some(item) => {
                item.quantity = item.quantity.checked_add(quantity).ok_or_else(|| {
                    CartError::InvalidRequest(format!("quantity overflows for {}", product_name))
                })?;
            }
            None => items.push(CartItem::from_product(&product, quantity)),
        }

        self.store.save_cart_items(items).await?;
        info!("Added to cart");
        Ok(())
    }

    /// Remove a product's line from the cart, keeping the order of the rest.
    #[instrument(skip(self), fields(store = self.store.store_name()))]
    pub async fn remove_cart(&self, product_name: &str) -> CartResult<()> {
        let mut items = self.store.get_cart_items().await?;

        let index = items
            .iter()
            .position(|i| i.product_name == product_name)
            .ok_or_else(|| CartError::CartItemNotFound {
                name: product_name.to_string(),
            })?;
        items.remove(index);

        self.store.save_cart_items(items).await?;
        info!("Removed from cart");
        Ok(())
    }

    /// Current cart contents in stored order
    #[instrument(skip(self), fields(store = self.store.store_name()))]
    pub async fn show_cart(&self) -> CartResult<Vec<CartItem>> {
        self.store.get_cart_items().await
    }

    /// Empty the cart. Idempotent.
    #[instrument(skip(self), fields(store = self.store.store_name()))]
    pub async fn reset_cart(&self) -> CartResult<()> {
        self.store.save_cart_items(Vec::new()).await?;
        info!("Cart reset");
        Ok(())
    }

    /// Everything the catalog holds
    #[instrument(skip(self), fields(store = self.store.store_name()))]
    pub async fn get_all_products(&self) -> CartResult<Vec<Product>> {
        self.store.get_product_data().await
    }

    /// Pay for the cart and empty it.
    ///
    /// The cart is cleared with a compare-and-swap against the snapshot the
    /// total was computed from, so a successful return means the cart was
    /// emptied. If the cart changed in between, `CartChanged` is returned
    /// and nothing is paid.
    #[instrument(skip(self), fields(store = self.store.store_name()))]
    pub async fn pay(&self, money: i64) -> CartResult<PaymentInformation> {
        let items = self.store.get_cart_items().await?;

        let payment = match PaymentInformation::settle(items, money) {
            Ok(payment) => payment,
            Err(err) => {
                warn!(error = %err, "Payment rejected");
                return Err(err);
            }
        };

        if !self
            .store
            .swap_cart_items(&payment.product_list, Vec::new())
            .await?
        {
            warn!("Cart changed during payment");
            return Err(CartError::CartChanged);
        }

        info!(
            payment_id = %payment.payment_id,
            items = payment.item_count(),
            total = payment.total_price,
            change = payment.change,
            "Payment completed"
        );
        Ok(payment)
    }
}
