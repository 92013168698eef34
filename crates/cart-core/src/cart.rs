//! # Cart Types
//!
//! Cart line items and the payment receipt returned by checkout.

use crate::error::{CartError, CartResult};
use crate::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A line item in the cart
///
/// `price` is a snapshot of the product price at the moment the item was
/// first added; later catalog changes do not touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product name (catalog key)
    pub product_name: String,

    /// Unit price at add time
    pub price: i64,

    /// Quantity, always > 0 while in the cart
    pub quantity: i64,
}

impl CartItem {
    pub fn new(product_name: impl Into<String>, price: i64, quantity: i64) -> Self {
        Self {
            product_name: product_name.into(),
            price,
            quantity,
        }
    }

    /// Create a line item from a product, freezing its current price
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self::new(product.name.clone(), product.price, quantity)
    }

    /// Price × quantity for this line
    pub fn line_total(&self) -> CartResult<i64> {
        self.price.checked_mul(self.quantity).ok_or_else(|| {
            CartError::InvalidRequest(format!(
                "line total overflows for {}",
                self.product_name
            ))
        })
    }
}

/// Sum of all line totals
pub fn cart_total(items: &[CartItem]) -> CartResult<i64> {
    items.iter().try_fold(0i64, |acc, item| {
        acc.checked_add(item.line_total()?)
            .ok_or_else(|| CartError::InvalidRequest("cart total overflows".to_string()))
    })
}

/// Receipt for a completed payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInformation {
    /// Receipt identifier
    pub payment_id: String,

    /// Cart contents at the time of payment
    pub product_list: Vec<CartItem>,

    /// Σ price × quantity
    pub total_price: i64,

    /// Amount handed over
    pub money_paid: i64,

    /// money_paid - total_price
    pub change: i64,

    pub paid_at: DateTime<Utc>,
}

impl PaymentInformation {
    /// Settle a cart snapshot against the money handed over.
    ///
    /// Fails with `InsufficientFunds` when `money` does not cover the total.
    pub fn settle(product_list: Vec<CartItem>, money: i64) -> CartResult<Self> {
        let total_price = cart_total(&product_list)?;
        if money < total_price {
            return Err(CartError::InsufficientFunds {
                total: total_price,
                paid: money,
            });
        }

        Ok(Self {
            payment_id: Uuid::new_v4().to_string(),
            product_list,
            total_price,
            money_paid: money,
            change: money - total_price,
            paid_at: Utc::now(),
        })
    }

    /// Number of units paid for
    pub fn item_count(&self) -> i64 {
        self.product_list.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let product = Product::new("Apple", 10);
        let item = CartItem::from_product(&product, 3);

        assert_eq!(item.line_total().unwrap(), 30);
    }

    #[test]
    fn test_cart_total() {
        let items = vec![CartItem::new("Apple", 10, 5), CartItem::new("Pear", 7, 2)];
        assert_eq!(cart_total(&items).unwrap(), 64);
        assert_eq!(cart_total(&[]).unwrap(), 0);
    }

    #[test]
    fn test_cart_total_overflow() {
        let items = vec![CartItem::new("Gold", i64::MAX, 2)];
        assert!(matches!(
            cart_total(&items),
            Err(CartError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_settle_exact_amount() {
        let payment = PaymentInformation::settle(vec![CartItem::new("Apple", 10, 5)], 50).unwrap();

        assert_eq!(payment.total_price, 50);
        assert_eq!(payment.change, 0);
        assert_eq!(payment.item_count(), 5);
    }

    #[test]
    fn test_settle_insufficient() {
        let err = PaymentInformation::settle(vec![CartItem::new("Apple", 10, 5)], 49).unwrap_err();
        assert!(matches!(
            err,
            CartError::InsufficientFunds { total: 50, paid: 49 }
        ));
    }
}
