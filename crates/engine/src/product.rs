//! The module contains the `Product` type, the inventory entity.

use core::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// A product kept in stock.
///
/// The id is derived from the creation timestamp, so it is monotonic-ish but
/// not guaranteed unique when products are registered within the same second.
/// `quantity` is the only field mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    pub fn new(name: String, description: String, price: f64, quantity: i64) -> Self {
        Self {
            id: Utc::now().timestamp(),
            name,
            description,
            price,
            quantity,
        }
    }

    pub fn with_id(id: i64, name: String, description: String, price: f64, quantity: i64) -> Self {
        Self {
            id,
            name,
            description,
            price,
            quantity,
        }
    }

    /// Remove `amount` units from stock.
    ///
    /// Fails with [`EngineError::InsufficientStock`] when `amount` exceeds the
    /// available quantity, leaving the product untouched. Zero is a valid
    /// no-op withdrawal. Negative amounts are not rejected here and increase
    /// stock; front-ends reject them when configured to run strict.
    pub fn withdraw(&mut self, amount: i64) -> ResultEngine<()> {
        if amount > self.quantity {
            return Err(EngineError::InsufficientStock {
                requested: amount,
                available: self.quantity,
            });
        }

        self.quantity -= amount;
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} in stock)", self.name, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::with_id(
            1,
            String::from("Apple"),
            String::from("Red apple"),
            2.50,
            20,
        )
    }

    #[test]
    fn withdraw_within_stock() {
        let mut product = product();
        product.withdraw(5).unwrap();

        assert_eq!(product.quantity, 15);
    }

    #[test]
    fn withdraw_whole_stock() {
        let mut product = product();
        product.withdraw(20).unwrap();

        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn withdraw_zero_is_a_noop() {
        let mut product = product();
        product.withdraw(0).unwrap();

        assert_eq!(product.quantity, 20);
    }

    #[test]
    fn withdraw_over_stock_reports_excess() {
        let mut product = product();
        let err = product.withdraw(25).unwrap_err();

        assert_eq!(
            err,
            EngineError::InsufficientStock {
                requested: 25,
                available: 20
            }
        );
        assert_eq!(err.excess(), Some(5));
        assert_eq!(product.quantity, 20);
    }

    #[test]
    fn withdraw_negative_increases_stock() {
        // Legacy behavior, kept by default. Strict front-ends refuse the
        // amount before calling withdraw.
        let mut product = product();
        product.withdraw(-5).unwrap();

        assert_eq!(product.quantity, 25);
    }
}
