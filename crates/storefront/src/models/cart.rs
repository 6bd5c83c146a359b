//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line item in the shopping cart.
///
/// `id` is the uniqueness key: adding a product whose id is already in
/// the cart increments the existing line's quantity instead of creating
/// a second line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Unit price in the base currency (USD).
    pub price: Decimal,
    pub quantity: u32,
    pub category: String,
}

impl CartItem {
    /// Line total (unit price times quantity) in the base currency.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An "add to cart" payload: a cart item before it has a quantity.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub id: String,
    pub name: String,
    /// Unit price in the base currency (USD).
    pub price: Decimal,
    pub category: String,
}
