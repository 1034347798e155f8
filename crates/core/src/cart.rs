//! The shopping cart store.
//!
//! The cart is an owned store object mutated only through its methods;
//! callers decide when to persist it. It serializes transparently as a
//! JSON array of line items, which is exactly the layout written to the
//! persisted `"cart"` slot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// One cart row: a product ID, its name and unit price as they were at
/// add time, and the aggregated quantity.
///
/// Name and price are copies; they are not re-synced if the catalog
/// changes while the cart is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl LineItem {
    /// The total for this line (`price × quantity`) at full precision.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Error returned by [`Cart::checkout`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout was attempted with no line items; the cart is unchanged.
    #[error("cart is empty")]
    EmptyCart,
}

/// An ordered list of line items, at most one per product ID.
///
/// Invariants:
/// - at most one line item per distinct product ID
/// - `quantity >= 1` on every line; removal deletes the whole line
///   rather than decrementing to zero
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product to the cart.
    ///
    /// If a line with this ID already exists its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended. Always succeeds -
    /// there are no stock checks.
    pub fn add_item(&mut self, id: ProductId, name: &str, price: Price) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity += 1;
        } else {
            self.lines.push(LineItem {
                id,
                name: name.to_string(),
                price,
                quantity: 1,
            });
        }
    }

    /// Remove the line item with this ID, if present.
    ///
    /// Removes the whole line regardless of quantity. A no-op when the ID
    /// is not in the cart, so repeated removal is idempotent.
    pub fn remove_item(&mut self, id: ProductId) {
        self.lines.retain(|line| line.id != id);
    }

    /// The cart total: sum of `price × quantity` over all lines, at full
    /// precision. Rounding to two decimal places is display-only.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities across all lines (the badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Complete the demo checkout: empties the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there are no line items,
    /// leaving the cart unchanged.
    pub fn checkout(&mut self) -> Result<(), CheckoutError> {
        if self.lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.lines.clear();
        Ok(())
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smartphone() -> (ProductId, &'static str, Price) {
        (ProductId::new(1), "Smartphone X", Price::from_cents(69999))
    }

    fn headphones() -> (ProductId, &'static str, Price) {
        (
            ProductId::new(3),
            "Wireless Headphones",
            Price::from_cents(19999),
        )
    }

    #[test]
    fn test_repeated_add_aggregates_quantity() {
        let (id, name, price) = smartphone();
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add_item(id, name, price);
        }

        assert_eq!(cart.len(), 1);
        let line = cart.lines().first().expect("one line");
        assert_eq!(line.quantity, 5);
        assert_eq!(line.name, "Smartphone X");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (id, name, price) = smartphone();
        let mut cart = Cart::new();
        cart.add_item(id, name, price);
        cart.add_item(id, name, price);

        cart.remove_item(id);
        assert!(cart.is_empty());

        let before = cart.clone();
        cart.remove_item(id);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (id, name, price) = smartphone();
        let mut cart = Cart::new();
        cart.add_item(id, name, price);

        let before = cart.clone();
        cart.remove_item(ProductId::new(99));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_scenario_two_smartphones_and_headphones() {
        let (phone_id, phone_name, phone_price) = smartphone();
        let (audio_id, audio_name, audio_price) = headphones();

        let mut cart = Cart::new();
        cart.add_item(phone_id, phone_name, phone_price);
        cart.add_item(phone_id, phone_name, phone_price);
        cart.add_item(audio_id, audio_name, audio_price);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Price::from_cents(159_997));
        assert_eq!(cart.total().to_string(), "$1599.97");
    }

    #[test]
    fn test_checkout_empty_cart_is_error_and_unchanged() {
        let mut cart = Cart::new();
        assert_eq!(cart.checkout(), Err(CheckoutError::EmptyCart));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_empties_cart() {
        let (id, name, price) = smartphone();
        let mut cart = Cart::new();
        cart.add_item(id, name, price);

        assert_eq!(cart.checkout(), Ok(()));
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_serde_roundtrip_preserves_cart() {
        let (phone_id, phone_name, phone_price) = smartphone();
        let (audio_id, audio_name, audio_price) = headphones();

        let mut cart = Cart::new();
        cart.add_item(phone_id, phone_name, phone_price);
        cart.add_item(audio_id, audio_name, audio_price);
        cart.add_item(phone_id, phone_name, phone_price);

        let json = serde_json::to_string(&cart).expect("serialize");
        let restored: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let (id, name, price) = smartphone();
        let mut cart = Cart::new();
        cart.add_item(id, name, price);

        let json = serde_json::to_value(&cart).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!([
                { "id": 1, "name": "Smartphone X", "price": "699.99", "quantity": 1 }
            ])
        );
    }

    #[test]
    fn test_malformed_json_fails_to_parse() {
        // Callers treat a parse failure as an empty cart; the store type
        // itself just reports the error.
        assert!(serde_json::from_str::<Cart>("{\"not\":\"a cart\"}").is_err());
    }
}
