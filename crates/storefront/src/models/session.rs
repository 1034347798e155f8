//! Session-related types.
//!
//! The storefront keeps no user identity; the session carries only the
//! shopping cart.

/// Session keys for persisted storefront state.
pub mod keys {
    /// Key for the shopping cart, stored as a JSON array of line items.
    pub const CART: &str = "cart";
}
