//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself is stored in the session as a JSON array of line items
//! and re-saved after every mutation; a missing or corrupt value is
//! treated as an empty cart and never surfaces to the visitor.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use techmart_core::{Cart, CheckoutError, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// How long a confirmation notification stays on screen, in milliseconds.
const NOTIFICATION_DISMISS_MS: u32 = 3000;

// =============================================================================
// View Models
// =============================================================================

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView {
                    id: line.id.to_string(),
                    name: line.name.clone(),
                    unit_price: line.price.to_string(),
                    quantity: line.quantity,
                    line_total: line.line_total().to_string(),
                })
                .collect(),
            total: cart.total().to_string(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session.
///
/// A missing or malformed value yields an empty cart; deserialization
/// problems are recovered locally and never propagate to handlers.
async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the cart to the session.
///
/// Called after every mutation; there is no deferred or batched write.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: ProductId,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: ProductId,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart contents fragment template (modal body, for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Transient add-to-cart confirmation fragment.
///
/// Each notification carries its own dismiss delay and is removed
/// client-side when the delay elapses; concurrent notifications stack
/// independently.
#[derive(Template, WebTemplate)]
#[template(path = "partials/notification.html")]
pub struct NotificationTemplate {
    pub message: String,
    pub dismiss_ms: u32,
}

/// Checkout acknowledgment fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_result.html")]
pub struct CheckoutResultTemplate {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Cart contents fragment (HTMX modal body).
#[instrument(skip(session))]
pub async fn items(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartItemsTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// The form carries only the product ID; name and price are resolved from
/// the read-only catalog so a line item always reflects catalog data as
/// of add time. Returns the confirmation notification and triggers a
/// badge refresh.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .find(form.id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.id)))?;

    let mut cart = load_cart(&session).await;
    cart.add_item(product.id, &product.name, product.price);
    save_cart(&session, &cart).await?;

    tracing::debug!(product = %product.name, count = cart.item_count(), "added to cart");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        NotificationTemplate {
            message: format!("{} added to cart!", product.name),
            dismiss_ms: NOTIFICATION_DISMISS_MS,
        },
    )
        .into_response())
}

/// Remove a line item from the cart (HTMX).
///
/// Removes the whole line regardless of quantity; removing an ID that is
/// not in the cart is a no-op. Returns the refreshed cart contents.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await;
    cart.remove_item(form.id);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartCountTemplate {
        count: cart.item_count(),
    }
}

/// Complete the demo checkout (HTMX).
///
/// An empty cart renders the blocking error message and leaves all state
/// unchanged. Otherwise the cart is emptied, persisted, and the success
/// acknowledgment triggers both a badge refresh and the modal close.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> Result<Response> {
    let mut cart = load_cart(&session).await;

    match cart.checkout() {
        Err(CheckoutError::EmptyCart) => Ok(CheckoutResultTemplate {
            success: false,
            message: "Your cart is empty!".to_string(),
        }
        .into_response()),
        Ok(()) => {
            save_cart(&session, &cart).await?;

            Ok((
                AppendHeaders([("HX-Trigger", "cart-updated, checkout-complete")]),
                CheckoutResultTemplate {
                    success: true,
                    message: "Thank you for your purchase! This is a demo store.".to_string(),
                },
            )
                .into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techmart_core::Price;

    #[test]
    fn test_cart_view_empty() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_cart_view_formats_lines_and_total() {
        let mut cart = Cart::new();
        cart.add_item(ProductId::new(1), "Smartphone X", Price::from_cents(69999));
        cart.add_item(ProductId::new(1), "Smartphone X", Price::from_cents(69999));
        cart.add_item(
            ProductId::new(3),
            "Wireless Headphones",
            Price::from_cents(19999),
        );

        let view = CartView::from(&cart);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, "$1599.97");

        let phone = view.items.first().expect("phone line");
        assert_eq!(phone.id, "1");
        assert_eq!(phone.unit_price, "$699.99");
        assert_eq!(phone.quantity, 2);
        assert_eq!(phone.line_total, "$1399.98");
    }
}
