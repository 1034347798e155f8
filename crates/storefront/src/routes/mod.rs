//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page
//! GET  /health          - Health check
//!
//! # Products
//! GET  /products        - Catalog page (search input + category select + grid)
//! GET  /products/grid   - Product grid fragment for the current filter (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart            - Cart page
//! GET  /cart/items      - Cart contents fragment (modal body)
//! POST /cart/add        - Add one unit (returns notification, triggers cart-updated)
//! POST /cart/remove     - Remove a line item (returns cart_items fragment)
//! GET  /cart/count      - Cart count badge (fragment)
//! POST /cart/checkout   - Demo checkout (returns acknowledgment fragment)
//! ```

pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/grid", get(products::grid))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", get(cart::items))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}
