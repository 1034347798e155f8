//! Product route handlers.
//!
//! The catalog page re-renders its grid fragment on every keystroke and
//! category change. Filtering happens server-side over the fixed catalog;
//! there is no pagination and no debouncing.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use techmart_core::{Category, Product};

use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Category select option display data.
#[derive(Clone)]
pub struct CategoryOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Catalog filter query parameters.
///
/// Both parameters default to empty, which matches everything.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

impl CatalogQuery {
    /// The selected category, if the parameter names a known tag.
    ///
    /// An empty or unknown value means "all categories"; an unexpected
    /// value degrades to no filter rather than an error page.
    fn selected_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub q: String,
    pub categories: Vec<CategoryOptionView>,
}

/// Product grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
}

/// Build the filtered card list for the current query.
fn filtered_cards(state: &AppState, query: &CatalogQuery) -> Vec<ProductCardView> {
    state
        .catalog()
        .filter(&query.q, query.selected_category())
        .into_iter()
        .map(ProductCardView::from)
        .collect()
}

/// Display the catalog page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let selected = query.selected_category();
    let categories = Category::ALL
        .iter()
        .map(|category| CategoryOptionView {
            value: category.as_str(),
            label: category.label(),
            selected: Some(*category) == selected,
        })
        .collect();

    ProductsIndexTemplate {
        products: filtered_cards(&state, &query),
        q: query.q,
        categories,
    }
}

/// Re-render the product grid for the current filter (HTMX).
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    ProductGridTemplate {
        products: filtered_cards(&state, &query),
    }
}
