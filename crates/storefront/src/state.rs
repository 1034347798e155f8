//! Application state shared across handlers.

use std::sync::Arc;

use url::Url;

use techmart_core::Catalog;

use crate::config::StorefrontConfig;

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("invalid base_url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the read-only product catalog. The catalog lives for
/// the whole process and is never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - The product catalog to serve
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL does not parse.
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Result<Self, StateError> {
        // Fail at startup rather than on the first request that builds a link
        let _ = Url::parse(&config.base_url)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: base_url.to_string(),
            sentry_dsn: None,
        }
    }

    #[test]
    fn test_new_accepts_valid_base_url() {
        let state = AppState::new(test_config("http://localhost:3000"), Catalog::demo());
        assert!(state.is_ok());
        assert_eq!(state.unwrap().catalog().len(), 6);
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let state = AppState::new(test_config("not a url"), Catalog::demo());
        assert!(matches!(state, Err(StateError::InvalidBaseUrl(_))));
    }
}
