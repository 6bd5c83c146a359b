//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::store::{CartStore, Storage};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the product catalog, and the cart/notification store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: CartStore,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The cart store is rehydrated from `storage` here, once, at
    /// construction.
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: Arc<dyn Storage>) -> Self {
        let store = CartStore::open(storage);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog: Catalog::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart/notification store.
    #[must_use]
    pub fn store(&self) -> &CartStore {
        &self.inner.store
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::store::MemoryStorage;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    /// State over in-memory storage for handler tests.
    pub fn test_state() -> AppState {
        let config = StorefrontConfig {
            host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            data_dir: PathBuf::from("unused"),
            inr_rate: Decimal::new(83, 0),
        };
        AppState::new(config, Arc::new(MemoryStorage::new()))
    }
}
