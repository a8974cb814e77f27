use std::sync::Arc;

use tredumo_core::models::tenant::TenantKey;
use tredumo_registry::ports::TenantStore;
use tredumo_registry::resolver::{TenantResolver, UnknownKeyPolicy};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TenantStore>,

    /// Strict resolver for key-addressed routes: an unknown key is a 404
    pub resolver: TenantResolver,

    /// Fallback resolver for Host-addressed routes: an unrecognized
    /// subdomain serves the default tenant
    pub site_resolver: TenantResolver,

    /// Public base URL used in SEO artifacts
    pub base_url: String,
}

impl AppState {
    pub fn new(store: Arc<dyn TenantStore>, default_key: TenantKey, base_url: String) -> Self {
        let resolver =
            TenantResolver::new(store.clone(), default_key.clone(), UnknownKeyPolicy::Error);
        let site_resolver =
            TenantResolver::new(store.clone(), default_key, UnknownKeyPolicy::UseDefault);

        Self {
            store,
            resolver,
            site_resolver,
            base_url,
        }
    }
}
