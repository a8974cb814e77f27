//! Tenant resolution: optional key in, exactly one profile out.

use std::sync::Arc;

use tredumo_core::error::{Result, TredumoError};
use tredumo_core::models::school::SchoolConfig;
use tredumo_core::models::tenant::{TenantKey, TenantProfile};
use tredumo_core::models::theme::DesignTokens;
use tredumo_core::validate::validate_design_tokens;

use crate::ports::TenantStore;

/// What a resolver does with a key that matches no tenant.
///
/// A resolver instance is built with exactly one policy and applies it
/// on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKeyPolicy {
    /// Fail with `TenantNotFound`
    Error,
    /// Serve the default tenant instead
    UseDefault,
}

/// Resolves an optional tenant key to one profile.
///
/// A `None` key always resolves to the default tenant; an unknown key
/// follows the configured `UnknownKeyPolicy`.
#[derive(Clone)]
pub struct TenantResolver {
    store: Arc<dyn TenantStore>,
    default_key: TenantKey,
    on_unknown: UnknownKeyPolicy,
}

impl TenantResolver {
    pub fn new(
        store: Arc<dyn TenantStore>,
        default_key: TenantKey,
        on_unknown: UnknownKeyPolicy,
    ) -> Self {
        Self {
            store,
            default_key,
            on_unknown,
        }
    }

    pub fn default_key(&self) -> &TenantKey {
        &self.default_key
    }

    /// Resolve a key to a full profile.
    pub async fn resolve(&self, key: Option<&TenantKey>) -> Result<TenantProfile> {
        let key = key.unwrap_or(&self.default_key);

        if let Some(profile) = self.store.get_tenant(key).await? {
            return Ok(profile);
        }

        // The default tenant itself being absent is always an error
        if *key == self.default_key || self.on_unknown == UnknownKeyPolicy::Error {
            return Err(TredumoError::TenantNotFound {
                key: key.to_string(),
            });
        }

        self.store
            .get_tenant(&self.default_key)
            .await?
            .ok_or_else(|| TredumoError::TenantNotFound {
                key: self.default_key.to_string(),
            })
    }

    /// The tenant's identity record.
    pub async fn school_config(&self, key: Option<&TenantKey>) -> Result<SchoolConfig> {
        Ok(self.resolve(key).await?.school)
    }

    /// The tenant's palette, guaranteed complete.
    ///
    /// Completeness is re-checked here so no consumer can end up
    /// indexing an absent step, whatever the store handed out.
    pub async fn design_tokens(&self, key: Option<&TenantKey>) -> Result<DesignTokens> {
        let tokens = self.resolve(key).await?.tokens;
        validate_design_tokens(&tokens)?;
        Ok(tokens)
    }
}

/// Extract a tenant key from a request host.
///
/// The leftmost DNS label of a multi-label host is the key
/// (`akademia.tredumo.app` -> `akademia`). Ports are ignored. Apex
/// domains, single-label hosts (`localhost`), IP literals, and the
/// `www` label resolve to no key, i.e. the default tenant.
pub fn tenant_key_from_host(host: &str) -> Option<TenantKey> {
    if host.starts_with('[') {
        // Bracketed IPv6 literal
        return None;
    }

    let host = host.split(':').next()?;

    if host.parse::<std::net::IpAddr>().is_ok() {
        return None;
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 3 {
        return None;
    }

    let label = labels[0].to_ascii_lowercase();
    if label == "www" {
        return None;
    }

    TenantKey::new(label).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTenantStore;
    use tredumo_core::defaults::default_tenant;
    use tredumo_core::models::theme::RampStep;

    fn default_key() -> TenantKey {
        TenantKey::new("tredumo").unwrap()
    }

    async fn store_with_akademia() -> Arc<MemoryTenantStore> {
        let store = MemoryTenantStore::with_default_tenant();

        let mut profile = default_tenant();
        profile.key = TenantKey::new("akademia").unwrap();
        profile.school.name = "Akademia High School".to_string();
        store.put_tenant(profile).await.unwrap();

        Arc::new(store)
    }

    #[tokio::test]
    async fn none_key_resolves_default() {
        let store = store_with_akademia().await;
        let resolver = TenantResolver::new(store, default_key(), UnknownKeyPolicy::Error);

        let profile = resolver.resolve(None).await.unwrap();
        assert_eq!(profile.key.as_str(), "tredumo");
    }

    #[tokio::test]
    async fn known_key_resolves_that_tenant() {
        let store = store_with_akademia().await;
        let resolver = TenantResolver::new(store, default_key(), UnknownKeyPolicy::Error);

        let key = TenantKey::new("akademia").unwrap();
        let profile = resolver.resolve(Some(&key)).await.unwrap();
        assert_eq!(profile.school.name, "Akademia High School");
    }

    #[tokio::test]
    async fn strict_resolver_errors_on_unknown_key_every_time() {
        let store = store_with_akademia().await;
        let resolver = TenantResolver::new(store, default_key(), UnknownKeyPolicy::Error);

        let key = TenantKey::new("nonexistent-tenant").unwrap();
        for _ in 0..3 {
            let err = resolver.resolve(Some(&key)).await.unwrap_err();
            assert!(
                matches!(err, TredumoError::TenantNotFound { ref key } if key == "nonexistent-tenant")
            );
        }
    }

    #[tokio::test]
    async fn fallback_resolver_serves_default_for_unknown_key_every_time() {
        let store = store_with_akademia().await;
        let resolver = TenantResolver::new(store, default_key(), UnknownKeyPolicy::UseDefault);

        let key = TenantKey::new("nonexistent-tenant").unwrap();
        for _ in 0..3 {
            let profile = resolver.resolve(Some(&key)).await.unwrap();
            assert_eq!(profile.key.as_str(), "tredumo");
        }
    }

    #[tokio::test]
    async fn missing_default_tenant_is_an_error() {
        let store = Arc::new(MemoryTenantStore::new());
        let resolver = TenantResolver::new(store, default_key(), UnknownKeyPolicy::UseDefault);

        assert!(resolver.resolve(None).await.is_err());
    }

    #[tokio::test]
    async fn design_tokens_resolve_complete() {
        let store = Arc::new(MemoryTenantStore::with_default_tenant());
        let resolver = TenantResolver::new(store, default_key(), UnknownKeyPolicy::Error);

        let tokens = resolver.design_tokens(None).await.unwrap();
        assert!(tokens.colors.primary.contains_key(&RampStep::S500));
    }

    #[test]
    fn host_extraction() {
        assert_eq!(
            tenant_key_from_host("akademia.tredumo.app").unwrap().as_str(),
            "akademia"
        );
        assert_eq!(
            tenant_key_from_host("st-marys.tredumo.app:8080").unwrap().as_str(),
            "st-marys"
        );
        assert_eq!(
            tenant_key_from_host("AKADEMIA.tredumo.app").unwrap().as_str(),
            "akademia"
        );

        assert!(tenant_key_from_host("tredumo.app").is_none());
        assert!(tenant_key_from_host("localhost").is_none());
        assert!(tenant_key_from_host("localhost:3002").is_none());
        assert!(tenant_key_from_host("127.0.0.1:3002").is_none());
        assert!(tenant_key_from_host("[::1]:3002").is_none());
        assert!(tenant_key_from_host("www.tredumo.app").is_none());
    }
}
