//! In-memory tenant store.
//!
//! This implementation uses `RwLock::unwrap()` intentionally. Lock
//! poisoning only occurs when another thread panicked while holding the
//! lock, which is an unrecoverable state. Locks are held only for the
//! duration of a map operation, never across an await point.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tredumo_core::defaults::default_tenant;
use tredumo_core::error::Result;
use tredumo_core::models::{TenantKey, TenantProfile, TenantSummary};
use tredumo_core::validate::{validate_design_tokens, validate_school_config};

use crate::ports::TenantStore;

/// In-memory implementation of `TenantStore`
#[derive(Debug, Clone, Default)]
pub struct MemoryTenantStore {
    tenants: Arc<RwLock<HashMap<TenantKey, TenantProfile>>>,
}

impl MemoryTenantStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the built-in default tenant
    pub fn with_default_tenant() -> Self {
        let store = Self::new();
        let profile = default_tenant();
        store
            .tenants
            .write()
            .unwrap()
            .insert(profile.key.clone(), profile);
        store
    }

    /// Number of stored tenants
    pub fn len(&self) -> usize {
        self.tenants.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TenantStore for MemoryTenantStore {
    async fn get_tenant(&self, key: &TenantKey) -> Result<Option<TenantProfile>> {
        let tenants = self.tenants.read().unwrap();
        Ok(tenants.get(key).cloned())
    }

    async fn list_tenants(&self) -> Result<Vec<TenantSummary>> {
        let tenants = self.tenants.read().unwrap();

        let mut summaries: Vec<TenantSummary> = tenants.values().map(TenantSummary::from).collect();
        summaries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(summaries)
    }

    async fn put_tenant(&self, profile: TenantProfile) -> Result<()> {
        validate_school_config(&profile.school)?;
        validate_design_tokens(&profile.tokens)?;

        let mut tenants = self.tenants.write().unwrap();
        tenants.insert(profile.key.clone(), profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tredumo_core::models::theme::RampStep;

    #[test]
    fn seeded_store_resolves_default_key() {
        let store = MemoryTenantStore::with_default_tenant();
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn get_returns_stored_profile() {
        let store = MemoryTenantStore::with_default_tenant();
        let key = TenantKey::new("tredumo").unwrap();

        let profile = store.get_tenant(&key).await.unwrap().unwrap();
        assert_eq!(profile.school.name, "Tredumo International School");
    }

    #[tokio::test]
    async fn get_unknown_key_returns_none() {
        let store = MemoryTenantStore::with_default_tenant();
        let key = TenantKey::new("nonexistent-tenant").unwrap();

        assert!(store.get_tenant(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_then_list_orders_by_key() {
        let store = MemoryTenantStore::new();

        let mut second = default_tenant();
        second.key = TenantKey::new("zebra-academy").unwrap();
        second.school.name = "Zebra Academy".to_string();
        store.put_tenant(second).await.unwrap();

        let mut first = default_tenant();
        first.key = TenantKey::new("akademia").unwrap();
        first.school.name = "Akademia".to_string();
        store.put_tenant(first).await.unwrap();

        let summaries = store.list_tenants().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].key.as_str(), "akademia");
        assert_eq!(summaries[1].key.as_str(), "zebra-academy");
    }

    #[tokio::test]
    async fn put_rejects_invalid_school() {
        let store = MemoryTenantStore::new();

        let mut profile = default_tenant();
        profile.school.name = String::new();

        assert!(store.put_tenant(profile).await.is_err());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn put_rejects_partial_palette() {
        let store = MemoryTenantStore::new();

        let mut profile = default_tenant();
        profile.tokens.colors.neutral.remove(&RampStep::S400);

        assert!(store.put_tenant(profile).await.is_err());
    }

    #[tokio::test]
    async fn put_replaces_existing_profile() {
        let store = MemoryTenantStore::with_default_tenant();
        let key = TenantKey::new("tredumo").unwrap();

        let mut updated = default_tenant();
        updated.school.tagline = "A new tagline".to_string();
        store.put_tenant(updated).await.unwrap();

        let profile = store.get_tenant(&key).await.unwrap().unwrap();
        assert_eq!(profile.school.tagline, "A new tagline");
        assert_eq!(store.len(), 1);
    }
}
