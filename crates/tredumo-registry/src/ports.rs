use async_trait::async_trait;
use tredumo_core::error::Result;
use tredumo_core::models::{TenantKey, TenantProfile, TenantSummary};

/// Port for tenant profile storage.
///
/// The trait is async so the resolver's signature survives a remote
/// backend; the shipped implementation is the in-memory store.
#[async_trait]
pub trait TenantStore: Send + Sync {
    /// Retrieve a tenant by key
    async fn get_tenant(&self, key: &TenantKey) -> Result<Option<TenantProfile>>;

    /// List all tenant summaries, ordered by key
    async fn list_tenants(&self) -> Result<Vec<TenantSummary>>;

    /// Store a tenant profile, replacing any existing profile under the
    /// same key. Rejects profiles that fail invariant validation.
    async fn put_tenant(&self, profile: TenantProfile) -> Result<()>;
}
