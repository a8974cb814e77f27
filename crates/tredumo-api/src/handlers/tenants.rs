use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tredumo_core::models::school::SchoolConfig;
use tredumo_core::models::tenant::TenantSummary;

use crate::error::ApiError;
use crate::handlers::parse_key;
use crate::state::AppState;

pub async fn list_tenants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TenantSummary>>, ApiError> {
    tracing::info!("Listing tenants");

    let summaries = state.store.list_tenants().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list tenants");
        ApiError::internal("Failed to list tenants").with_details(e.to_string())
    })?;

    Ok(Json(summaries))
}

pub async fn get_school_config(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<SchoolConfig>, ApiError> {
    let key = parse_key(&key)?;
    tracing::info!(tenant = %key, "Fetching school config");

    let config = state.resolver.school_config(Some(&key)).await?;
    Ok(Json(config))
}
