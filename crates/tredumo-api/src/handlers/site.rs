//! Host-addressed routes.
//!
//! The tenant comes from the request's `Host` header subdomain; an
//! unrecognized or absent subdomain serves the default tenant.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use tredumo_core::models::school::SchoolConfig;
use tredumo_core::stylesheet::theme_stylesheet;
use tredumo_registry::resolver::tenant_key_from_host;

use crate::error::ApiError;
use crate::state::AppState;

fn host_key(headers: &HeaderMap) -> Option<tredumo_core::models::tenant::TenantKey> {
    let host = headers.get(header::HOST)?.to_str().ok()?;
    tenant_key_from_host(host)
}

pub async fn get_site_config(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SchoolConfig>, ApiError> {
    let key = host_key(&headers);
    tracing::info!(tenant = ?key.as_ref().map(|k| k.as_str()), "Resolving site config by host");

    let config = state.site_resolver.school_config(key.as_ref()).await?;
    Ok(Json(config))
}

pub async fn get_site_theme_css(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let key = host_key(&headers);

    let tokens = state.site_resolver.design_tokens(key.as_ref()).await?;
    let css = theme_stylesheet(&tokens);

    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css))
}
