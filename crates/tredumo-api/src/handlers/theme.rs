use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tredumo_core::models::theme::DesignTokens;
use tredumo_core::stylesheet::{serialize_design_tokens, theme_stylesheet};

use crate::error::ApiError;
use crate::handlers::parse_key;
use crate::state::AppState;

pub async fn get_design_tokens(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<DesignTokens>, ApiError> {
    let key = parse_key(&key)?;
    tracing::info!(tenant = %key, "Fetching design tokens");

    let tokens = state.resolver.design_tokens(Some(&key)).await?;
    Ok(Json(tokens))
}

/// Flat `<category>-<name>-<step>` -> value mapping
pub async fn get_flat_tokens(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<BTreeMap<String, String>>, ApiError> {
    let key = parse_key(&key)?;

    let tokens = state.resolver.design_tokens(Some(&key)).await?;
    Ok(Json(serialize_design_tokens(&tokens)))
}

pub async fn get_theme_css(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let key = parse_key(&key)?;
    tracing::info!(tenant = %key, "Rendering theme stylesheet");

    let tokens = state.resolver.design_tokens(Some(&key)).await?;
    let css = theme_stylesheet(&tokens);

    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css))
}
