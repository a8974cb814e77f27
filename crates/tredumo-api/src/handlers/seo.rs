use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::Value;
use tredumo_core::seo::{
    curriculum_jsonld, page_meta, school_jsonld, sitemap_entries, sitemap_xml, MetaTags,
};

use crate::dto::MetaQuery;
use crate::error::ApiError;
use crate::handlers::parse_key;
use crate::state::AppState;

pub async fn get_school_jsonld(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let key = parse_key(&key)?;
    tracing::info!(tenant = %key, "Generating school JSON-LD");

    let config = state.resolver.school_config(Some(&key)).await?;
    Ok(Json(school_jsonld(&config, &state.base_url)))
}

pub async fn get_curriculum_jsonld(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let key = parse_key(&key)?;

    let config = state.resolver.school_config(Some(&key)).await?;
    Ok(Json(curriculum_jsonld(&config, &state.base_url)))
}

pub async fn get_meta_tags(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Query(query): Query<MetaQuery>,
) -> Result<Json<MetaTags>, ApiError> {
    let key = parse_key(&key)?;

    let config = state.resolver.school_config(Some(&key)).await?;
    let meta = page_meta(&config, &state.base_url, query.page.as_deref(), &query.path);
    Ok(Json(meta))
}

pub async fn get_sitemap(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let key = parse_key(&key)?;
    tracing::info!(tenant = %key, "Generating sitemap");

    // Resolution confirms the tenant exists before we emit its sitemap
    state.resolver.school_config(Some(&key)).await?;

    let entries = sitemap_entries(&state.base_url, Utc::now());
    let xml = sitemap_xml(&entries);

    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}
