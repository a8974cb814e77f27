use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Tenants
        .route("/api/v1/tenants", get(handlers::list_tenants))
        .route("/api/v1/tenants/{key}/config", get(handlers::get_school_config))
        .route("/api/v1/tenants/{key}/nap", get(handlers::get_nap_report))

        // Theme
        .route("/api/v1/tenants/{key}/tokens", get(handlers::get_design_tokens))
        .route("/api/v1/tenants/{key}/tokens/flat", get(handlers::get_flat_tokens))
        .route("/api/v1/tenants/{key}/theme.css", get(handlers::get_theme_css))

        // SEO
        .route("/api/v1/tenants/{key}/seo/school.json", get(handlers::get_school_jsonld))
        .route("/api/v1/tenants/{key}/seo/curriculum.json", get(handlers::get_curriculum_jsonld))
        .route("/api/v1/tenants/{key}/seo/meta", get(handlers::get_meta_tags))
        .route("/api/v1/tenants/{key}/sitemap.xml", get(handlers::get_sitemap))

        // Host-addressed (subdomain) routes
        .route("/api/v1/site/config", get(handlers::get_site_config))
        .route("/api/v1/site/theme.css", get(handlers::get_site_theme_css))

        .with_state(state)
}
