//! HTTP surface tests driven through the router with `oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use tredumo_api::router::create_router;
use tredumo_api::state::AppState;
use tredumo_core::defaults::default_tenant;
use tredumo_core::models::tenant::TenantKey;
use tredumo_registry::memory::MemoryTenantStore;
use tredumo_registry::ports::TenantStore;

const BODY_LIMIT: usize = 1024 * 1024;

async fn test_state() -> Arc<AppState> {
    let store = MemoryTenantStore::with_default_tenant();

    let mut second = default_tenant();
    second.key = TenantKey::new("akademia").unwrap();
    second.school.name = "Akademia High School".to_string();
    store.put_tenant(second).await.unwrap();

    Arc::new(AppState::new(
        Arc::new(store),
        TenantKey::new("tredumo").unwrap(),
        "https://tredumoschool.ug".to_string(),
    ))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = create_router(test_state().await);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "tredumo-api");
}

#[tokio::test]
async fn lists_tenants_ordered_by_key() {
    let app = create_router(test_state().await);

    let response = app.oneshot(get("/api/v1/tenants")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let tenants = json.as_array().unwrap();

    assert_eq!(tenants.len(), 2);
    assert_eq!(tenants[0]["key"], "akademia");
    assert_eq!(tenants[1]["key"], "tredumo");
}

#[tokio::test]
async fn serves_school_config_by_key() {
    let app = create_router(test_state().await);

    let response = app.oneshot(get("/api/v1/tenants/tredumo/config")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["name"], "Tredumo International School");
    assert_eq!(json["phone"]["primary"], "+256 414 123 456");
    assert_eq!(json["address"]["coordinates"]["lat"], 0.3476);
}

#[tokio::test]
async fn unknown_tenant_is_404_with_json_error() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(get("/api/v1/tenants/nonexistent-tenant/config"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("nonexistent-tenant"));
}

#[tokio::test]
async fn malformed_tenant_key_is_400() {
    let app = create_router(test_state().await);

    let response = app.oneshot(get("/api/v1/tenants/Not%20Valid/config")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn theme_css_declares_tokens() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(get("/api/v1/tenants/tredumo/theme.css"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/css"));

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let css = String::from_utf8(body.to_vec()).unwrap();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--color-primary-500: #6366f1;"));
}

#[tokio::test]
async fn flat_tokens_expose_naming_convention() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(get("/api/v1/tenants/tredumo/tokens/flat"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["color-primary-500"], "#6366f1");
    assert_eq!(json.as_object().unwrap().len(), 81);
}

#[tokio::test]
async fn nap_report_passes_for_default_tenant() {
    let app = create_router(test_state().await);

    let response = app.oneshot(get("/api/v1/tenants/tredumo/nap")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["is_valid"], true);
    assert_eq!(json["issues"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn school_jsonld_has_schema_context() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(get("/api/v1/tenants/tredumo/seo/school.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["@context"], "https://schema.org");
    assert_eq!(json["@type"], "HighSchool");
    assert_eq!(json["url"], "https://tredumoschool.ug/");
}

#[tokio::test]
async fn meta_endpoint_applies_page_pattern() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(get(
            "/api/v1/tenants/tredumo/seo/meta?page=Admissions&path=/admissions",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["title"], "Admissions | Tredumo");
    assert_eq!(json["canonical"], "https://tredumoschool.ug/admissions");
}

#[tokio::test]
async fn sitemap_is_xml() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(get("/api/v1/tenants/tredumo/sitemap.xml"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/xml"));

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let xml = String::from_utf8(body.to_vec()).unwrap();
    assert!(xml.contains("<urlset"));
    assert!(xml.contains("https://tredumoschool.ug/admissions"));
}

#[tokio::test]
async fn site_config_resolves_subdomain_host() {
    let app = create_router(test_state().await);

    let request = Request::builder()
        .uri("/api/v1/site/config")
        .header("host", "akademia.tredumo.app")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["name"], "Akademia High School");
}

#[tokio::test]
async fn site_config_falls_back_to_default_for_unknown_subdomain() {
    let app = create_router(test_state().await);

    let request = Request::builder()
        .uri("/api/v1/site/config")
        .header("host", "unknown-school.tredumo.app")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["name"], "Tredumo International School");
}

#[tokio::test]
async fn site_theme_serves_default_without_subdomain() {
    let app = create_router(test_state().await);

    let request = Request::builder()
        .uri("/api/v1/site/theme.css")
        .header("host", "localhost:3002")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let css = String::from_utf8(body.to_vec()).unwrap();
    assert!(css.contains("--font-family-body"));
}
