use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tredumo_api::config::ApiConfig;
use tredumo_api::router::create_router;
use tredumo_api::state::AppState;
use tredumo_core::defaults::{default_tenant, DEFAULT_TENANT_KEY};
use tredumo_core::models::tenant::TenantKey;
use tredumo_registry::file::seed_store;
use tredumo_registry::memory::MemoryTenantStore;
use tredumo_registry::ports::TenantStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tredumo_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();

    let default_key = match TenantKey::new(&config.default_tenant) {
        Ok(key) => key,
        Err(e) => {
            tracing::error!("Invalid TREDUMO_DEFAULT_TENANT: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        port = config.port,
        default_tenant = %default_key,
        base_url = %config.base_url,
        "Starting Tredumo API server"
    );

    // Initialize the tenant store based on TREDUMO_TENANTS_DIR
    let store = match &config.tenants_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Loading tenants from directory");

            let store = MemoryTenantStore::new();
            match seed_store(&store, dir).await {
                Ok(count) => tracing::info!(count = count, "Tenants loaded"),
                Err(e) => {
                    tracing::error!("Failed to load tenants: {}", e);
                    tracing::error!(
                        "Remediation:\n\
                        1. Ensure the directory exists and is readable\n\
                        2. Check each *.toml file parses and validates (tredumo doctor)\n\
                        3. Remove duplicate tenant keys"
                    );
                    std::process::exit(1);
                }
            }

            // The default tenant must resolve; the built-in profile can
            // stand in only for its own key
            if store.get_tenant(&default_key).await.unwrap().is_none() {
                if default_key.as_str() == DEFAULT_TENANT_KEY {
                    tracing::info!("Default tenant not in directory, using built-in profile");
                    store.put_tenant(default_tenant()).await.unwrap();
                } else {
                    tracing::error!(
                        "Default tenant '{}' not found in {}",
                        default_key,
                        dir.display()
                    );
                    std::process::exit(1);
                }
            }

            store
        }
        None => {
            tracing::info!("Serving the built-in default tenant (set TREDUMO_TENANTS_DIR to load tenant files)");
            MemoryTenantStore::with_default_tenant()
        }
    };

    let state = Arc::new(AppState::new(
        Arc::new(store),
        default_key,
        config.base_url.clone(),
    ));

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.unwrap();
}
