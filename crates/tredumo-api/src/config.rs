use std::env;
use std::path::PathBuf;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,

    /// Directory of tenant TOML files; without it only the built-in
    /// default tenant is served
    pub tenants_dir: Option<PathBuf>,

    /// Key served when a request names no tenant
    pub default_tenant: String,

    /// Public base URL used in SEO artifacts
    pub base_url: String,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("TREDUMO_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3002);

        let cors_origin =
            env::var("TREDUMO_CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let tenants_dir = env::var("TREDUMO_TENANTS_DIR").ok().map(PathBuf::from);

        let default_tenant =
            env::var("TREDUMO_DEFAULT_TENANT").unwrap_or_else(|_| "tredumo".to_string());

        let base_url = env::var("TREDUMO_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));

        Self {
            port,
            cors_origin,
            tenants_dir,
            default_tenant,
            base_url,
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Check if tenants are loaded from files
    pub fn uses_file_tenants(&self) -> bool {
        self.tenants_dir.is_some()
    }
}
