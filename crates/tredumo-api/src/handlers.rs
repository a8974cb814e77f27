pub mod health;
pub mod nap;
pub mod seo;
pub mod site;
pub mod tenants;
pub mod theme;

pub use health::health_check;
pub use nap::get_nap_report;
pub use seo::{get_curriculum_jsonld, get_meta_tags, get_school_jsonld, get_sitemap};
pub use site::{get_site_config, get_site_theme_css};
pub use tenants::{get_school_config, list_tenants};
pub use theme::{get_design_tokens, get_flat_tokens, get_theme_css};

use tredumo_core::models::tenant::TenantKey;

use crate::error::ApiError;

/// Parse a path segment into a tenant key.
pub(crate) fn parse_key(raw: &str) -> Result<TenantKey, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid tenant key: {}", raw)))
}
