//! Search-engine metadata generators.
//!
//! Pure transforms from a `SchoolConfig` (plus the deployment's base
//! URL) into the artifacts crawlers consume: JSON-LD structured data,
//! per-page meta tags, and the sitemap.

pub mod jsonld;
pub mod meta;
pub mod sitemap;

pub use jsonld::{curriculum_jsonld, school_jsonld};
pub use meta::{page_meta, MetaTags};
pub use sitemap::{sitemap_entries, sitemap_xml, ChangeFreq, SitemapEntry};

/// Join a base URL and a path without doubling slashes.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.is_empty() || path == "/" {
        return format!("{}/", base);
    }
    format!("{}/{}", base, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::join_url;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("https://x.ug", "/about"), "https://x.ug/about");
        assert_eq!(join_url("https://x.ug/", "about"), "https://x.ug/about");
        assert_eq!(join_url("https://x.ug/", "/"), "https://x.ug/");
        assert_eq!(join_url("https://x.ug", ""), "https://x.ug/");
    }
}
