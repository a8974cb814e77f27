//! Sitemap generation for the platform's fixed route set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::join_url;

/// Expected change cadence of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
        }
    }
}

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: DateTime<Utc>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// The site's public routes with their cadence and crawl priority.
const SITE_ROUTES: [(&str, ChangeFreq, f32); 6] = [
    ("/", ChangeFreq::Weekly, 1.0),
    ("/about", ChangeFreq::Monthly, 0.8),
    ("/academics", ChangeFreq::Monthly, 0.8),
    ("/admissions", ChangeFreq::Weekly, 0.9),
    ("/fees", ChangeFreq::Monthly, 0.7),
    ("/contact", ChangeFreq::Yearly, 0.5),
];

/// Sitemap entries for every public route, stamped with the caller's
/// `lastmod` timestamp.
pub fn sitemap_entries(base_url: &str, last_modified: DateTime<Utc>) -> Vec<SitemapEntry> {
    SITE_ROUTES
        .iter()
        .map(|(path, changefreq, priority)| SitemapEntry {
            loc: join_url(base_url, path),
            lastmod: last_modified,
            changefreq: *changefreq,
            priority: *priority,
        })
        .collect()
}

/// Render entries as a sitemaps.org `<urlset>` document.
pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(256 + entries.len() * 160);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&entry.loc)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.lastmod.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.changefreq.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
