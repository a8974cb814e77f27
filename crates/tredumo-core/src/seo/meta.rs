//! Per-page meta tags.

use serde::{Deserialize, Serialize};

use crate::models::school::SchoolConfig;

use super::join_url;

/// Head metadata for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTags {
    pub title: String,
    pub description: String,

    /// Comma-joined keyword list
    pub keywords: String,

    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
    pub twitter_card: String,
}

/// Build the meta tags for a page.
///
/// With a page name the title follows the `"{page} | {short_name}"`
/// pattern; without one (the home page) it is `"{name} — {tagline}"`.
/// Keywords merge the general and local keyword lists, general first.
pub fn page_meta(
    school: &SchoolConfig,
    base_url: &str,
    page: Option<&str>,
    path: &str,
) -> MetaTags {
    let title = match page {
        Some(page) => format!("{} | {}", page, school.short_name),
        None => format!("{} — {}", school.name, school.tagline),
    };

    let keywords = school
        .keywords
        .iter()
        .chain(school.local_keywords.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let canonical = join_url(base_url, path);

    MetaTags {
        og_title: title.clone(),
        og_description: school.description.clone(),
        og_image: school.branding.logo.clone(),
        og_url: canonical.clone(),
        twitter_card: "summary_large_image".to_string(),
        title,
        description: school.description.clone(),
        keywords,
        canonical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_school_config;

    #[test]
    fn home_page_title_uses_name_and_tagline() {
        let school = default_school_config();
        let meta = page_meta(&school, "https://tredumoschool.ug", None, "/");

        assert_eq!(meta.title, "Tredumo International School — Excellence in Education");
        assert_eq!(meta.canonical, "https://tredumoschool.ug/");
        assert_eq!(meta.og_url, meta.canonical);
    }

    #[test]
    fn inner_page_title_uses_page_pattern() {
        let school = default_school_config();
        let meta = page_meta(&school, "https://tredumoschool.ug", Some("Admissions"), "/admissions");

        assert_eq!(meta.title, "Admissions | Tredumo");
        assert_eq!(meta.canonical, "https://tredumoschool.ug/admissions");
    }

    #[test]
    fn keywords_merge_general_then_local() {
        let school = default_school_config();
        let meta = page_meta(&school, "https://tredumoschool.ug", None, "/");

        assert!(meta.keywords.starts_with("secondary school, "));
        assert!(meta.keywords.ends_with("boarding school Kampala"));
    }
}
