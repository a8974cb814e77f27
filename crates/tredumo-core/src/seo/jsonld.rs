//! schema.org JSON-LD structured data.

use serde_json::{json, Value};

use crate::models::school::{SchoolConfig, SchoolKind};

use super::join_url;

/// schema.org type for an institution category.
fn schema_type(kind: SchoolKind) -> &'static str {
    match kind {
        SchoolKind::Primary => "ElementarySchool",
        SchoolKind::Secondary => "HighSchool",
        SchoolKind::University => "CollegeOrUniversity",
        SchoolKind::Vocational => "School",
    }
}

/// JSON-LD object describing the school itself.
///
/// Carries the NAP data search engines cross-check against directory
/// listings, plus geo coordinates and social profiles (`sameAs`).
pub fn school_jsonld(school: &SchoolConfig, base_url: &str) -> Value {
    let mut doc = json!({
        "@context": "https://schema.org",
        "@type": schema_type(school.kind),
        "name": school.name,
        "alternateName": school.short_name,
        "description": school.description,
        "slogan": school.tagline,
        "foundingDate": school.established.to_string(),
        "url": join_url(base_url, "/"),
        "logo": school.branding.logo,
        "telephone": school.phone.primary,
        "email": school.email.primary,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": school.address.street,
            "addressLocality": school.address.city,
            "addressRegion": school.address.state,
            "postalCode": school.address.postal_code,
            "addressCountry": school.address.country,
        },
    });

    if let Some(coords) = school.address.coordinates {
        doc["geo"] = json!({
            "@type": "GeoCoordinates",
            "latitude": coords.lat,
            "longitude": coords.lng,
        });
    }

    if !school.social.is_empty() {
        // BTreeMap order keeps the list stable across runs
        let profiles: Vec<&String> = school.social.values().collect();
        doc["sameAs"] = json!(profiles);
    }

    doc
}

/// JSON-LD `ItemList` of the curricula offered, order-preserving.
pub fn curriculum_jsonld(school: &SchoolConfig, base_url: &str) -> Value {
    let items: Vec<Value> = school
        .curriculum
        .iter()
        .enumerate()
        .map(|(index, name)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "item": {
                    "@type": "Course",
                    "name": name,
                    "provider": {
                        "@type": schema_type(school.kind),
                        "name": school.name,
                        "url": join_url(base_url, "/"),
                    },
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": format!("{} curricula", school.short_name),
        "itemListElement": items,
    })
}
