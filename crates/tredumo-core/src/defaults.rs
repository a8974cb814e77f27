//! Built-in default tenant.
//!
//! A single fully-populated profile ships with the platform so every
//! binary works with zero configuration. Deployments with a tenants
//! directory load their own profiles on top; the default then only
//! backs the fallback resolution policy.

use std::collections::BTreeMap;

use crate::models::school::{
    Address, Branding, Coordinates, EmailAddresses, PhoneNumbers, SchoolConfig, SchoolKind,
    TuitionRate, TuitionTable, Weekday,
};
use crate::models::tenant::{TenantKey, TenantProfile};
use crate::models::theme::{
    ColorTokens, DesignTokens, FontFamily, FontSize, FontWeight, RadiusStep, RampStep,
    SemanticColor, ShadowStep, SpaceStep, Typography,
};

/// Key of the built-in tenant
pub const DEFAULT_TENANT_KEY: &str = "tredumo";

/// The complete built-in tenant profile.
pub fn default_tenant() -> TenantProfile {
    TenantProfile {
        key: TenantKey::new(DEFAULT_TENANT_KEY).expect("default tenant key is a valid DNS label"),
        school: default_school_config(),
        tokens: default_design_tokens(),
    }
}

/// Identity record of the built-in tenant.
pub fn default_school_config() -> SchoolConfig {
    SchoolConfig {
        name: "Tredumo International School".to_string(),
        short_name: "Tredumo".to_string(),
        tagline: "Excellence in Education".to_string(),
        description: "Tredumo International School is a leading secondary school in Kampala \
                      offering the national and Cambridge curricula with modern boarding \
                      facilities, a science-first academic program, and a vibrant co-curricular \
                      life."
            .to_string(),
        address: Address {
            street: "Plot 123, Education Avenue".to_string(),
            city: "Kampala".to_string(),
            state: "Central Region".to_string(),
            country: "Uganda".to_string(),
            postal_code: "P.O. Box 12345".to_string(),
            coordinates: Some(Coordinates {
                lat: 0.3476,
                lng: 32.5825,
            }),
        },
        phone: PhoneNumbers {
            primary: "+256 414 123 456".to_string(),
            secondary: Some("+256 772 123 456".to_string()),
            whatsapp: Some("+256 772 123 456".to_string()),
        },
        email: EmailAddresses {
            primary: "info@tredumoschool.ug".to_string(),
            admissions: Some("admissions@tredumoschool.ug".to_string()),
            support: Some("support@tredumoschool.ug".to_string()),
        },
        social: BTreeMap::from([
            (
                "facebook".to_string(),
                "https://facebook.com/tredumoschool".to_string(),
            ),
            (
                "instagram".to_string(),
                "https://instagram.com/tredumoschool".to_string(),
            ),
            (
                "linkedin".to_string(),
                "https://linkedin.com/school/tredumoschool".to_string(),
            ),
            (
                "twitter".to_string(),
                "https://twitter.com/tredumoschool".to_string(),
            ),
            (
                "youtube".to_string(),
                "https://youtube.com/@tredumoschool".to_string(),
            ),
        ]),
        established: 1995,
        kind: SchoolKind::Secondary,
        curriculum: vec![
            "UNEB O-Level".to_string(),
            "UNEB A-Level".to_string(),
            "Cambridge IGCSE".to_string(),
        ],
        grades: vec![
            "Senior 1".to_string(),
            "Senior 2".to_string(),
            "Senior 3".to_string(),
            "Senior 4".to_string(),
            "Senior 5".to_string(),
            "Senior 6".to_string(),
        ],
        keywords: vec![
            "secondary school".to_string(),
            "boarding school".to_string(),
            "international school".to_string(),
            "Cambridge IGCSE".to_string(),
        ],
        local_keywords: vec![
            "school in Kampala".to_string(),
            "best secondary school Uganda".to_string(),
            "boarding school Kampala".to_string(),
        ],
        hours: BTreeMap::from([
            (Weekday::Monday, "8:00 AM - 5:00 PM".to_string()),
            (Weekday::Tuesday, "8:00 AM - 5:00 PM".to_string()),
            (Weekday::Wednesday, "8:00 AM - 5:00 PM".to_string()),
            (Weekday::Thursday, "8:00 AM - 5:00 PM".to_string()),
            (Weekday::Friday, "8:00 AM - 5:00 PM".to_string()),
            (Weekday::Saturday, "9:00 AM - 1:00 PM".to_string()),
        ]),
        branding: Branding {
            logo: "https://cdn.tredumoschool.ug/brand/logo.svg".to_string(),
            favicon: "https://cdn.tredumoschool.ug/brand/favicon.ico".to_string(),
        },
        features: vec![
            "Science laboratories".to_string(),
            "Boarding facilities".to_string(),
            "Sports academy".to_string(),
            "ICT center".to_string(),
            "School transport".to_string(),
        ],
        tuition: TuitionTable {
            bands: BTreeMap::from([
                (
                    "S1-S4".to_string(),
                    TuitionRate {
                        day: 1_200_000,
                        boarding: 2_500_000,
                    },
                ),
                (
                    "S5-S6".to_string(),
                    TuitionRate {
                        day: 1_500_000,
                        boarding: 2_800_000,
                    },
                ),
            ]),
            fees: BTreeMap::from([
                ("registration".to_string(), 50_000),
                ("uniform".to_string(), 350_000),
                ("development".to_string(), 200_000),
                ("examinations".to_string(), 150_000),
            ]),
        },
    }
}

/// Palette of the built-in tenant.
pub fn default_design_tokens() -> DesignTokens {
    DesignTokens {
        colors: ColorTokens {
            primary: ramp([
                "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5",
                "#4338ca", "#3730a3", "#312e81",
            ]),
            secondary: ramp([
                "#f0fdfa", "#ccfbf1", "#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6", "#0d9488",
                "#0f766e", "#115e59", "#134e4a",
            ]),
            accent: ramp([
                "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706",
                "#b45309", "#92400e", "#78350f",
            ]),
            neutral: ramp([
                "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569",
                "#334155", "#1e293b", "#0f172a",
            ]),
            semantic: scale(
                &SemanticColor::ALL,
                &["#16a34a", "#f59e0b", "#dc2626", "#0284c7"],
            ),
        },
        spacing: scale(
            &SpaceStep::ALL,
            &[
                "0.25rem", "0.5rem", "1rem", "1.5rem", "2rem", "3rem", "4rem", "6rem",
            ],
        ),
        radius: scale(
            &RadiusStep::ALL,
            &[
                "0", "0.125rem", "0.375rem", "0.5rem", "0.75rem", "1rem", "9999px",
            ],
        ),
        shadows: scale(
            &ShadowStep::ALL,
            &[
                "0 1px 2px 0 rgb(0 0 0 / 0.05)",
                "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
                "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
                "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
                "0 25px 50px -12px rgb(0 0 0 / 0.25)",
            ],
        ),
        typography: Typography {
            families: scale(
                &FontFamily::ALL,
                &["'Playfair Display', serif", "'Inter', sans-serif"],
            ),
            sizes: scale(
                &FontSize::ALL,
                &[
                    "0.75rem", "0.875rem", "1rem", "1.125rem", "1.25rem", "1.5rem", "1.875rem",
                    "2.25rem", "3rem", "3.75rem",
                ],
            ),
            weights: scale(&FontWeight::ALL, &["300", "400", "500", "600", "700"]),
        },
    }
}

fn ramp(values: [&str; 10]) -> BTreeMap<RampStep, String> {
    scale(&RampStep::ALL, &values)
}

fn scale<K: Ord + Copy>(steps: &[K], values: &[&str]) -> BTreeMap<K, String> {
    debug_assert_eq!(steps.len(), values.len());
    steps
        .iter()
        .zip(values.iter())
        .map(|(step, value)| (*step, value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{validate_design_tokens, validate_school_config};

    #[test]
    fn default_school_config_is_valid() {
        validate_school_config(&default_school_config()).unwrap();
    }

    #[test]
    fn default_design_tokens_are_complete() {
        validate_design_tokens(&default_design_tokens()).unwrap();
    }

    #[test]
    fn default_tenant_key_matches_constant() {
        assert_eq!(default_tenant().key.as_str(), DEFAULT_TENANT_KEY);
    }

    #[test]
    fn repeated_calls_return_identical_records() {
        assert_eq!(default_school_config(), default_school_config());
        assert_eq!(default_design_tokens(), default_design_tokens());
    }
}
