//! Invariant validation.
//!
//! Two layers with different failure modes:
//!
//! - `validate_school_config` / `validate_design_tokens` are the eager
//!   construction-time gates. They fail with the first violated
//!   invariant, so a broken tenant record never reaches a consumer.
//! - `validate_nap` is a report: every check runs, all issues come back
//!   together in check order. NAP (Name/Address/Phone) consistency is
//!   what local-search indexing keys on, so operators need the full
//!   list, not the first hit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, TredumoError};
use crate::models::school::SchoolConfig;
use crate::models::theme::{
    DesignTokens, FontFamily, FontSize, FontWeight, RadiusStep, RampStep, SemanticColor,
    ShadowStep, SpaceStep,
};

/// Result of the NAP consistency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NapReport {
    pub is_valid: bool,

    /// Human-readable problems, in check order
    pub issues: Vec<String>,
}

/// Run the NAP consistency checks against a school record.
///
/// Checks, in order: name, street, city, and primary phone non-empty;
/// primary phone shaped `+<country code>` followed by at least three
/// digit groups; primary email shaped `local@domain.tld`; coordinates
/// present and not the null island point. Format checks are skipped for
/// empty values — emptiness is already its own issue.
pub fn validate_nap(school: &SchoolConfig) -> NapReport {
    let mut issues = Vec::new();

    if school.name.trim().is_empty() {
        issues.push("name is empty".to_string());
    }

    if school.address.street.trim().is_empty() {
        issues.push("address.street is empty".to_string());
    }

    if school.address.city.trim().is_empty() {
        issues.push("address.city is empty".to_string());
    }

    let phone = school.phone.primary.trim();
    if phone.is_empty() {
        issues.push("phone.primary is empty".to_string());
    } else if !phone_matches(phone) {
        issues.push(format!(
            "phone.primary '{}' does not match +<country code> followed by digit groups",
            phone
        ));
    }

    let email = school.email.primary.trim();
    if email.is_empty() {
        issues.push("email.primary is empty".to_string());
    } else if !email_matches(email) {
        issues.push(format!("email.primary '{}' is not a valid email address", email));
    }

    match school.address.coordinates {
        Some(coords) if coords.lat != 0.0 || coords.lng != 0.0 => {}
        _ => issues.push("address.coordinates are missing or zero".to_string()),
    }

    NapReport {
        is_valid: issues.is_empty(),
        issues,
    }
}

/// Eagerly check the structural invariants of a school record.
///
/// Fails with the first violation so load paths surface errors close to
/// their cause.
pub fn validate_school_config(school: &SchoolConfig) -> Result<()> {
    if school.name.trim().is_empty() {
        return Err(TredumoError::validation("name", "must not be empty"));
    }

    if school.address.city.trim().is_empty() {
        return Err(TredumoError::validation("address.city", "must not be empty"));
    }

    if school.phone.primary.trim().is_empty() {
        return Err(TredumoError::validation("phone.primary", "must not be empty"));
    }

    if school.grades.is_empty() {
        return Err(TredumoError::validation(
            "grades",
            "at least one grade level is required",
        ));
    }

    if school.curriculum.is_empty() {
        return Err(TredumoError::validation(
            "curriculum",
            "at least one curriculum is required",
        ));
    }

    if let Some(coords) = school.address.coordinates {
        if !(-90.0..=90.0).contains(&coords.lat) {
            return Err(TredumoError::validation(
                "address.coordinates.lat",
                format!("{} is outside -90..=90", coords.lat),
            ));
        }
        if !(-180.0..=180.0).contains(&coords.lng) {
            return Err(TredumoError::validation(
                "address.coordinates.lng",
                format!("{} is outside -180..=180", coords.lng),
            ));
        }
    }

    if !(1800..=2100).contains(&school.established) {
        return Err(TredumoError::validation(
            "established",
            format!("{} is not a plausible year", school.established),
        ));
    }

    Ok(())
}

/// Eagerly check that a palette defines every step of every scale with a
/// non-empty value.
///
/// Downstream styling indexes tokens by step, so a partial palette is
/// rejected here rather than surfacing as a missing CSS variable.
pub fn validate_design_tokens(tokens: &DesignTokens) -> Result<()> {
    for (name, ramp) in tokens.colors.ramps() {
        check_scale(&format!("tokens.colors.{}", name), ramp, &RampStep::ALL, |s| s.label())?;
    }

    check_scale(
        "tokens.colors.semantic",
        &tokens.colors.semantic,
        &SemanticColor::ALL,
        |s| s.label(),
    )?;
    check_scale("tokens.spacing", &tokens.spacing, &SpaceStep::ALL, |s| s.label())?;
    check_scale("tokens.radius", &tokens.radius, &RadiusStep::ALL, |s| s.label())?;
    check_scale("tokens.shadows", &tokens.shadows, &ShadowStep::ALL, |s| s.label())?;
    check_scale(
        "tokens.typography.families",
        &tokens.typography.families,
        &FontFamily::ALL,
        |s| s.label(),
    )?;
    check_scale(
        "tokens.typography.sizes",
        &tokens.typography.sizes,
        &FontSize::ALL,
        |s| s.label(),
    )?;
    check_scale(
        "tokens.typography.weights",
        &tokens.typography.weights,
        &FontWeight::ALL,
        |s| s.label(),
    )?;

    Ok(())
}

/// Flag ramps whose step 50 is darker than step 900 by an sRGB luma
/// heuristic.
///
/// Inversion is legitimate for dark-optimized palettes, so this is a
/// lint (warning strings) rather than a validation failure. Values that
/// are not 6-digit hex colors are skipped.
pub fn lint_ramps(tokens: &DesignTokens) -> Vec<String> {
    let mut warnings = Vec::new();

    for (name, ramp) in tokens.colors.ramps() {
        let light = ramp.get(&RampStep::S50).and_then(|v| srgb_luma(v));
        let dark = ramp.get(&RampStep::S900).and_then(|v| srgb_luma(v));

        if let (Some(light), Some(dark)) = (light, dark) {
            if light < dark {
                warnings.push(format!(
                    "colors.{}: step 50 is darker than step 900; ramp appears inverted",
                    name
                ));
            }
        }
    }

    warnings
}

fn check_scale<K, F>(
    field: &str,
    map: &BTreeMap<K, String>,
    steps: &[K],
    label: F,
) -> Result<()>
where
    K: Ord,
    F: Fn(&K) -> &'static str,
{
    for step in steps {
        match map.get(step) {
            None => {
                return Err(TredumoError::validation(
                    field,
                    format!("missing step '{}'", label(step)),
                ));
            }
            Some(value) if value.trim().is_empty() => {
                return Err(TredumoError::validation(
                    field,
                    format!("step '{}' has an empty value", label(step)),
                ));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// `+<1-3 digit country code>` then at least three digit groups,
/// whitespace-separated (e.g. "+256 414 123 456").
fn phone_matches(phone: &str) -> bool {
    let mut parts = phone.split_whitespace();

    let country_code = match parts.next().and_then(|cc| cc.strip_prefix('+')) {
        Some(cc) => cc,
        None => return false,
    };

    if country_code.is_empty()
        || country_code.len() > 3
        || !country_code.chars().all(|c| c.is_ascii_digit())
    {
        return false;
    }

    let groups: Vec<&str> = parts.collect();
    groups.len() >= 3 && groups.iter().all(|g| g.chars().all(|c| c.is_ascii_digit()))
}

/// Single `@`, non-empty local part, dotted domain, no whitespace.
fn email_matches(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Rec. 601 luma of a `#rrggbb` color, 0..=255 scale.
fn srgb_luma(value: &str) -> Option<f32> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32;

    Some(0.299 * r + 0.587 * g + 0.114 * b)
}
