use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Themeable visual palette for one tenant.
///
/// Every scale is an enum-keyed map; the enums declare their steps in
/// display order, so map iteration order is the documented order. A
/// complete palette defines every step of every scale —
/// `validate::validate_design_tokens` enforces this before tokens reach
/// any consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    pub colors: ColorTokens,

    /// Spacing scale (xs..4xl)
    pub spacing: BTreeMap<SpaceStep, String>,

    /// Border-radius scale (none..full)
    pub radius: BTreeMap<RadiusStep, String>,

    /// Box-shadow scale (sm..2xl)
    pub shadows: BTreeMap<ShadowStep, String>,

    pub typography: Typography,
}

/// Color ramps plus the four semantic colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: BTreeMap<RampStep, String>,
    pub secondary: BTreeMap<RampStep, String>,
    pub accent: BTreeMap<RampStep, String>,
    pub neutral: BTreeMap<RampStep, String>,
    pub semantic: BTreeMap<SemanticColor, String>,
}

impl ColorTokens {
    /// Ramps in documentation order, with their names.
    pub fn ramps(&self) -> [(&'static str, &BTreeMap<RampStep, String>); 4] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("neutral", &self.neutral),
        ]
    }
}

/// Font families and the size/weight scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Family slot -> CSS font stack
    pub families: BTreeMap<FontFamily, String>,

    /// Font-size scale (xs..6xl)
    pub sizes: BTreeMap<FontSize, String>,

    /// Font-weight scale (light..bold)
    pub weights: BTreeMap<FontWeight, String>,
}

/// 10-step color ramp position, 50 lightest through 900 darkest by
/// convention (dark-optimized ramps may invert; see `validate::lint_ramps`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RampStep {
    #[serde(rename = "50")]
    S50,
    #[serde(rename = "100")]
    S100,
    #[serde(rename = "200")]
    S200,
    #[serde(rename = "300")]
    S300,
    #[serde(rename = "400")]
    S400,
    #[serde(rename = "500")]
    S500,
    #[serde(rename = "600")]
    S600,
    #[serde(rename = "700")]
    S700,
    #[serde(rename = "800")]
    S800,
    #[serde(rename = "900")]
    S900,
}

impl RampStep {
    pub const ALL: [RampStep; 10] = [
        RampStep::S50,
        RampStep::S100,
        RampStep::S200,
        RampStep::S300,
        RampStep::S400,
        RampStep::S500,
        RampStep::S600,
        RampStep::S700,
        RampStep::S800,
        RampStep::S900,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RampStep::S50 => "50",
            RampStep::S100 => "100",
            RampStep::S200 => "200",
            RampStep::S300 => "300",
            RampStep::S400 => "400",
            RampStep::S500 => "500",
            RampStep::S600 => "600",
            RampStep::S700 => "700",
            RampStep::S800 => "800",
            RampStep::S900 => "900",
        }
    }
}

/// Semantic state colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticColor {
    Success,
    Warning,
    Error,
    Info,
}

impl SemanticColor {
    pub const ALL: [SemanticColor; 4] = [
        SemanticColor::Success,
        SemanticColor::Warning,
        SemanticColor::Error,
        SemanticColor::Info,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SemanticColor::Success => "success",
            SemanticColor::Warning => "warning",
            SemanticColor::Error => "error",
            SemanticColor::Info => "info",
        }
    }
}

/// Spacing scale step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpaceStep {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "3xl")]
    Xl3,
    #[serde(rename = "4xl")]
    Xl4,
}

impl SpaceStep {
    pub const ALL: [SpaceStep; 8] = [
        SpaceStep::Xs,
        SpaceStep::Sm,
        SpaceStep::Md,
        SpaceStep::Lg,
        SpaceStep::Xl,
        SpaceStep::Xl2,
        SpaceStep::Xl3,
        SpaceStep::Xl4,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SpaceStep::Xs => "xs",
            SpaceStep::Sm => "sm",
            SpaceStep::Md => "md",
            SpaceStep::Lg => "lg",
            SpaceStep::Xl => "xl",
            SpaceStep::Xl2 => "2xl",
            SpaceStep::Xl3 => "3xl",
            SpaceStep::Xl4 => "4xl",
        }
    }
}

/// Border-radius scale step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RadiusStep {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "full")]
    Full,
}

impl RadiusStep {
    pub const ALL: [RadiusStep; 7] = [
        RadiusStep::None,
        RadiusStep::Sm,
        RadiusStep::Md,
        RadiusStep::Lg,
        RadiusStep::Xl,
        RadiusStep::Xl2,
        RadiusStep::Full,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RadiusStep::None => "none",
            RadiusStep::Sm => "sm",
            RadiusStep::Md => "md",
            RadiusStep::Lg => "lg",
            RadiusStep::Xl => "xl",
            RadiusStep::Xl2 => "2xl",
            RadiusStep::Full => "full",
        }
    }
}

/// Box-shadow scale step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShadowStep {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
}

impl ShadowStep {
    pub const ALL: [ShadowStep; 5] = [
        ShadowStep::Sm,
        ShadowStep::Md,
        ShadowStep::Lg,
        ShadowStep::Xl,
        ShadowStep::Xl2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShadowStep::Sm => "sm",
            ShadowStep::Md => "md",
            ShadowStep::Lg => "lg",
            ShadowStep::Xl => "xl",
            ShadowStep::Xl2 => "2xl",
        }
    }
}

/// Font-family slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Headings and hero copy
    Display,
    /// Everything else
    Body,
}

impl FontFamily {
    pub const ALL: [FontFamily; 2] = [FontFamily::Display, FontFamily::Body];

    pub fn label(&self) -> &'static str {
        match self {
            FontFamily::Display => "display",
            FontFamily::Body => "body",
        }
    }
}

/// Font-size scale step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FontSize {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "3xl")]
    Xl3,
    #[serde(rename = "4xl")]
    Xl4,
    #[serde(rename = "5xl")]
    Xl5,
    #[serde(rename = "6xl")]
    Xl6,
}

impl FontSize {
    pub const ALL: [FontSize; 10] = [
        FontSize::Xs,
        FontSize::Sm,
        FontSize::Base,
        FontSize::Lg,
        FontSize::Xl,
        FontSize::Xl2,
        FontSize::Xl3,
        FontSize::Xl4,
        FontSize::Xl5,
        FontSize::Xl6,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Xs => "xs",
            FontSize::Sm => "sm",
            FontSize::Base => "base",
            FontSize::Lg => "lg",
            FontSize::Xl => "xl",
            FontSize::Xl2 => "2xl",
            FontSize::Xl3 => "3xl",
            FontSize::Xl4 => "4xl",
            FontSize::Xl5 => "5xl",
            FontSize::Xl6 => "6xl",
        }
    }
}

/// Font-weight scale step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Normal,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 5] = [
        FontWeight::Light,
        FontWeight::Normal,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FontWeight::Light => "light",
            FontWeight::Normal => "normal",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_steps_order_lightest_first() {
        assert_eq!(RampStep::ALL.first(), Some(&RampStep::S50));
        assert_eq!(RampStep::ALL.last(), Some(&RampStep::S900));
        assert!(RampStep::S50 < RampStep::S900);
    }

    #[test]
    fn ramp_step_serializes_as_number_string() {
        let json = serde_json::to_string(&RampStep::S500).unwrap();
        assert_eq!(json, "\"500\"");

        let parsed: RampStep = serde_json::from_str("\"50\"").unwrap();
        assert_eq!(parsed, RampStep::S50);
    }

    #[test]
    fn scale_steps_match_declared_counts() {
        assert_eq!(RampStep::ALL.len(), 10);
        assert_eq!(SemanticColor::ALL.len(), 4);
        assert_eq!(SpaceStep::ALL.len(), 8);
        assert_eq!(RadiusStep::ALL.len(), 7);
        assert_eq!(ShadowStep::ALL.len(), 5);
        assert_eq!(FontFamily::ALL.len(), 2);
        assert_eq!(FontSize::ALL.len(), 10);
        assert_eq!(FontWeight::ALL.len(), 5);
    }

    #[test]
    fn ramp_map_keys_round_trip_through_toml() {
        let mut ramp = BTreeMap::new();
        for step in RampStep::ALL {
            ramp.insert(step, format!("#{:06x}", step as u32));
        }

        let toml_str = toml::to_string(&ramp).unwrap();
        let parsed: BTreeMap<RampStep, String> = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, ramp);
    }
}
