use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete identity record for one deployed school tenant.
///
/// One instance is constructed per tenant at startup (from the built-in
/// default or a tenant file) and is immutable afterwards. Every consumer
/// receives it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolConfig {
    /// Full legal/marketing name
    pub name: String,

    /// Short name used in page titles and navigation
    pub short_name: String,

    /// One-line slogan
    pub tagline: String,

    /// Longer marketing description
    pub description: String,

    /// Year the school was established
    pub established: u16,

    /// Institution category
    pub kind: SchoolKind,

    /// Curricula offered, in display order
    pub curriculum: Vec<String>,

    /// Grade-level labels, in display order
    pub grades: Vec<String>,

    /// Search keywords
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Location-specific search keywords
    #[serde(default)]
    pub local_keywords: Vec<String>,

    /// Feature labels highlighted on the site
    #[serde(default)]
    pub features: Vec<String>,

    /// Physical location
    pub address: Address,

    /// Phone contact channels
    pub phone: PhoneNumbers,

    /// Email contact channels
    pub email: EmailAddresses,

    /// Platform name -> profile URL
    #[serde(default)]
    pub social: BTreeMap<String, String>,

    /// Opening hours; weekend entries may be absent
    #[serde(default)]
    pub hours: OpeningHours,

    /// Logo and favicon assets
    pub branding: Branding,

    /// Fee schedule
    pub tuition: TuitionTable,
}

/// Street address plus optional geo coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,

    /// Absence is reported by the NAP validator, not a parse failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// WGS 84 point. Latitude must be in -90..=90, longitude in -180..=180.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Phone contact channels. `primary` is required NAP data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumbers {
    pub primary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// Email contact channels. `primary` is required NAP data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailAddresses {
    pub primary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admissions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
}

/// Institution category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolKind {
    Primary,
    Secondary,
    University,
    Vocational,
}

impl SchoolKind {
    pub fn label(&self) -> &'static str {
        match self {
            SchoolKind::Primary => "primary",
            SchoolKind::Secondary => "secondary",
            SchoolKind::University => "university",
            SchoolKind::Vocational => "vocational",
        }
    }
}

/// Day of the week. Declaration order is calendar order, so maps keyed by
/// `Weekday` iterate Monday first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

/// Weekday -> human-readable open/close string (e.g. "8:00 AM - 5:00 PM").
pub type OpeningHours = BTreeMap<Weekday, String>;

/// Logo and favicon URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    pub logo: String,
    pub favicon: String,
}

/// Fee schedule: termly tuition per grade band plus one-off fee categories.
///
/// Amounts are minor currency units. `BTreeMap` keeps serialization order
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuitionTable {
    /// Grade-band label -> termly rates
    pub bands: BTreeMap<String, TuitionRate>,

    /// Fee category -> amount (registration, uniform, ...)
    #[serde(default)]
    pub fees: BTreeMap<String, u64>,
}

/// Termly tuition for one grade band, by attendance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuitionRate {
    pub day: u64,
    pub boarding: u64,
}
