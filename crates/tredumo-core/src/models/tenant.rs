use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TredumoError};
use crate::models::school::{SchoolConfig, SchoolKind};
use crate::models::theme::DesignTokens;

/// Validated tenant selector key.
///
/// Keys come from subdomains, so the rules are DNS-label rules: lowercase
/// ASCII alphanumerics and hyphens, 1..=63 characters, no leading or
/// trailing hyphen.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantKey(String);

impl TenantKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();

        let valid_chars = key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if key.is_empty()
            || key.len() > 63
            || !valid_chars
            || key.starts_with('-')
            || key.ends_with('-')
        {
            return Err(TredumoError::ConfigInvalid {
                key: "tenant_key".to_string(),
                reason: format!(
                    "Invalid tenant key '{}': expected a lowercase DNS label (a-z, 0-9, hyphen)",
                    key
                ),
            });
        }

        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TenantKey {
    type Err = TredumoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for TenantKey {
    type Error = TredumoError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TenantKey> for String {
    fn from(key: TenantKey) -> Self {
        key.0
    }
}

/// Everything the registry stores for one tenant: the identity record and
/// the palette, selected together by the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantProfile {
    pub key: TenantKey,
    pub school: SchoolConfig,
    pub tokens: DesignTokens,
}

/// Listing projection of a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantSummary {
    pub key: TenantKey,
    pub name: String,
    pub kind: SchoolKind,
    pub established: u16,
}

impl From<&TenantProfile> for TenantSummary {
    fn from(profile: &TenantProfile) -> Self {
        Self {
            key: profile.key.clone(),
            name: profile.school.name.clone(),
            kind: profile.school.kind,
            established: profile.school.established,
        }
    }
}
