//! TOML tenant file source.
//!
//! One file per tenant. The key defaults to the file stem so a tenants
//! directory reads as a tenant listing; a `key` field in the file wins
//! over the stem. Profiles are validated eagerly on load — a broken
//! file fails startup, it does not surface later as a missing token.

use serde::Deserialize;
use std::path::Path;

use tredumo_core::error::{Result, TredumoError};
use tredumo_core::models::school::SchoolConfig;
use tredumo_core::models::tenant::{TenantKey, TenantProfile};
use tredumo_core::models::theme::DesignTokens;
use tredumo_core::validate::{validate_design_tokens, validate_school_config};

use crate::ports::TenantStore;

/// On-disk tenant file shape; `key` falls back to the file stem
#[derive(Debug, Deserialize)]
struct TenantFile {
    key: Option<String>,
    school: SchoolConfig,
    tokens: DesignTokens,
}

/// Load and validate one tenant file.
pub fn load_profile(path: &Path) -> Result<TenantProfile> {
    let content = std::fs::read_to_string(path)?;

    let file: TenantFile = toml::from_str(&content).map_err(|e| TredumoError::TenantFileInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let key = match file.key {
        Some(key) => TenantKey::new(key)?,
        None => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| TredumoError::TenantFileInvalid {
                    path: path.to_path_buf(),
                    reason: "file name is not valid UTF-8".to_string(),
                })?;
            TenantKey::new(stem)?
        }
    };

    validate_school_config(&file.school)?;
    validate_design_tokens(&file.tokens)?;

    tracing::debug!(tenant = %key, path = %path.display(), "Loaded tenant file");

    Ok(TenantProfile {
        key,
        school: file.school,
        tokens: file.tokens,
    })
}

/// Load every `*.toml` file in a directory, in file-name order.
///
/// Duplicate keys are an error: two files resolving to the same tenant
/// is a deployment mistake, not a precedence question.
pub fn load_dir(dir: &Path) -> Result<Vec<TenantProfile>> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    let mut profiles: Vec<TenantProfile> = Vec::with_capacity(paths.len());

    for path in paths {
        let profile = load_profile(&path)?;

        if profiles.iter().any(|p| p.key == profile.key) {
            return Err(TredumoError::DuplicateTenant {
                key: profile.key.to_string(),
            });
        }

        profiles.push(profile);
    }

    Ok(profiles)
}

/// Load a tenants directory into a store. Returns the number of tenants
/// loaded.
pub async fn seed_store(store: &dyn TenantStore, dir: &Path) -> Result<usize> {
    let profiles = load_dir(dir)?;
    let count = profiles.len();

    for profile in profiles {
        tracing::info!(tenant = %profile.key, "Registering tenant");
        store.put_tenant(profile).await?;
    }

    Ok(count)
}
