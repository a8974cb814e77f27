//! Command implementations

mod doctor;
mod fees;
mod init;
mod seo;
mod tenants;
mod tokens;
mod validate;

use anyhow::{bail, Result};
use std::path::PathBuf;

use tredumo_core::defaults::{default_tenant, DEFAULT_TENANT_KEY};
use tredumo_core::models::tenant::TenantProfile;
use tredumo_registry::file::load_dir;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let tenants_dir = cli.tenants_dir.or_else(|| {
        std::env::var("TREDUMO_TENANTS_DIR")
            .ok()
            .map(PathBuf::from)
    });

    match cli.command {
        Commands::Tenants => tenants::execute(&tenants_dir, &output),
        Commands::Validate(args) => validate::execute(args, &tenants_dir, &output),
        Commands::Tokens(args) => tokens::execute(args, &tenants_dir, &output),
        Commands::Seo(args) => seo::execute(args, &tenants_dir, &output),
        Commands::Fees(args) => fees::execute(args, &tenants_dir, &output),
        Commands::Init(args) => init::execute(args, &tenants_dir, &output),
        Commands::Doctor(args) => doctor::execute(args, &tenants_dir, &output),
    }
}

/// Load the working set of tenants: the directory if given, otherwise
/// the built-in default tenant.
pub(crate) fn load_tenants(tenants_dir: &Option<PathBuf>) -> Result<Vec<TenantProfile>> {
    match tenants_dir {
        Some(dir) => {
            let profiles = load_dir(dir)?;
            if profiles.is_empty() {
                bail!("No tenant files found in {}", dir.display());
            }
            tracing::debug!(count = profiles.len(), dir = %dir.display(), "Loaded tenants");
            Ok(profiles)
        }
        None => Ok(vec![default_tenant()]),
    }
}

/// Pick one tenant out of the working set.
///
/// An explicit key must match. Without a key, a single-tenant set is
/// unambiguous; otherwise the default tenant is chosen if present.
pub(crate) fn select_tenant(
    profiles: Vec<TenantProfile>,
    key: Option<&str>,
) -> Result<TenantProfile> {
    match key {
        Some(key) => {
            let keys: Vec<String> = profiles.iter().map(|p| p.key.to_string()).collect();
            profiles
                .into_iter()
                .find(|p| p.key.as_str() == key)
                .ok_or_else(|| {
                    anyhow::anyhow!("Tenant '{}' not found (available: {})", key, keys.join(", "))
                })
        }
        None => {
            if profiles.len() == 1 {
                let mut profiles = profiles;
                return Ok(profiles.remove(0));
            }

            let keys: Vec<String> = profiles.iter().map(|p| p.key.to_string()).collect();
            profiles
                .into_iter()
                .find(|p| p.key.as_str() == DEFAULT_TENANT_KEY)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Multiple tenants available, pass a key (available: {})",
                        keys.join(", ")
                    )
                })
        }
    }
}
