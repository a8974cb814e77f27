//! Tenants listing command

use anyhow::Result;
use std::path::PathBuf;
use tabled::Tabled;

use tredumo_core::models::tenant::TenantSummary;

use crate::commands::load_tenants;
use crate::output::OutputWriter;

#[derive(Tabled)]
struct TenantRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Established")]
    established: u16,
}

pub fn execute(tenants_dir: &Option<PathBuf>, output: &OutputWriter) -> Result<()> {
    let profiles = load_tenants(tenants_dir)?;

    if tenants_dir.is_none() && !output.is_json() {
        output.info("No tenants directory configured, showing the built-in tenant");
    }

    let summaries: Vec<TenantSummary> = profiles.iter().map(TenantSummary::from).collect();

    if output.is_json() {
        return output.result(summaries);
    }

    let rows: Vec<TenantRow> = summaries
        .into_iter()
        .map(|s| TenantRow {
            key: s.key.to_string(),
            name: s.name,
            kind: s.kind.label().to_string(),
            established: s.established,
        })
        .collect();

    output.table(rows);
    Ok(())
}
