//! Token export command

use anyhow::Result;
use std::path::PathBuf;

use tredumo_core::stylesheet::{serialize_design_tokens, theme_stylesheet};

use crate::cli::{TokenFormat, TokensArgs};
use crate::commands::{load_tenants, select_tenant};
use crate::output::OutputWriter;

pub fn execute(args: TokensArgs, tenants_dir: &Option<PathBuf>, output: &OutputWriter) -> Result<()> {
    let profile = select_tenant(load_tenants(tenants_dir)?, args.key.as_deref())?;

    match args.format {
        TokenFormat::Css => output.raw(theme_stylesheet(&profile.tokens)),
        TokenFormat::Json => output.data(&profile.tokens)?,
        TokenFormat::Flat => output.data(&serialize_design_tokens(&profile.tokens))?,
    }

    Ok(())
}
