//! Validate command: invariants, NAP consistency, ramp lint

use anyhow::{bail, Result};
use console::style;
use std::path::PathBuf;

use tredumo_core::validate::{
    lint_ramps, validate_design_tokens, validate_nap, validate_school_config,
};

use crate::cli::ValidateArgs;
use crate::commands::{load_tenants, select_tenant};
use crate::output::OutputWriter;

pub fn execute(args: ValidateArgs, tenants_dir: &Option<PathBuf>, output: &OutputWriter) -> Result<()> {
    let profile = select_tenant(load_tenants(tenants_dir)?, args.key.as_deref())?;

    let school_result = validate_school_config(&profile.school);
    let tokens_result = validate_design_tokens(&profile.tokens);
    let nap = validate_nap(&profile.school);
    let warnings = lint_ramps(&profile.tokens);

    if output.is_json() {
        output.result(serde_json::json!({
            "tenant": profile.key.to_string(),
            "school_valid": school_result.is_ok(),
            "school_error": school_result.as_ref().err().map(|e| e.to_string()),
            "tokens_valid": tokens_result.is_ok(),
            "tokens_error": tokens_result.as_ref().err().map(|e| e.to_string()),
            "nap": nap,
            "ramp_warnings": warnings,
        }))?;
    } else {
        println!("\n{}", style(format!("Validation: {}", profile.key)).bold().underlined());
        println!();

        match &school_result {
            Ok(()) => println!("{} School record: all invariants hold", style("✓").green()),
            Err(e) => println!("{} School record: {}", style("✗").red(), e),
        }

        match &tokens_result {
            Ok(()) => println!("{} Design tokens: every scale fully populated", style("✓").green()),
            Err(e) => println!("{} Design tokens: {}", style("✗").red(), e),
        }

        if nap.is_valid {
            println!("{} NAP data: consistent", style("✓").green());
        } else {
            println!("{} NAP data: {} issue(s)", style("✗").red(), nap.issues.len());
            for issue in &nap.issues {
                println!("    {} {}", style("→").dim(), issue);
            }
        }

        for warning in &warnings {
            output.warning(warning);
        }
    }

    let failed = school_result.is_err() || tokens_result.is_err() || !nap.is_valid;
    if failed {
        bail!("Tenant '{}' failed validation", profile.key);
    }

    if !output.is_json() {
        output.success(format!("Tenant '{}' is valid", profile.key));
    }
    Ok(())
}
