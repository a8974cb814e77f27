//! Doctor command: health checks over the tenants directory

use anyhow::{bail, Result};
use console::style;
use std::collections::BTreeSet;
use std::path::PathBuf;

use tredumo_core::defaults::default_tenant;
use tredumo_core::models::tenant::TenantProfile;
use tredumo_core::validate::{lint_ramps, validate_nap};
use tredumo_registry::file::load_profile;

use crate::cli::DoctorArgs;
use crate::output::OutputWriter;

pub fn execute(args: DoctorArgs, tenants_dir: &Option<PathBuf>, output: &OutputWriter) -> Result<()> {
    if !output.is_json() {
        println!("\n{}", style("Tredumo Health Check").bold().underlined());
        println!("{}", style("═".repeat(60)).dim());
        println!();
    }

    let mut checks_passed = 0;
    let mut total_checks = 0;
    let mut report = Vec::new();

    let profiles: Vec<TenantProfile> = match tenants_dir {
        None => {
            total_checks += 1;
            checks_passed += 1;
            if !output.is_json() {
                println!(
                    "{} Tenants: no directory configured, checking the built-in profile",
                    style("ℹ").blue()
                );
            }
            vec![default_tenant()]
        }
        Some(dir) => {
            total_checks += 1;
            if !dir.is_dir() {
                output.error(format!("Tenants dir: {} not found", dir.display()));
                bail!("Tenants directory {} does not exist", dir.display());
            }
            if !output.is_json() {
                println!("{} Tenants dir: {}", style("✓").green(), dir.display());
            }
            checks_passed += 1;

            let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
                .collect::<std::io::Result<Vec<_>>>()?
                .into_iter()
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
                .collect();
            paths.sort();

            if paths.is_empty() && !output.is_json() {
                println!("{} Tenant files: none found", style("⚠").yellow());
                println!("  → Run: tredumo init <name> --dir {}", dir.display());
            }

            let mut seen_keys = BTreeSet::new();
            let mut profiles = Vec::new();

            for path in paths {
                total_checks += 1;
                match load_profile(&path) {
                    Ok(profile) => {
                        if !seen_keys.insert(profile.key.clone()) {
                            if !output.is_json() {
                                println!(
                                    "{} {}: duplicate tenant key '{}'",
                                    style("✗").red(),
                                    path.display(),
                                    profile.key
                                );
                            }
                            report.push(format!("{}: duplicate key", path.display()));
                            continue;
                        }

                        if !output.is_json() {
                            println!(
                                "{} {}: parsed and validated",
                                style("✓").green(),
                                path.display()
                            );
                        }
                        checks_passed += 1;
                        profiles.push(profile);
                    }
                    Err(e) => {
                        if !output.is_json() {
                            println!("{} {}: {}", style("✗").red(), path.display(), e);
                        }
                        report.push(format!("{}: {}", path.display(), e));
                    }
                }
            }

            profiles
        }
    };

    // NAP and ramp checks per loaded tenant
    for profile in &profiles {
        total_checks += 1;
        let nap = validate_nap(&profile.school);
        if nap.is_valid {
            if !output.is_json() {
                println!("{} {}: NAP data consistent", style("✓").green(), profile.key);
            }
            checks_passed += 1;
        } else {
            if !output.is_json() {
                println!(
                    "{} {}: {} NAP issue(s)",
                    style("✗").red(),
                    profile.key,
                    nap.issues.len()
                );
                for issue in &nap.issues {
                    println!("    {} {}", style("→").dim(), issue);
                }
            }
            report.push(format!("{}: NAP issues: {}", profile.key, nap.issues.join("; ")));
        }

        for warning in lint_ramps(&profile.tokens) {
            if !output.is_json() {
                println!("  {} {}: {}", style("⚠").yellow(), profile.key, warning);
            }
        }

        if args.verbose && !output.is_json() {
            output.kv("Name", &profile.school.name);
            output.kv("Kind", profile.school.kind.label());
            output.kv("Grades", profile.school.grades.len());
            output.kv("Grade bands", profile.school.tuition.bands.len());
        }
    }

    if output.is_json() {
        output.result(serde_json::json!({
            "checks_passed": checks_passed,
            "total_checks": total_checks,
            "tenants": profiles.iter().map(|p| p.key.to_string()).collect::<Vec<_>>(),
            "failures": report,
        }))?;
    } else {
        println!();
        println!("{}", style("═".repeat(60)).dim());
        println!("{}/{} checks passed", checks_passed, total_checks);
    }

    if checks_passed < total_checks {
        bail!("{} check(s) failed", total_checks - checks_passed);
    }

    Ok(())
}
