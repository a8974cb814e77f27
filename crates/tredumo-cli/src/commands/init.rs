//! Init command: scaffold a tenant file

use anyhow::{bail, Context, Result};
use dialoguer::Input;
use std::fs;
use std::path::PathBuf;

use tredumo_core::defaults::default_tenant;
use tredumo_core::models::tenant::TenantKey;
use tredumo_core::validate::validate_school_config;

use crate::cli::InitArgs;
use crate::output::OutputWriter;

pub fn execute(args: InitArgs, tenants_dir: &Option<PathBuf>, output: &OutputWriter) -> Result<()> {
    let key = TenantKey::new(&args.name)?;

    let dir = args
        .dir
        .clone()
        .or_else(|| tenants_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let path = dir.join(format!("{}.toml", key));
    if path.exists() && !args.force {
        bail!(
            "Tenant file already exists at {}. Use --force to overwrite",
            path.display()
        );
    }

    // Start from the built-in profile; it is complete and valid, so the
    // operator edits real values instead of filling blanks
    let mut profile = default_tenant();
    profile.key = key.clone();

    if args.interactive {
        profile.school.name = Input::new()
            .with_prompt("School name")
            .default(humanize(key.as_str()))
            .interact_text()?;
        profile.school.short_name = Input::new()
            .with_prompt("Short name")
            .default(first_word(&profile.school.name))
            .interact_text()?;
        profile.school.tagline = Input::new()
            .with_prompt("Tagline")
            .default(profile.school.tagline.clone())
            .interact_text()?;
        profile.school.address.city = Input::new()
            .with_prompt("City")
            .default(profile.school.address.city.clone())
            .interact_text()?;
        profile.school.address.country = Input::new()
            .with_prompt("Country")
            .default(profile.school.address.country.clone())
            .interact_text()?;
        profile.school.phone.primary = Input::new()
            .with_prompt("Primary phone")
            .default(profile.school.phone.primary.clone())
            .interact_text()?;
        profile.school.email.primary = Input::new()
            .with_prompt("Primary email")
            .default(profile.school.email.primary.clone())
            .interact_text()?;
    } else {
        profile.school.name = humanize(key.as_str());
        profile.school.short_name = first_word(&profile.school.name);
    }

    validate_school_config(&profile.school)?;

    let body = toml::to_string(&profile).context("Failed to serialize tenant profile")?;
    let content = format!(
        "# Tredumo tenant profile: {}\n# Edit the school and tokens sections, then run `tredumo validate {}`\n\n{}",
        key, key, body
    );

    fs::create_dir_all(&dir).context("Failed to create tenants directory")?;
    fs::write(&path, content).context("Failed to write tenant file")?;

    if output.is_json() {
        output.result(serde_json::json!({
            "tenant": key.to_string(),
            "path": path.display().to_string(),
        }))?;
    } else {
        output.success(format!("Scaffolded tenant '{}' at {}", key, path.display()));
        output.section("Next steps");
        output.kv("Edit", path.display());
        output.kv("Validate", format!("tredumo validate {}", key));
    }

    Ok(())
}

/// "st-marys" -> "St Marys School"
fn humanize(key: &str) -> String {
    let words: Vec<String> = key
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    format!("{} School", words.join(" "))
}

fn first_word(name: &str) -> String {
    name.split_whitespace().next().unwrap_or(name).to_string()
}
