//! Fee schedule command

use anyhow::Result;
use std::path::PathBuf;
use tabled::Tabled;

use tredumo_core::tuition::enrollment_quote;

use crate::cli::FeesArgs;
use crate::commands::{load_tenants, select_tenant};
use crate::output::OutputWriter;

#[derive(Tabled)]
struct BandRow {
    #[tabled(rename = "Grade band")]
    band: String,
    #[tabled(rename = "Day (per term)")]
    day: u64,
    #[tabled(rename = "Boarding (per term)")]
    boarding: u64,
}

#[derive(Tabled)]
struct FeeRow {
    #[tabled(rename = "Fee category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: u64,
}

pub fn execute(args: FeesArgs, tenants_dir: &Option<PathBuf>, output: &OutputWriter) -> Result<()> {
    let profile = select_tenant(load_tenants(tenants_dir)?, args.key.as_deref())?;
    let table = &profile.school.tuition;

    // With a band, produce an itemized quote including every one-off fee
    if let Some(band) = &args.band {
        let categories: Vec<&str> = table.fees.keys().map(String::as_str).collect();
        let quote = enrollment_quote(table, band, args.attendance.into(), &categories)?;

        if output.is_json() {
            return output.result(quote);
        }

        output.section(format!("Quote: {} ({})", quote.band, quote.attendance.label()));
        output.kv("Tuition per term", quote.tuition_per_term);
        output.kv("Annual tuition", quote.annual_tuition);
        for line in &quote.extras {
            output.kv(&line.category, line.amount);
        }
        output.kv("Total first term", quote.total_first_term);
        return Ok(());
    }

    if output.is_json() {
        return output.result(table);
    }

    let bands: Vec<BandRow> = table
        .bands
        .iter()
        .map(|(band, rate)| BandRow {
            band: band.clone(),
            day: rate.day,
            boarding: rate.boarding,
        })
        .collect();
    output.section(format!("Tuition: {}", profile.school.short_name));
    output.table(bands);

    if !table.fees.is_empty() {
        let fees: Vec<FeeRow> = table
            .fees
            .iter()
            .map(|(category, amount)| FeeRow {
                category: category.clone(),
                amount: *amount,
            })
            .collect();
        output.section("One-off fees");
        output.table(fees);
    }

    Ok(())
}
