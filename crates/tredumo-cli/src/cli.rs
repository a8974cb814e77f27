use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tredumo - Multi-tenant school site platform tooling
#[derive(Parser, Debug)]
#[command(name = "tredumo")]
#[command(about = "Validate, inspect, and scaffold school tenant profiles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory of tenant TOML files (or TREDUMO_TENANTS_DIR; defaults
    /// to the built-in tenant)
    #[arg(long, global = true)]
    pub tenants_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available tenants
    Tenants,

    /// Validate a tenant: invariants, NAP consistency, ramp lint
    Validate(ValidateArgs),

    /// Export a tenant's design tokens
    Tokens(TokensArgs),

    /// Print a tenant's SEO artifacts
    Seo(SeoArgs),

    /// Show a tenant's fee schedule, optionally quoting one band
    Fees(FeesArgs),

    /// Scaffold a new tenant file
    Init(InitArgs),

    /// Run health checks over the tenants directory
    Doctor(DoctorArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Tenant key (defaults to the only/default tenant)
    pub key: Option<String>,
}

#[derive(Parser, Debug)]
pub struct TokensArgs {
    /// Tenant key (defaults to the only/default tenant)
    pub key: Option<String>,

    /// Export format
    #[arg(long, value_enum, default_value = "css")]
    pub format: TokenFormat,
}

/// Token export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TokenFormat {
    /// `:root` custom-property stylesheet
    Css,
    /// Structured palette JSON
    Json,
    /// Flat `<category>-<name>-<step>` mapping
    Flat,
}

#[derive(Parser, Debug)]
pub struct SeoArgs {
    /// Which artifact to print
    #[arg(value_enum)]
    pub artifact: SeoArtifact,

    /// Tenant key (defaults to the only/default tenant)
    pub key: Option<String>,

    /// Public base URL for generated links
    #[arg(long, default_value = "https://example.edu")]
    pub base_url: String,

    /// Page name for the meta artifact's title pattern
    #[arg(long)]
    pub page: Option<String>,

    /// Canonical path for the meta artifact
    #[arg(long, default_value = "/")]
    pub path: String,
}

/// SEO artifact selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SeoArtifact {
    /// schema.org School JSON-LD
    School,
    /// schema.org Course list JSON-LD
    Curriculum,
    /// Per-page meta tags
    Meta,
    /// sitemap.xml
    Sitemap,
}

#[derive(Parser, Debug)]
pub struct FeesArgs {
    /// Tenant key (defaults to the only/default tenant)
    pub key: Option<String>,

    /// Quote this grade band instead of printing the schedule
    #[arg(long)]
    pub band: Option<String>,

    /// Attendance mode for the quote
    #[arg(long, value_enum, default_value = "day")]
    pub attendance: AttendanceArg,
}

/// Attendance mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AttendanceArg {
    Day,
    Boarding,
}

impl From<AttendanceArg> for tredumo_core::tuition::Attendance {
    fn from(arg: AttendanceArg) -> Self {
        match arg {
            AttendanceArg::Day => Self::Day,
            AttendanceArg::Boarding => Self::Boarding,
        }
    }
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Tenant key for the new file (lowercase DNS label)
    pub name: String,

    /// Directory to write into (defaults to --tenants-dir, then cwd)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Prompt for school identity fields
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct DoctorArgs {
    /// Show per-tenant detail
    #[arg(long)]
    pub verbose: bool,
}
