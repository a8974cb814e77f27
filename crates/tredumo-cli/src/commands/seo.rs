//! SEO artifact command

use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

use tredumo_core::seo::{
    curriculum_jsonld, page_meta, school_jsonld, sitemap_entries, sitemap_xml,
};

use crate::cli::{SeoArgs, SeoArtifact};
use crate::commands::{load_tenants, select_tenant};
use crate::output::OutputWriter;

pub fn execute(args: SeoArgs, tenants_dir: &Option<PathBuf>, output: &OutputWriter) -> Result<()> {
    let profile = select_tenant(load_tenants(tenants_dir)?, args.key.as_deref())?;

    match args.artifact {
        SeoArtifact::School => {
            output.data(&school_jsonld(&profile.school, &args.base_url))?;
        }
        SeoArtifact::Curriculum => {
            output.data(&curriculum_jsonld(&profile.school, &args.base_url))?;
        }
        SeoArtifact::Meta => {
            let meta = page_meta(
                &profile.school,
                &args.base_url,
                args.page.as_deref(),
                &args.path,
            );
            output.data(&meta)?;
        }
        SeoArtifact::Sitemap => {
            let entries = sitemap_entries(&args.base_url, Utc::now());
            output.raw(sitemap_xml(&entries));
        }
    }

    Ok(())
}
