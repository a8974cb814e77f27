use serde::Deserialize;

/// Query parameters for the meta-tags endpoint
#[derive(Debug, Deserialize)]
pub struct MetaQuery {
    /// Page name for the title pattern; absent means the home page
    pub page: Option<String>,

    /// Canonical path of the page
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "/".to_string()
}
