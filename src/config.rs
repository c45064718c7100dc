// src/config.rs
// =============================================================================
// Settings for the fetch command.
//
// There is no config file: values come from command-line flags and the
// environment (see cli.rs) and are validated into a FetchConfig here.
// =============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

use crate::cli::FetchArgs;

/// GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository holding the community keymaps
pub const DEFAULT_REPOSITORY: &str = "PlayCover/keymaps";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub api_base: Url,
    pub default_repo: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl FetchConfig {
    pub fn from_args(args: &FetchArgs) -> Result<Self> {
        let api_base = Url::parse(&args.api_url)
            .with_context(|| format!("Invalid API URL '{}'", args.api_url))?;

        // An empty GITHUB_TOKEN is the same as no token
        let token = args
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(Self {
            api_base,
            default_repo: DEFAULT_REPOSITORY.to_string(),
            token,
            timeout: Duration::from_secs(args.timeout),
        })
    }
}
