//! CLI argument parsing module for pkgstars

use crate::alias::parse_alias;
use crate::config::{ResolverConfig, DEFAULT_HOSTING_URL, DEFAULT_REGISTRY_URL};
use clap::{ArgAction, Parser};
use std::time::Duration;

/// Rank Go packages by the attractiveness of their GitHub repository
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pkgstars",
    version,
    about = "Rank Go packages by the attractiveness of their GitHub repository"
)]
pub struct CliArgs {
    /// Go package names (e.g. github.com/KEINOS/dev-go/cmd)
    pub packages: Vec<String>,

    /// GitHub personal access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Map a project site URL to its repository URL (FROM=TO, can be specified multiple times)
    #[arg(long, value_parser = parse_alias, action = ArgAction::Append)]
    pub alias: Vec<(String, String)>,

    /// Keep resolving the remaining packages after a failure
    #[arg(long)]
    pub keep_going: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Endpoint overrides
    /// Package registry base URL
    #[arg(long, default_value = DEFAULT_REGISTRY_URL, hide = true)]
    pub registry_url: String,

    /// GitHub API base URL
    #[arg(long, default_value = DEFAULT_HOSTING_URL, hide = true)]
    pub hosting_url: String,

    /// Pause before each remote call, in milliseconds
    #[arg(long, default_value_t = 1000, hide = true)]
    pub cooldown_ms: u64,
}

impl CliArgs {
    /// Build the resolver configuration from the parsed arguments
    pub fn to_config(&self) -> ResolverConfig {
        let config = self
            .alias
            .iter()
            .fold(ResolverConfig::default(), |config, (from, to)| {
                config.with_alias(from.as_str(), to.as_str())
            })
            .with_endpoints(self.registry_url.as_str(), self.hosting_url.as_str())
            .with_cooldown(Duration::from_millis(self.cooldown_ms));

        match &self.token {
            Some(token) => config.with_token(token.as_str()),
            None => config,
        }
    }
}
