//! Hosting provider access for repository metrics
//!
//! This module provides:
//! - The `HostingAdapter` seam over a concrete hosting API
//! - The GitHub REST adapter
//! - `RepositoryClient`, which turns a repository URL into metrics

mod github;

pub use github::GitHubAdapter;

use crate::alias::AliasTable;
use crate::config::Credential;
use crate::domain::{ParsedUrl, RepositoryMetadata, RepositoryStats};
use crate::error::{HttpError, RepositoryError};
use crate::rate_limit::RateLimiter;
use async_trait::async_trait;
use std::sync::Arc;

/// Every supported repository URL starts with this
pub const CANONICAL_PREFIX: &str = "https://github.com/";

/// Trait for hosting API adapters
#[async_trait]
pub trait HostingAdapter: Send + Sync {
    /// Get the hosting provider name
    fn host_name(&self) -> &'static str;

    /// Fetch the metrics of `owner/repo`, authenticating when `token` is given
    async fn fetch_repository(
        &self,
        owner: &str,
        repo: &str,
        token: Option<&str>,
    ) -> Result<RepositoryStats, HttpError>;
}

/// Resolves repository URLs into [`RepositoryMetadata`]
#[derive(Clone)]
pub struct RepositoryClient {
    adapter: Arc<dyn HostingAdapter>,
    aliases: Arc<AliasTable>,
    credential: Credential,
    limiter: RateLimiter,
}

impl RepositoryClient {
    /// Create a new repository client
    pub fn new(
        adapter: Arc<dyn HostingAdapter>,
        aliases: Arc<AliasTable>,
        credential: Credential,
        limiter: RateLimiter,
    ) -> Self {
        Self {
            adapter,
            aliases,
            credential,
            limiter,
        }
    }

    /// Resolve a repository URL (or a known site alias) and fetch its metrics
    pub async fn resolve(&self, url: &str) -> Result<RepositoryMetadata, RepositoryError> {
        let canonical = self.aliases.resolve(url);

        if !canonical.contains(CANONICAL_PREFIX) {
            return Err(RepositoryError::unsupported_host(canonical));
        }

        let parsed = ParsedUrl::parse(canonical)?;
        let mut repository = RepositoryMetadata::from_url(parsed)?;

        self.refresh(&mut repository).await?;

        Ok(repository)
    }

    /// Re-fetch the metrics of `repository`
    ///
    /// On failure the previous values are left untouched.
    pub async fn refresh(&self, repository: &mut RepositoryMetadata) -> Result<(), RepositoryError> {
        self.limiter.throttle().await;

        // Read at call time so a token set after construction is honoured.
        let token = self.credential.token();

        let stats = self
            .adapter
            .fetch_repository(&repository.owner, &repository.name, token.as_deref())
            .await
            .map_err(|e| RepositoryError::lookup_failed(&repository.owner, &repository.name, e))?;

        tracing::debug!(
            repository = %repository.full_name(),
            host = self.adapter.host_name(),
            authenticated = token.is_some(),
            stars = stats.stars,
            forks = stats.forks,
            followers = stats.followers,
            "refreshed repository"
        );

        repository.apply(stats);
        Ok(())
    }
}
