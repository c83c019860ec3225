//! Registry access for resolving package metadata
//!
//! This module provides:
//! - The `RegistryAdapter` seam over a concrete registry
//! - The pkg.go.dev adapter
//! - `RegistryClient`, which throttles and normalizes around an adapter

mod pkg_go_dev;

pub use pkg_go_dev::PkgGoDevAdapter;

use crate::domain::PackageMetadata;
use crate::error::RegistryError;
use crate::rate_limit::RateLimiter;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for registry adapters
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Count the known packages importing `package`
    async fn imported_by(&self, package: &str) -> Result<u64, RegistryError>;

    /// Fetch the repository reference declared for `package`
    ///
    /// The reference may or may not carry a scheme.
    async fn repository(&self, package: &str) -> Result<String, RegistryError>;
}

/// Resolves package names into [`PackageMetadata`]
#[derive(Clone)]
pub struct RegistryClient {
    adapter: Arc<dyn RegistryAdapter>,
    limiter: RateLimiter,
}

impl RegistryClient {
    /// Create a new registry client around an adapter
    pub fn new(adapter: Arc<dyn RegistryAdapter>, limiter: RateLimiter) -> Self {
        Self { adapter, limiter }
    }

    /// Get the registry name
    pub fn registry_name(&self) -> &'static str {
        self.adapter.registry_name()
    }

    /// Count the packages importing `package`
    pub async fn lookup_dependent_count(&self, package: &str) -> Result<u64, RegistryError> {
        self.adapter.imported_by(package).await
    }

    /// Fetch the declared repository URL of `package`, as an https URL
    pub async fn lookup_repository_url(&self, package: &str) -> Result<String, RegistryError> {
        let reference = self.adapter.repository(package).await?;
        Ok(normalize_repository_url(&reference))
    }

    /// Pull the package information
    ///
    /// The importer count is fetched first; the repository is only looked up
    /// when that succeeded.
    pub async fn resolve(&self, package: &str) -> Result<PackageMetadata, RegistryError> {
        self.limiter.throttle().await;

        let dependent_count = self.lookup_dependent_count(package).await?;
        let repository_url = self.lookup_repository_url(package).await?;

        tracing::debug!(
            package,
            dependent_count,
            repository = %repository_url,
            registry = self.registry_name(),
            "resolved package"
        );

        Ok(PackageMetadata::new(package, repository_url, dependent_count))
    }
}

/// Force an explicit `https://` scheme onto a repository reference
pub fn normalize_repository_url(reference: &str) -> String {
    let reference = reference.trim();
    let bare = reference
        .strip_prefix("https://")
        .or_else(|| reference.strip_prefix("http://"))
        .unwrap_or(reference);
    format!("https://{}", bare)
}
