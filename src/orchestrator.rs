//! Attractiveness orchestrator
//!
//! This module provides:
//! - Pipeline coordination: registry → alias → URL → hosting → score
//! - Sequential processing of several package names
//! - Fail-fast by default, with optional continuation past failed packages

use crate::config::ResolverConfig;
use crate::domain::Attractiveness;
use crate::error::{AppError, HttpError};
use crate::hosting::{GitHubAdapter, RepositoryClient};
use crate::http::HttpClient;
use crate::progress::Progress;
use crate::rate_limit::RateLimiter;
use crate::registry::{PkgGoDevAdapter, RegistryClient};
use crate::score::score;
use std::sync::Arc;

/// Orchestrator for the attractiveness pipeline
#[derive(Clone)]
pub struct Orchestrator {
    /// Registry stage
    registry: RegistryClient,
    /// Hosting stage
    repository: RepositoryClient,
    /// Continue with the next package after a failure
    keep_going: bool,
    /// Show a spinner while resolving
    show_progress: bool,
}

/// Result of running the orchestrator over several packages
#[derive(Debug, Default)]
pub struct OrchestratorResult {
    /// One record per resolved package, in input order
    pub reports: Vec<Attractiveness>,
    /// Failures, in input order
    pub errors: Vec<AppError>,
    /// Packages never attempted because an earlier one failed
    pub skipped: Vec<String>,
}

impl OrchestratorResult {
    /// Whether every requested package was resolved
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.skipped.is_empty()
    }
}

impl Orchestrator {
    /// Create an orchestrator talking to pkg.go.dev and GitHub
    pub fn new(config: &ResolverConfig) -> Result<Self, HttpError> {
        let client = HttpClient::with_config(config.timeout, &config.user_agent)?;
        let limiter = RateLimiter::new(config.cooldown);

        let registry = RegistryClient::new(
            Arc::new(PkgGoDevAdapter::new(client.clone(), &config.registry_url)),
            limiter,
        );
        let repository = RepositoryClient::new(
            Arc::new(GitHubAdapter::new(client, &config.hosting_url)),
            Arc::new(config.aliases.clone()),
            config.credential.clone(),
            limiter,
        );

        Ok(Self::with_clients(registry, repository))
    }

    /// Create an orchestrator from prebuilt clients (for testing)
    pub fn with_clients(registry: RegistryClient, repository: RepositoryClient) -> Self {
        Self {
            registry,
            repository,
            keep_going: false,
            show_progress: false,
        }
    }

    /// Continue past failed packages instead of stopping at the first one
    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Show a spinner while resolving
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Compute the attractiveness of one package
    pub async fn compute_attractiveness(&self, package: &str) -> Result<Attractiveness, AppError> {
        let metadata = self
            .registry
            .resolve(package)
            .await
            .map_err(|source| AppError::Registry {
                package: package.to_string(),
                source,
            })?;

        let repository = self
            .repository
            .resolve(&metadata.repository_url)
            .await
            .map_err(|source| AppError::Repository {
                package: package.to_string(),
                source,
            })?;

        let score = score([
            repository.stars,
            repository.forks,
            repository.followers,
            metadata.dependent_count,
        ]);

        Ok(Attractiveness {
            package: metadata.name,
            repository: repository.name,
            url: metadata.repository_url,
            description: repository.description,
            score,
            stars: repository.stars,
            forks: repository.forks,
            followers: repository.followers,
            dependent_count: metadata.dependent_count,
        })
    }

    /// Resolve several packages one after another
    pub async fn run(&self, packages: &[String]) -> OrchestratorResult {
        let mut progress = Progress::new(self.show_progress);
        let mut result = OrchestratorResult::default();

        for (index, package) in packages.iter().enumerate() {
            progress.spinner(&format!("Resolving {}", package));
            let outcome = self.compute_attractiveness(package).await;
            progress.finish_and_clear();

            match outcome {
                Ok(report) => result.reports.push(report),
                Err(e) => {
                    tracing::warn!(package = %package, kind = ?e.kind(), "failed to compute attractiveness");
                    result.errors.push(e);

                    if !self.keep_going {
                        result.skipped = packages[index + 1..].to_vec();
                        break;
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::config::Credential;
    use crate::domain::RepositoryStats;
    use crate::error::{ErrorKind, RegistryError};
    use crate::hosting::HostingAdapter;
    use crate::registry::RegistryAdapter;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Registry answering from a fixed package table
    struct FakeRegistry {
        packages: HashMap<&'static str, (u64, &'static str)>,
    }

    #[async_trait]
    impl RegistryAdapter for FakeRegistry {
        fn registry_name(&self) -> &'static str {
            "fake registry"
        }

        async fn imported_by(&self, package: &str) -> Result<u64, RegistryError> {
            self.packages
                .get(package)
                .map(|(count, _)| *count)
                .ok_or_else(|| {
                    RegistryError::imported_by(
                        package,
                        HttpError::Status {
                            url: package.to_string(),
                            status: 404,
                        },
                    )
                })
        }

        async fn repository(&self, package: &str) -> Result<String, RegistryError> {
            self.packages
                .get(package)
                .map(|(_, repo)| repo.to_string())
                .ok_or_else(|| RegistryError::missing_repository(package, "fake registry"))
        }
    }

    /// Hosting answering from a fixed repository table
    struct FakeHosting {
        repositories: HashMap<&'static str, RepositoryStats>,
    }

    #[async_trait]
    impl HostingAdapter for FakeHosting {
        fn host_name(&self) -> &'static str {
            "fake hosting"
        }

        async fn fetch_repository(
            &self,
            owner: &str,
            repo: &str,
            _token: Option<&str>,
        ) -> Result<RepositoryStats, HttpError> {
            let key = format!("{}/{}", owner, repo);
            self.repositories
                .get(key.as_str())
                .cloned()
                .ok_or(HttpError::Status { url: key, status: 404 })
        }
    }

    fn orchestrator() -> Orchestrator {
        let limiter = RateLimiter::new(Duration::from_millis(1));
        let registry = FakeRegistry {
            packages: HashMap::from([
                ("github.com/KEINOS/dev-go/cmd", (0, "github.com/KEINOS/dev-go")),
                ("github.com/go-joe/joe", (4, "joe-bot.net/")),
                ("github.com/KEINOS/gone", (1, "github.com/KEINOS/gone")),
                ("gitlab.com/foo/bar", (1, "gitlab.com/foo/bar")),
            ]),
        };
        let hosting = FakeHosting {
            repositories: HashMap::from([
                (
                    "KEINOS/dev-go",
                    RepositoryStats {
                        description: "dev container".to_string(),
                        stars: 11,
                        forks: 2,
                        followers: 2,
                    },
                ),
                (
                    "go-joe/joe",
                    RepositoryStats {
                        description: "A general-purpose bot library".to_string(),
                        stars: 3,
                        forks: 0,
                        followers: 0,
                    },
                ),
            ]),
        };

        Orchestrator::with_clients(
            RegistryClient::new(Arc::new(registry), limiter),
            RepositoryClient::new(
                Arc::new(hosting),
                Arc::new(AliasTable::default()),
                Credential::default(),
                limiter,
            ),
        )
    }

    #[tokio::test]
    async fn test_compute_attractiveness() {
        let report = orchestrator()
            .compute_attractiveness("github.com/KEINOS/dev-go/cmd")
            .await
            .unwrap();

        assert_eq!(report.package, "github.com/KEINOS/dev-go/cmd");
        assert_eq!(report.repository, "dev-go");
        assert_eq!(report.url, "https://github.com/KEINOS/dev-go");
        assert_eq!(report.signals(), [11, 2, 2, 0]);
        assert_eq!(report.score, 11);
    }

    #[tokio::test]
    async fn test_compute_attractiveness_through_alias() {
        let report = orchestrator()
            .compute_attractiveness("github.com/go-joe/joe")
            .await
            .unwrap();

        assert_eq!(report.url, "https://joe-bot.net/");
        assert_eq!(report.repository, "joe");
        assert_eq!(report.score, 5);
    }

    #[tokio::test]
    async fn test_each_stage_reports_its_failure() {
        let orchestrator = orchestrator();
        let cases = [
            ("github.com/KEINOS/undefined", ErrorKind::RegistryLookupFailed, "failed to resolve package"),
            ("gitlab.com/foo/bar", ErrorKind::UnsupportedHost, "failed to resolve repository"),
            ("github.com/KEINOS/gone", ErrorKind::HostingLookupFailed, "failed to resolve repository"),
        ];

        for (package, kind, prefix) in cases {
            let err = orchestrator.compute_attractiveness(package).await.unwrap_err();
            assert_eq!(err.kind(), kind, "{}", package);
            assert!(err.to_string().starts_with(prefix), "{}", err);
        }
    }

    #[tokio::test]
    async fn test_run_stops_at_first_failure() {
        let packages = vec![
            "github.com/KEINOS/dev-go/cmd".to_string(),
            "github.com/KEINOS/undefined".to_string(),
            "github.com/go-joe/joe".to_string(),
        ];

        let result = orchestrator().run(&packages).await;
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.skipped, vec!["github.com/go-joe/joe".to_string()]);
        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_run_keep_going() {
        let packages = vec![
            "github.com/KEINOS/undefined".to_string(),
            "github.com/KEINOS/dev-go/cmd".to_string(),
            "github.com/go-joe/joe".to_string(),
        ];

        let result = orchestrator().with_keep_going(true).run(&packages).await;
        let names: Vec<_> = result.reports.iter().map(|r| r.package.as_str()).collect();
        assert_eq!(names, vec!["github.com/KEINOS/dev-go/cmd", "github.com/go-joe/joe"]);
        assert_eq!(result.errors.len(), 1);
        assert!(result.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_run_all_success() {
        let packages = vec!["github.com/KEINOS/dev-go/cmd".to_string()];
        let result = orchestrator().run(&packages).await;
        assert!(result.is_success());
    }

    #[test]
    fn test_new_with_default_config() {
        assert!(Orchestrator::new(&ResolverConfig::default()).is_ok());
    }
}
