//! GitHub REST API adapter
//!
//! API endpoint: https://api.github.com/repos/{owner}/{repo}

use crate::domain::RepositoryStats;
use crate::error::HttpError;
use crate::hosting::HostingAdapter;
use crate::http::HttpClient;
use async_trait::async_trait;
use serde::Deserialize;

/// Media type recommended by the GitHub REST API
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Repository fields we need, named as GitHub returns them
#[derive(Debug, Deserialize)]
struct RepositoryResponse {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    /// People watching the repository
    #[serde(default)]
    subscribers_count: u64,
}

impl From<RepositoryResponse> for RepositoryStats {
    fn from(response: RepositoryResponse) -> Self {
        Self {
            description: response.description.unwrap_or_default(),
            stars: response.stargazers_count,
            forks: response.forks_count,
            followers: response.subscribers_count,
        }
    }
}

/// GitHub adapter
pub struct GitHubAdapter {
    client: HttpClient,
    base_url: String,
}

impl GitHubAdapter {
    /// Create a new GitHub adapter
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a repository
    fn build_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}", self.base_url, owner, repo)
    }
}

#[async_trait]
impl HostingAdapter for GitHubAdapter {
    fn host_name(&self) -> &'static str {
        "GitHub"
    }

    async fn fetch_repository(
        &self,
        owner: &str,
        repo: &str,
        token: Option<&str>,
    ) -> Result<RepositoryStats, HttpError> {
        let url = self.build_url(owner, repo);
        let response: RepositoryResponse = self.client.get_json(&url, GITHUB_ACCEPT, token).await?;
        Ok(response.into())
    }
}
