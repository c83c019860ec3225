//! Repository information from the hosting provider

use crate::domain::ParsedUrl;
use crate::error::RepositoryError;
use serde::Serialize;

/// Social metrics reported by the hosting API for one repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryStats {
    /// Repository description
    pub description: String,
    /// Number of stargazers
    pub stars: u64,
    /// Number of forks
    pub forks: u64,
    /// Number of subscribers (people watching the repository)
    pub followers: u64,
}

/// A GitHub repository and its metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryMetadata {
    /// Repository owner (first path segment)
    pub owner: String,
    /// Repository name (second path segment)
    pub name: String,
    /// Repository description
    pub description: String,
    /// Number of stars
    pub stars: u64,
    /// Number of forks
    pub forks: u64,
    /// Number of watching people
    pub followers: u64,
    /// Parsed URL the repository was resolved from
    pub source_url: ParsedUrl,
}

impl RepositoryMetadata {
    /// Build zeroed metadata from a parsed URL
    ///
    /// Fails unless the URL has at least an owner and a repository segment.
    pub fn from_url(source_url: ParsedUrl) -> Result<Self, RepositoryError> {
        let (owner, name) = match (source_url.owner(), source_url.repo()) {
            (Some(owner), Some(name)) => (owner.to_string(), name.to_string()),
            _ => return Err(RepositoryError::missing_owner_or_repo(&source_url.raw)),
        };

        Ok(Self {
            owner,
            name,
            description: String::new(),
            stars: 0,
            forks: 0,
            followers: 0,
            source_url,
        })
    }

    /// Overwrite every metric field at once
    pub fn apply(&mut self, stats: RepositoryStats) {
        self.description = stats.description;
        self.stars = stats.stars;
        self.forks = stats.forks;
        self.followers = stats.followers;
    }

    /// `owner/name` slug
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_url() {
        let url = ParsedUrl::parse("https://github.com/KEINOS/dev-go").unwrap();
        let repo = RepositoryMetadata::from_url(url).unwrap();
        assert_eq!(repo.owner, "KEINOS");
        assert_eq!(repo.name, "dev-go");
        assert_eq!(repo.full_name(), "KEINOS/dev-go");
        assert_eq!(repo.stars, 0);
        assert_eq!(repo.forks, 0);
        assert_eq!(repo.followers, 0);
        assert!(repo.description.is_empty());
    }

    #[test]
    fn test_from_url_missing_segments() {
        for raw in ["https://github.com/", "https://github.com/KEINOS"] {
            let url = ParsedUrl::parse(raw).unwrap();
            let err = RepositoryMetadata::from_url(url).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingOwnerOrRepo);
            assert!(err
                .to_string()
                .contains("missing repo owner and/or repo name"));
        }
    }

    #[test]
    fn test_apply_overwrites_all_metrics() {
        let url = ParsedUrl::parse("https://github.com/KEINOS/dev-go").unwrap();
        let mut repo = RepositoryMetadata::from_url(url).unwrap();
        repo.apply(RepositoryStats {
            description: "dev tools".to_string(),
            stars: 11,
            forks: 2,
            followers: 2,
        });
        assert_eq!(repo.description, "dev tools");
        assert_eq!((repo.stars, repo.forks, repo.followers), (11, 2, 2));
    }
}
