//! The per-package result record

use serde::Serialize;

/// Attractiveness of one package along with the signals it was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attractiveness {
    /// Import path of the package
    pub package: String,
    /// Repository name on GitHub
    pub repository: String,
    /// Repository URL declared by the registry
    pub url: String,
    /// Repository description
    pub description: String,
    /// Combined score
    pub score: u64,
    /// Number of stars
    pub stars: u64,
    /// Number of forks
    pub forks: u64,
    /// Number of watching people
    pub followers: u64,
    /// Number of importing packages
    pub dependent_count: u64,
}

impl Attractiveness {
    /// The raw signals in scoring order
    pub fn signals(&self) -> [u64; 4] {
        [self.stars, self.forks, self.followers, self.dependent_count]
    }
}
