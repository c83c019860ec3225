//! Package information from the registry

use serde::Serialize;

/// What the registry knows about a package
///
/// Only built by the registry client once every lookup has succeeded, so a
/// value of this type is always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    /// Import path of the package
    pub name: String,
    /// Declared repository, normalized to https
    pub repository_url: String,
    /// Number of known packages importing this package
    pub dependent_count: u64,
}

impl PackageMetadata {
    /// Create a new PackageMetadata
    pub fn new(
        name: impl Into<String>,
        repository_url: impl Into<String>,
        dependent_count: u64,
    ) -> Self {
        Self {
            name: name.into(),
            repository_url: repository_url.into(),
            dependent_count,
        }
    }
}
