//! pkg.go.dev adapter
//!
//! pkg.go.dev has no public JSON API, so package pages are fetched as HTML.
//! Pages used:
//! - Importers: https://pkg.go.dev/{package}?tab=importedby
//! - Overview:  https://pkg.go.dev/{package}

use crate::error::RegistryError;
use crate::http::HttpClient;
use crate::registry::RegistryAdapter;
use async_trait::async_trait;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Section of the importers tab that lists importing packages
const IMPORTED_BY_MARKER: &str = "ImportedBy";

// Links to other package pages, e.g. <a href="/github.com/a/b">github.com/a/b</a>
static PACKAGE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s[^>]*href="/([^"?#]+)"[^>]*>\s*([^<]+?)\s*</a>"#).unwrap()
});

// First link inside the "Repository" block of the package sidebar
static REPOSITORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)class="[^"]*\bUnitMeta-repo\b[^"]*".*?<a\s[^>]*href="([^"]+)""#).unwrap()
});

/// pkg.go.dev adapter
pub struct PkgGoDevAdapter {
    client: HttpClient,
    base_url: String,
}

impl PkgGoDevAdapter {
    /// Create a new pkg.go.dev adapter
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL of the importers tab
    fn build_imported_by_url(&self, package: &str) -> String {
        format!("{}/{}?tab=importedby", self.base_url, package)
    }

    /// Build the URL of the package overview
    fn build_package_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }

    /// Collect the distinct importers listed on an importers page
    fn parse_importers(package: &str, html: &str) -> BTreeSet<String> {
        let Some(start) = html.find(IMPORTED_BY_MARKER) else {
            return BTreeSet::new();
        };

        PACKAGE_LINK_RE
            .captures_iter(&html[start..])
            .filter(|caps| caps[1] == caps[2] && &caps[1] != package)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    /// Extract the repository link from an overview page
    fn parse_repository(html: &str) -> Option<String> {
        REPOSITORY_RE
            .captures(html)
            .map(|caps| caps[1].trim().to_string())
            .filter(|href| !href.is_empty())
    }
}

#[async_trait]
impl RegistryAdapter for PkgGoDevAdapter {
    fn registry_name(&self) -> &'static str {
        "pkg.go.dev"
    }

    async fn imported_by(&self, package: &str) -> Result<u64, RegistryError> {
        let url = self.build_imported_by_url(package);
        let html = self
            .client
            .get_text(&url)
            .await
            .map_err(|e| RegistryError::imported_by(package, e))?;

        let importers = Self::parse_importers(package, &html);
        Ok(importers.len() as u64)
    }

    async fn repository(&self, package: &str) -> Result<String, RegistryError> {
        let url = self.build_package_url(package);
        let html = self
            .client
            .get_text(&url)
            .await
            .map_err(|e| RegistryError::describe(package, e))?;

        Self::parse_repository(&html)
            .ok_or_else(|| RegistryError::missing_repository(package, self.registry_name()))
    }
}
