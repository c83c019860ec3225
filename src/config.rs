//! Resolver configuration
//!
//! Everything the pipeline needs from its embedding application: where the two
//! remote APIs live, the GitHub token, the alias table and the cooldown.

use crate::alias::AliasTable;
use crate::rate_limit::DEFAULT_COOLDOWN;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Default pkg.go.dev base URL
pub const DEFAULT_REGISTRY_URL: &str = "https://pkg.go.dev";

/// Default GitHub REST API base URL
pub const DEFAULT_HOSTING_URL: &str = "https://api.github.com";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("pkgstars/", env!("CARGO_PKG_VERSION"));

/// Shared handle to the GitHub personal access token
///
/// Clones share the same token, and readers see the value current at the time
/// of the read. An empty token means anonymous access.
#[derive(Clone, Default)]
pub struct Credential {
    token: Arc<RwLock<String>>,
}

impl Credential {
    /// Create a credential holding `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token.into())),
        }
    }

    /// Replace the token for every clone of this handle
    pub fn set(&self, token: impl Into<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = token.into();
    }

    /// Current token, or None for anonymous access
    pub fn token(&self) -> Option<String> {
        let guard = self.token.read().unwrap_or_else(|e| e.into_inner());
        if guard.is_empty() {
            None
        } else {
            Some(guard.clone())
        }
    }

    /// Whether requests will be authenticated
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_authenticated() {
            "<redacted>"
        } else {
            "<anonymous>"
        };
        f.debug_tuple("Credential").field(&state).finish()
    }
}

/// Configuration for the resolution pipeline
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// pkg.go.dev base URL
    pub registry_url: String,
    /// GitHub REST API base URL
    pub hosting_url: String,
    /// GitHub token
    pub credential: Credential,
    /// Site URL aliases
    pub aliases: AliasTable,
    /// Pause before each remote call
    pub cooldown: Duration,
    /// HTTP request timeout
    pub timeout: Duration,
    /// HTTP User-Agent
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            hosting_url: DEFAULT_HOSTING_URL.to_string(),
            credential: Credential::default(),
            aliases: AliasTable::default(),
            cooldown: DEFAULT_COOLDOWN,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Set the GitHub token
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.credential.set(token);
        self
    }

    /// Add a site URL alias
    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.aliases.insert(from, to);
        self
    }

    /// Set the pause before each remote call
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Point the pipeline at other API endpoints
    pub fn with_endpoints(
        mut self,
        registry_url: impl Into<String>,
        hosting_url: impl Into<String>,
    ) -> Self {
        self.registry_url = registry_url.into();
        self.hosting_url = hosting_url.into();
        self
    }
}
