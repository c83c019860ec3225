//! Application error types using thiserror
//!
//! Error hierarchy:
//! - UrlError: Malformed repository URLs
//! - HttpError: Transport and status failures from the shared HTTP client
//! - RegistryError: Issues with the package registry (pkg.go.dev)
//! - RepositoryError: Issues with the hosting provider (GitHub)
//! - AppError: Pipeline-level wrapper that names the failing stage

use thiserror::Error;

/// Coarse classification of every failure the pipeline can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed URL syntax
    InvalidUrl,
    /// Resolved URL is not hosted on GitHub
    UnsupportedHost,
    /// Fewer than two path segments after parsing
    MissingOwnerOrRepo,
    /// Transport or response failure from the registry
    RegistryLookupFailed,
    /// Transport or non-success status from the hosting API
    HostingLookupFailed,
}

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Registry stage failed
    #[error("failed to resolve package '{package}': {source}")]
    Registry {
        package: String,
        #[source]
        source: RegistryError,
    },

    /// Hosting stage failed
    #[error("failed to resolve repository for package '{package}': {source}")]
    Repository {
        package: String,
        #[source]
        source: RepositoryError,
    },
}

impl AppError {
    /// Returns the kind of the underlying failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Registry { .. } => ErrorKind::RegistryLookupFailed,
            AppError::Repository { source, .. } => source.kind(),
        }
    }

    /// Returns the hosting API status code, if the failure carried one
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Repository { source, .. } => source.status(),
            _ => None,
        }
    }
}

/// Errors raised while parsing a URL
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// Raw control character found in the input
    #[error("invalid control character in URL '{url}'")]
    ControlCharacter { url: String },

    /// Rejected by the URL parser
    #[error("failed to parse URL '{url}': {source}")]
    Malformed {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors raised by the shared HTTP client
#[derive(Error, Debug)]
pub enum HttpError {
    /// Client construction failed
    #[error("failed to create HTTP client: {message}")]
    Build { message: String },

    /// Request never produced a response
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-success status
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Body could not be read or decoded
    #[error("invalid response body from {url}: {message}")]
    Decode { url: String, message: String },
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Importer lookup failed
    #[error("failed to get 'imported by' information for '{package}': {source}")]
    ImportedBy {
        package: String,
        #[source]
        source: HttpError,
    },

    /// Package description lookup failed
    #[error("failed to get package information for '{package}': {source}")]
    Describe {
        package: String,
        #[source]
        source: HttpError,
    },

    /// Registry answered but declared no repository
    #[error("package '{package}' declares no repository on {registry}")]
    MissingRepository { package: String, registry: String },
}

impl RegistryError {
    /// Creates a new ImportedBy error
    pub fn imported_by(package: impl Into<String>, source: HttpError) -> Self {
        RegistryError::ImportedBy {
            package: package.into(),
            source,
        }
    }

    /// Creates a new Describe error
    pub fn describe(package: impl Into<String>, source: HttpError) -> Self {
        RegistryError::Describe {
            package: package.into(),
            source,
        }
    }

    /// Creates a new MissingRepository error
    pub fn missing_repository(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::MissingRepository {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Every registry failure is a lookup failure
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::RegistryLookupFailed
    }
}

/// Errors related to the hosting provider
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// URL is not under the GitHub host
    #[error("the URL must be under GitHub host: {url}")]
    UnsupportedHost { url: String },

    /// URL could not be parsed
    #[error("failed to get URL information: {0}")]
    InvalidUrl(#[from] UrlError),

    /// URL lacks the owner and/or repository segment
    #[error("invalid URL format. missing repo owner and/or repo name: {url}")]
    MissingOwnerOrRepo { url: String },

    /// Hosting API lookup failed
    #[error("failed to get repository info for {owner}/{repo}{}", status_suffix(.status))]
    LookupFailed {
        owner: String,
        repo: String,
        status: Option<u16>,
        #[source]
        source: HttpError,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(". Returned status: {}", code),
        None => String::new(),
    }
}

impl RepositoryError {
    /// Creates a new UnsupportedHost error
    pub fn unsupported_host(url: impl Into<String>) -> Self {
        RepositoryError::UnsupportedHost { url: url.into() }
    }

    /// Creates a new MissingOwnerOrRepo error
    pub fn missing_owner_or_repo(url: impl Into<String>) -> Self {
        RepositoryError::MissingOwnerOrRepo { url: url.into() }
    }

    /// Creates a new LookupFailed error, keeping the status code of the cause
    pub fn lookup_failed(owner: impl Into<String>, repo: impl Into<String>, source: HttpError) -> Self {
        RepositoryError::LookupFailed {
            owner: owner.into(),
            repo: repo.into(),
            status: source.status(),
            source,
        }
    }

    /// Returns the kind of this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::UnsupportedHost { .. } => ErrorKind::UnsupportedHost,
            RepositoryError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            RepositoryError::MissingOwnerOrRepo { .. } => ErrorKind::MissingOwnerOrRepo,
            RepositoryError::LookupFailed { .. } => ErrorKind::HostingLookupFailed,
        }
    }

    /// Returns the hosting API status code, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            RepositoryError::LookupFailed { status, .. } => *status,
            _ => None,
        }
    }
}
