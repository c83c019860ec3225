//! Parsed URL information
//!
//! Splits a repository URL into scheme, host and path segments, and tells
//! whether it points at GitHub.

use crate::error::UrlError;
use serde::Serialize;
use std::fmt;
use percent_encoding::percent_decode_str;
use url::Url;

/// The one supported hosting provider
pub const CANONICAL_HOST: &str = "github.com";

/// A URL broken down into the parts the pipeline needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    /// The original input, kept verbatim
    pub raw: String,
    /// Protocol
    pub scheme: String,
    /// Host, or host:port when a port is given
    pub host: String,
    /// Non-empty path segments in their original order
    pub path_segments: Vec<String>,
}

impl ParsedUrl {
    /// Parse a raw URL string
    pub fn parse(raw: &str) -> Result<Self, UrlError> {
        // The WHATWG parser silently strips or escapes control characters,
        // so reject them before it gets the chance.
        if raw.chars().any(|c| c.is_ascii_control()) {
            return Err(UrlError::ControlCharacter {
                url: raw.to_string(),
            });
        }

        // Validation and scheme only; the WHATWG parser normalizes host and path.
        let parsed = Url::parse(raw).map_err(|source| UrlError::Malformed {
            url: raw.to_string(),
            source,
        })?;

        let (host, path) = split_host_and_path(raw);

        let path_segments = percent_decode_str(path)
            .decode_utf8_lossy()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            raw: raw.to_string(),
            scheme: parsed.scheme().to_string(),
            host: host.to_string(),
            path_segments,
        })
    }

    /// Returns true if the host is GitHub
    pub fn is_canonical_host(&self) -> bool {
        self.host == CANONICAL_HOST
    }

    /// Owner segment, when present
    pub fn owner(&self) -> Option<&str> {
        self.path_segments.first().map(String::as_str)
    }

    /// Repository name segment, when present
    pub fn repo(&self) -> Option<&str> {
        self.path_segments.get(1).map(String::as_str)
    }
}

/// Host (with port, without userinfo) and path of `raw`, exactly as written
fn split_host_and_path(raw: &str) -> (&str, &str) {
    let rest = raw.split_once(':').map_or(raw, |(_, rest)| rest);
    let rest = rest.find(['?', '#']).map_or(rest, |end| &rest[..end]);

    match rest.strip_prefix("//") {
        Some(hier) => {
            let (authority, path) = hier.split_at(hier.find('/').unwrap_or(hier.len()));
            let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
            (host, path)
        }
        None => ("", rest),
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
