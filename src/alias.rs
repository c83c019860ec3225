//! Site URL aliases
//!
//! Some packages declare a project site instead of their GitHub repository.
//! The alias table maps such site URLs to the repository they live in.

use std::collections::HashMap;

/// Built-in aliases
const DEFAULT_ALIASES: &[(&str, &str)] = &[("https://joe-bot.net/", "https://github.com/go-joe/joe")];

/// Exact-match mapping from site URLs to GitHub repository URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Create an empty table
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add an alias, replacing any previous mapping for `from`
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let _ = self.entries.insert(from.into(), to.into());
    }

    /// Builder-style variant of [`AliasTable::insert`]
    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.insert(from, to);
        self
    }

    /// Returns the canonical URL for `url`, or `url` itself when unlisted
    ///
    /// Keys must match byte for byte, trailing slash included.
    pub fn resolve<'a>(&'a self, url: &'a str) -> &'a str {
        match self.entries.get(url) {
            Some(canonical) => {
                tracing::debug!(from = url, to = %canonical, "resolved URL alias");
                canonical
            }
            None => url,
        }
    }

    /// Number of aliases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no aliases
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        DEFAULT_ALIASES
            .iter()
            .fold(Self::empty(), |table, (from, to)| table.with_alias(*from, *to))
    }
}

/// Parse a `FROM=TO` alias argument
pub fn parse_alias(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(format!("invalid alias '{}': expected FROM=TO", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alias() {
        let table = AliasTable::default();
        assert_eq!(
            table.resolve("https://joe-bot.net/"),
            "https://github.com/go-joe/joe"
        );
    }

    #[test]
    fn test_unlisted_url_is_returned_unchanged() {
        let table = AliasTable::default();
        assert_eq!(table.resolve("https://foo.bar/"), "https://foo.bar/");
    }

    #[test]
    fn test_match_is_exact() {
        let table = AliasTable::default();
        // no trailing-slash normalization
        assert_eq!(table.resolve("https://joe-bot.net"), "https://joe-bot.net");
        // no prefix matching
        assert_eq!(
            table.resolve("https://joe-bot.net/docs"),
            "https://joe-bot.net/docs"
        );
        // no case folding
        assert_eq!(table.resolve("https://JOE-bot.net/"), "https://JOE-bot.net/");
    }

    #[test]
    fn test_insert_extends_and_replaces() {
        let mut table = AliasTable::empty().with_alias("https://a.dev/", "https://github.com/a/a");
        assert_eq!(table.len(), 1);

        table.insert("https://a.dev/", "https://github.com/a/b");
        table.insert("https://c.dev/", "https://github.com/c/c");
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("https://a.dev/"), "https://github.com/a/b");
        assert_eq!(table.resolve("https://c.dev/"), "https://github.com/c/c");
    }

    #[test]
    fn test_empty_table() {
        let table = AliasTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.resolve("https://joe-bot.net/"), "https://joe-bot.net/");
    }

    #[test]
    fn test_parse_alias() {
        assert_eq!(
            parse_alias("https://a.dev/=https://github.com/a/a"),
            Ok((
                "https://a.dev/".to_string(),
                "https://github.com/a/a".to_string()
            ))
        );
        assert!(parse_alias("https://a.dev/").is_err());
        assert!(parse_alias("=https://github.com/a/a").is_err());
        assert!(parse_alias("https://a.dev/=").is_err());
    }
}
