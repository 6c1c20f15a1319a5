//! Namespace name filtering for list queries.

use regex::Regex;
use wharf_adapter::AdapterError;
use wharf_model::NamespaceQuery;

/// A compiled namespace name filter.
///
/// The query string has all whitespace removed and is wrapped as a
/// matches-anywhere pattern, so a namespace matches when its name contains
/// the cleaned query. An empty query matches every namespace.
///
/// The pattern is compiled once, before any record is examined: an invalid
/// pattern fails the whole listing with an explicit error rather than
/// truncating the result partway through.
#[derive(Debug)]
pub struct NamespaceFilter {
    pattern: Regex,
}

impl NamespaceFilter {
    /// Compiles the filter for the given query.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidFilter`] if the cleaned query is not a
    /// valid pattern.
    pub fn compile(query: &NamespaceQuery) -> Result<Self, AdapterError> {
        let cleaned: String = query.name.chars().filter(|c| !c.is_whitespace()).collect();
        let raw = format!(".*{cleaned}.*");

        let pattern = Regex::new(&raw).map_err(|source| AdapterError::InvalidFilter {
            pattern: raw,
            source,
        })?;

        Ok(Self { pattern })
    }

    /// Tests a namespace name against the filter.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(query: &str) -> NamespaceFilter {
        NamespaceFilter::compile(&NamespaceQuery::new(query)).unwrap()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let f = filter("");
        assert!(f.matches("team-a"));
        assert!(f.matches(""));
    }

    #[test]
    fn test_substring_match_anywhere() {
        let f = filter("team");
        assert!(f.matches("team-a"));
        assert!(f.matches("a-team"));
        assert!(f.matches("steamy"));
        assert!(!f.matches("prod"));
    }

    #[test]
    fn test_whitespace_is_stripped_from_query() {
        let f = filter("dev team");
        assert!(f.matches("devteam"));
        assert!(!f.matches("dev-team-x"));
        assert!(!f.matches("dev team"));
    }

    #[test]
    fn test_query_is_a_pattern_fragment() {
        let f = filter("dev.*x");
        assert!(f.matches("dev-team-x"));
        assert!(!f.matches("devteam"));
    }

    #[test]
    fn test_invalid_pattern_is_an_explicit_error() {
        let err = NamespaceFilter::compile(&NamespaceQuery::new("te(am")).unwrap_err();
        match err {
            AdapterError::InvalidFilter { pattern, .. } => {
                assert_eq!(pattern, ".*te(am.*");
            }
            other => panic!("expected InvalidFilter, got {other}"),
        }
    }
}
