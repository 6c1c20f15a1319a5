//! Remote namespace records and namespace query filters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A namespace in a remote registry.
///
/// A namespace is a top-level grouping of repositories, analogous to an
/// organization or project scope. The `name` field carries exactly the
/// remote record's name with no normalization; `metadata` holds
/// provider-specific attributes the host passes through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Namespace {
    /// Remote namespace identifier.
    pub name: String,

    /// Provider-specific attributes (owner, visibility, counts, ...).
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Namespace {
    /// Creates a namespace with the given name and metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, metadata: HashMap<String, serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }

}

/// A name filter for namespace listing.
///
/// The filter matches any remote namespace whose name contains the query
/// string (with whitespace removed). An empty query matches every namespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamespaceQuery {
    /// Substring/pattern to match against namespace names.
    pub name: String,
}

impl NamespaceQuery {
    /// Creates a query for the given name pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use wharf_model::NamespaceQuery;
    ///
    /// let query = NamespaceQuery::new("team");
    /// assert_eq!(query.name, "team");
    ///
    /// let all = NamespaceQuery::default();
    /// assert!(all.name.is_empty());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
