//! Units of replication work: repositories, resource metadata, resources.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A repository reference inside a remote registry.
///
/// The repository name is an image path whose first `/`-separated segment
/// identifies the owning namespace (e.g., `team-a/billing` belongs to the
/// namespace `team-a`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Full repository name, including the namespace segment.
    pub name: String,

    /// Free-form repository attributes supplied by the host.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Repository {
    /// Creates a repository reference with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: HashMap::new(),
        }
    }

    /// Returns the owning namespace: the first non-empty `/`-separated
    /// segment of the repository name.
    ///
    /// A name without a separator is its own namespace. Returns `None` when
    /// the name has no usable segment at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use wharf_model::Repository;
    ///
    /// assert_eq!(Repository::new("team-a/billing").namespace(), Some("team-a"));
    /// assert_eq!(Repository::new("standalone").namespace(), Some("standalone"));
    /// assert_eq!(Repository::new("").namespace(), None);
    /// ```
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.name.split('/').find(|segment| !segment.is_empty())
    }
}

/// Replication metadata for a single resource: the repository it lives in
/// and the tags to transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceMetadata {
    /// Target repository.
    pub repository: Repository,

    /// Tags selected for replication.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ResourceMetadata {
    /// Creates metadata for the given repository with no tags.
    #[must_use]
    pub const fn new(repository: Repository) -> Self {
        Self {
            repository,
            tags: Vec::new(),
        }
    }

    /// Sets the tag list.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// A host-defined unit of replication work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Resource type tag (see [`crate::RESOURCE_TYPE_IMAGE`]).
    pub resource_type: String,

    /// Replication metadata for the resource.
    pub metadata: ResourceMetadata,
}

impl Resource {
    /// Creates an image resource with the given metadata.
    #[must_use]
    pub fn image(metadata: ResourceMetadata) -> Self {
        Self {
            resource_type: crate::RESOURCE_TYPE_IMAGE.to_string(),
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_namespace_with_separator() {
        let repository = Repository::new("team-a/billing");
        assert_eq!(repository.namespace(), Some("team-a"));
    }

    #[test]
    fn test_repository_namespace_nested_path() {
        let repository = Repository::new("team-a/billing/worker");
        assert_eq!(repository.namespace(), Some("team-a"));
    }

    #[test]
    fn test_repository_namespace_without_separator() {
        let repository = Repository::new("standalone");
        assert_eq!(repository.namespace(), Some("standalone"));
    }

    #[test]
    fn test_repository_namespace_skips_leading_empty_segment() {
        let repository = Repository::new("/team-a/billing");
        assert_eq!(repository.namespace(), Some("team-a"));
    }

    #[test]
    fn test_repository_namespace_empty_name() {
        assert_eq!(Repository::new("").namespace(), None);
        assert_eq!(Repository::new("/").namespace(), None);
    }

    #[test]
    fn test_resource_image() {
        let metadata = ResourceMetadata::new(Repository::new("team-a/billing"))
            .with_tags(vec!["v1".to_string(), "latest".to_string()]);
        let resource = Resource::image(metadata);

        assert_eq!(resource.resource_type, crate::RESOURCE_TYPE_IMAGE);
        assert_eq!(resource.metadata.tags.len(), 2);
    }
}
