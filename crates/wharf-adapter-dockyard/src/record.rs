//! Wire model for Dockyard namespace records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wharf_model::Namespace;

/// Response body of `GET /dockyard/v2/visible/namespaces`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceList {
    /// Namespace records in remote listing order.
    pub namespaces: Vec<NamespaceRecord>,
}

/// A namespace record as the Dockyard API returns it.
///
/// `domain_public` and `domain_name` are marked internal-only by the remote
/// API; they are defaulted on decode and never serialized outbound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceRecord {
    /// Remote record identifier.
    #[serde(default)]
    pub id: i64,

    /// Namespace name.
    pub name: String,

    /// Account that created the namespace.
    #[serde(default)]
    pub creator_name: String,

    /// Internal visibility flag.
    #[serde(skip, default)]
    pub domain_public: i32,

    /// Authorization level of the calling account.
    #[serde(default)]
    pub auth: i32,

    /// Internal owning-domain name.
    #[serde(skip, default)]
    pub domain_name: String,

    /// Number of accounts with access to the namespace.
    #[serde(default)]
    pub user_count: i64,

    /// Number of images stored under the namespace.
    #[serde(default)]
    pub image_count: i64,
}

impl NamespaceRecord {
    /// Returns the record's attributes as the fixed provider metadata map.
    #[must_use]
    pub fn metadata(&self) -> HashMap<String, serde_json::Value> {
        let mut metadata = HashMap::new();
        metadata.insert("id".to_string(), serde_json::json!(self.id));
        metadata.insert(
            "creator_name".to_string(),
            serde_json::json!(self.creator_name),
        );
        metadata.insert(
            "domain_public".to_string(),
            serde_json::json!(self.domain_public),
        );
        metadata.insert("auth".to_string(), serde_json::json!(self.auth));
        metadata.insert(
            "domain_name".to_string(),
            serde_json::json!(self.domain_name),
        );
        metadata.insert("user_count".to_string(), serde_json::json!(self.user_count));
        metadata.insert(
            "image_count".to_string(),
            serde_json::json!(self.image_count),
        );
        metadata
    }

    /// Translates the record into the domain namespace, keeping the remote
    /// name exactly as-is.
    #[must_use]
    pub fn into_namespace(self) -> Namespace {
        let metadata = self.metadata();
        Namespace::new(self.name, metadata)
    }
}

/// Request body of `POST /dockyard/v2/namespaces`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNamespaceRequest {
    /// Name of the namespace to create; the sole payload field.
    pub namespace: String,
}
