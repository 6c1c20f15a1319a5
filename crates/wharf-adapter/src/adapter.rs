//! The operation set every registry adapter exposes to the host.

use crate::error::AdapterError;
use async_trait::async_trait;
use wharf_model::{
    HealthStatus, Namespace, NamespaceQuery, RegistryInfo, Resource, ResourceMetadata,
};

/// A registry adapter as seen by the Wharf host platform.
///
/// Adapters translate the host's uniform operation set into the remote
/// registry's proprietary API. Image manifest and blob transfer is not part
/// of this contract; it is handled by the native registry protocol client
/// the host composes alongside an adapter.
///
/// Implementations hold no mutable state beyond their immutable connection
/// settings and pooled HTTP clients, so the host may call any operation from
/// multiple tasks concurrently.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Reports the adapter's capabilities: supported resource types,
    /// filters, and replication triggers.
    ///
    /// # Errors
    ///
    /// Returns an error if the capability set cannot be determined.
    fn info(&self) -> Result<RegistryInfo, AdapterError>;

    /// Probes the health of the remote registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the probe itself cannot be carried out.
    async fn health_check(&self) -> Result<HealthStatus, AdapterError>;

    /// Lists remote namespaces matching the query.
    ///
    /// An empty query matches every namespace. The remote listing order is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx remote status, a
    /// malformed response, or an invalid filter pattern.
    async fn list_namespaces(
        &self,
        query: &NamespaceQuery,
    ) -> Result<Vec<Namespace>, AdapterError>;

    /// Fetches a single namespace by name.
    ///
    /// # Errors
    ///
    /// A namespace that does not exist remotely is an error (a remote-API
    /// error with the not-found status), never a success with empty fields.
    async fn get_namespace(&self, name: &str) -> Result<Namespace, AdapterError>;

    /// Converts resource metadata into the form the remote registry expects.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata cannot be represented remotely.
    fn convert_resource_metadata(
        &self,
        metadata: &ResourceMetadata,
        namespace: Option<&Namespace>,
    ) -> Result<ResourceMetadata, AdapterError>;

    /// Ensures every namespace referenced by the resources exists remotely
    /// before image data transfer begins.
    ///
    /// The operation is idempotent: namespaces that already exist are left
    /// alone. On failure an unspecified subset of missing namespaces may
    /// already have been created; retrying is safe.
    ///
    /// # Errors
    ///
    /// Returns the first lookup or creation failure; there is no
    /// partial-success reporting across namespaces.
    async fn prepare_for_push(&self, resources: &[Resource]) -> Result<(), AdapterError>;
}
