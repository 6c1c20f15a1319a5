//! The Dockyard adapter facade and its namespace services.

use crate::filter::NamespaceFilter;
use crate::record::{CreateNamespaceRequest, NamespaceList, NamespaceRecord};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::collections::HashSet;
use wharf_adapter::{Adapter, AdapterError};
use wharf_http::{build_transport, BasicAuthorizer, Client, HttpError, Modifier, DEFAULT_TIMEOUT};
use wharf_model::{
    FilterStyle, HealthStatus, Namespace, NamespaceQuery, Registry, RegistryInfo, Resource,
    ResourceMetadata, FILTER_TYPE_NAME, FILTER_TYPE_TAG, RESOURCE_TYPE_IMAGE, TRIGGER_MANUAL,
    TRIGGER_SCHEDULED,
};

const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Replication adapter for the Dockyard image repository API.
///
/// Holds the immutable connection settings and a single pooled HTTP client.
/// The Dockyard namespace JSON APIs expect basic authorization, which the
/// client's modifier chain attaches; endpoints under a different
/// authorization scheme go through the client's unmodified send path over
/// the same transport.
#[derive(Debug)]
pub struct DockyardAdapter {
    registry: Registry,
    client: Client,
}

impl DockyardAdapter {
    /// Creates an adapter for the given registry connection settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed or the
    /// configured credential does not form a valid authorization header.
    pub fn new(registry: &Registry) -> Result<Self, AdapterError> {
        let transport = build_transport(registry.insecure, DEFAULT_TIMEOUT)?;

        let mut modifiers: Vec<Box<dyn Modifier>> = Vec::new();
        if let Some(credential) = &registry.credential {
            modifiers.push(Box::new(BasicAuthorizer::new(
                &credential.access_key,
                &credential.access_secret,
            )?));
        }

        Ok(Self {
            registry: registry.clone(),
            client: Client::new(transport, modifiers),
        })
    }

    /// Sends a request through the authenticated client and returns the
    /// status with the raw body text.
    async fn dispatch(&self, request: reqwest::Request) -> Result<(u16, String), AdapterError> {
        let response = self.client.send(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(HttpError::from)?;
        Ok((status, body))
    }

    fn is_success(status: u16) -> bool {
        (200..300).contains(&status)
    }

    async fn get_namespace_record(&self, name: &str) -> Result<NamespaceRecord, AdapterError> {
        let url = format!("{}/dockyard/v2/namespaces/{name}", self.registry.url);
        let request = self
            .client
            .request(Method::GET, &url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .build()
            .map_err(HttpError::from)?;

        let (status, body) = self.dispatch(request).await?;
        if !Self::is_success(status) {
            return Err(AdapterError::remote_api(status, body));
        }

        let record: NamespaceRecord = serde_json::from_str(&body)?;
        Ok(record)
    }

    async fn create_namespace(&self, name: &str) -> Result<(), AdapterError> {
        let url = format!("{}/dockyard/v2/namespaces", self.registry.url);
        let payload = serde_json::to_vec(&CreateNamespaceRequest {
            namespace: name.to_string(),
        })?;

        let request = self
            .client
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(payload)
            .build()
            .map_err(HttpError::from)?;

        let (status, body) = self.dispatch(request).await?;
        if !Self::is_success(status) {
            return Err(AdapterError::remote_api(status, body));
        }

        tracing::debug!(namespace = name, "namespace created");
        Ok(())
    }
}

/// Derives the deduplicated set of namespaces the resources require: the
/// first non-empty path segment of each repository name. Resources with no
/// usable segment are skipped.
fn candidate_namespaces(resources: &[Resource]) -> HashSet<String> {
    resources
        .iter()
        .filter_map(|resource| resource.metadata.repository.namespace())
        .map(ToString::to_string)
        .collect()
}

#[async_trait]
impl Adapter for DockyardAdapter {
    fn info(&self) -> Result<RegistryInfo, AdapterError> {
        Ok(RegistryInfo {
            registry_type: crate::REGISTRY_TYPE.to_string(),
            description: "Adapter for the Dockyard image repository service".to_string(),
            supported_resource_types: vec![RESOURCE_TYPE_IMAGE.to_string()],
            supported_resource_filters: vec![
                FilterStyle::text(FILTER_TYPE_NAME),
                FilterStyle::text(FILTER_TYPE_TAG),
            ],
            supported_triggers: vec![TRIGGER_MANUAL.to_string(), TRIGGER_SCHEDULED.to_string()],
        })
    }

    // The remote has no dedicated health endpoint in this integration, so
    // the probe reports healthy without a remote call.
    async fn health_check(&self) -> Result<HealthStatus, AdapterError> {
        Ok(HealthStatus::Healthy)
    }

    async fn list_namespaces(
        &self,
        query: &NamespaceQuery,
    ) -> Result<Vec<Namespace>, AdapterError> {
        // Compile the filter before touching the network: a bad pattern
        // fails the listing outright instead of truncating it.
        let filter = NamespaceFilter::compile(query)?;

        let url = format!("{}/dockyard/v2/visible/namespaces", self.registry.url);
        let request = self
            .client
            .request(Method::GET, &url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .build()
            .map_err(HttpError::from)?;

        let (status, body) = self.dispatch(request).await?;
        if !Self::is_success(status) {
            return Err(AdapterError::remote_api(status, body));
        }

        let list: NamespaceList = serde_json::from_str(&body)?;
        Ok(list
            .namespaces
            .into_iter()
            .filter(|record| filter.matches(&record.name))
            .map(NamespaceRecord::into_namespace)
            .collect())
    }

    async fn get_namespace(&self, name: &str) -> Result<Namespace, AdapterError> {
        self.get_namespace_record(name)
            .await
            .map(NamespaceRecord::into_namespace)
    }

    fn convert_resource_metadata(
        &self,
        metadata: &ResourceMetadata,
        _namespace: Option<&Namespace>,
    ) -> Result<ResourceMetadata, AdapterError> {
        // Dockyard takes repository names and tags as-is.
        Ok(ResourceMetadata {
            repository: metadata.repository.clone(),
            tags: metadata.tags.clone(),
        })
    }

    async fn prepare_for_push(&self, resources: &[Resource]) -> Result<(), AdapterError> {
        let mut missing = HashSet::new();

        for candidate in candidate_namespaces(resources) {
            match self.get_namespace_record(&candidate).await {
                Ok(record) if record.name == candidate => {}
                Ok(_) => {
                    missing.insert(candidate);
                }
                Err(err) if err.is_not_found() => {
                    missing.insert(candidate);
                }
                Err(err) => return Err(err),
            }
        }

        for namespace in missing {
            self.create_namespace(&namespace).await?;
        }
        Ok(())
    }
}
