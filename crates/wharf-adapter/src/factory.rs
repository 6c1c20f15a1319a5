//! Process-wide adapter factory registry.
//!
//! Adapters register a [`Factory`] under their registry-type tag during
//! process initialization; the host constructs adapters from connection
//! settings afterwards. Registration happens before any concurrent use, so
//! the map is effectively read-only at steady state.

use crate::adapter::Adapter;
use crate::error::AdapterError;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use wharf_model::Registry;

/// Constructs an adapter from registry connection settings.
pub trait Factory: Send + Sync {
    /// Creates an adapter for the given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter cannot be constructed (e.g., the
    /// transport fails to build).
    fn create(&self, registry: &Registry) -> Result<Box<dyn Adapter>, AdapterError>;
}

static FACTORIES: Lazy<RwLock<HashMap<String, Arc<dyn Factory>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Registers a factory under a registry-type tag.
///
/// # Errors
///
/// Returns [`AdapterError::FactoryConflict`] if the tag is already taken.
pub fn register_factory(
    registry_type: impl Into<String>,
    factory: Arc<dyn Factory>,
) -> Result<(), AdapterError> {
    let registry_type = registry_type.into();
    let mut factories = FACTORIES.write();

    if factories.contains_key(&registry_type) {
        return Err(AdapterError::FactoryConflict { registry_type });
    }

    tracing::info!(registry_type = %registry_type, "adapter factory registered");
    factories.insert(registry_type, factory);
    Ok(())
}

/// Constructs an adapter for the given registry type and connection
/// settings.
///
/// # Errors
///
/// Returns [`AdapterError::UnknownRegistryType`] if no factory is registered
/// under the tag, or the factory's own construction error.
pub fn create_adapter(
    registry_type: &str,
    registry: &Registry,
) -> Result<Box<dyn Adapter>, AdapterError> {
    let factory = FACTORIES
        .read()
        .get(registry_type)
        .cloned()
        .ok_or_else(|| AdapterError::UnknownRegistryType {
            registry_type: registry_type.to_string(),
        })?;

    factory.create(registry)
}

/// Returns the registry-type tags with a registered factory.
#[must_use]
pub fn registered_types() -> Vec<String> {
    FACTORIES.read().keys().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wharf_model::{
        HealthStatus, Namespace, NamespaceQuery, RegistryInfo, Resource, ResourceMetadata,
    };

    struct StubAdapter;

    #[async_trait]
    impl Adapter for StubAdapter {
        fn info(&self) -> Result<RegistryInfo, AdapterError> {
            Ok(RegistryInfo {
                registry_type: "stub".to_string(),
                description: String::new(),
                supported_resource_types: Vec::new(),
                supported_resource_filters: Vec::new(),
                supported_triggers: Vec::new(),
            })
        }

        async fn health_check(&self) -> Result<HealthStatus, AdapterError> {
            Ok(HealthStatus::Healthy)
        }

        async fn list_namespaces(
            &self,
            _query: &NamespaceQuery,
        ) -> Result<Vec<Namespace>, AdapterError> {
            Ok(Vec::new())
        }

        async fn get_namespace(&self, name: &str) -> Result<Namespace, AdapterError> {
            Ok(Namespace::new(name, std::collections::HashMap::new()))
        }

        fn convert_resource_metadata(
            &self,
            metadata: &ResourceMetadata,
            _namespace: Option<&Namespace>,
        ) -> Result<ResourceMetadata, AdapterError> {
            Ok(metadata.clone())
        }

        async fn prepare_for_push(&self, _resources: &[Resource]) -> Result<(), AdapterError> {
            Ok(())
        }
    }

    struct StubFactory;

    impl Factory for StubFactory {
        fn create(&self, _registry: &Registry) -> Result<Box<dyn Adapter>, AdapterError> {
            Ok(Box::new(StubAdapter))
        }
    }

    #[tokio::test]
    async fn test_register_and_create() {
        register_factory("stub-create", Arc::new(StubFactory)).unwrap();

        let registry = Registry::new("https://example.com");
        let adapter = create_adapter("stub-create", &registry).unwrap();
        assert_eq!(adapter.info().unwrap().registry_type, "stub");
        assert!(adapter.health_check().await.unwrap().is_healthy());
        assert!(adapter
            .list_namespaces(&NamespaceQuery::default())
            .await
            .unwrap()
            .is_empty());
        assert!(registered_types().contains(&"stub-create".to_string()));
    }

    #[test]
    fn test_duplicate_registration_conflicts() {
        register_factory("stub-duplicate", Arc::new(StubFactory)).unwrap();

        let err = register_factory("stub-duplicate", Arc::new(StubFactory)).unwrap_err();
        assert!(matches!(err, AdapterError::FactoryConflict { .. }));
    }

    #[test]
    fn test_unknown_registry_type() {
        let registry = Registry::new("https://example.com");
        let err = create_adapter("never-registered", &registry).err().unwrap();
        assert!(matches!(err, AdapterError::UnknownRegistryType { .. }));
    }
}
