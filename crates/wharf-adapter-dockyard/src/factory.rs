//! Factory registration for the Dockyard adapter.

use crate::adapter::DockyardAdapter;
use std::sync::Arc;
use wharf_adapter::{Adapter, AdapterError, Factory};
use wharf_model::Registry;

/// Constructs [`DockyardAdapter`] instances from connection settings.
#[derive(Debug, Default)]
pub struct DockyardFactory;

impl Factory for DockyardFactory {
    fn create(&self, registry: &Registry) -> Result<Box<dyn Adapter>, AdapterError> {
        Ok(Box::new(DockyardAdapter::new(registry)?))
    }
}

/// Registers the Dockyard factory under [`crate::REGISTRY_TYPE`].
///
/// Call once during process initialization, before any adapter is
/// constructed.
///
/// # Errors
///
/// Returns an error if a factory is already registered under the tag.
pub fn register() -> Result<(), AdapterError> {
    wharf_adapter::register_factory(crate::REGISTRY_TYPE, Arc::new(DockyardFactory))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_once_then_conflict() {
        register().unwrap();

        let adapter =
            wharf_adapter::create_adapter(crate::REGISTRY_TYPE, &Registry::new("http://example"))
                .unwrap();
        assert_eq!(adapter.info().unwrap().registry_type, "dockyard");

        let err = register().unwrap_err();
        assert!(matches!(err, AdapterError::FactoryConflict { .. }));
    }
}
