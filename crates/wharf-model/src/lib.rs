//! # Wharf Model
//!
//! Shared domain model for the Wharf image-replication platform and its
//! registry adapters.
//!
//! This crate provides the types exchanged between the host platform and an
//! adapter implementation:
//!
//! - [`Registry`] - Connection settings for a remote registry endpoint
//! - [`Namespace`] / [`NamespaceQuery`] - Remote namespace records and filters
//! - [`Repository`] / [`Resource`] - Units of replication work
//! - [`RegistryInfo`] - Capability descriptor an adapter reports to the host
//! - [`HealthStatus`] - Result of an adapter health probe
//!
//! ## Example
//!
//! ```rust
//! use wharf_model::{Credential, Registry, Repository};
//!
//! let registry = Registry::new("https://swr.example.com")
//!     .with_credential(Credential::new("access-key", "access-secret"));
//!
//! let repository = Repository::new("team-a/billing");
//! assert_eq!(repository.namespace(), Some("team-a"));
//! assert!(!registry.insecure);
//! ```

pub mod health;
pub mod info;
pub mod namespace;
pub mod registry;
pub mod resource;

pub use health::HealthStatus;
pub use info::{
    FilterStyle, RegistryInfo, FILTER_STYLE_TEXT, FILTER_TYPE_NAME, FILTER_TYPE_TAG,
    RESOURCE_TYPE_IMAGE, TRIGGER_MANUAL, TRIGGER_SCHEDULED,
};
pub use namespace::{Namespace, NamespaceQuery};
pub use registry::{Credential, Registry};
pub use resource::{Repository, Resource, ResourceMetadata};
