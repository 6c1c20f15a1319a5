//! # Wharf Dockyard Adapter
//!
//! Replication adapter for registries exposing the Dockyard REST API
//! (`/dockyard/v2/...`): namespace listing with name filtering, namespace
//! lookup, and idempotent namespace creation ahead of an image push.
//!
//! Image manifest and blob transfer is out of scope here; the host composes
//! this adapter with its native registry protocol client for those
//! operations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wharf_adapter::Adapter;
//! use wharf_adapter_dockyard::DockyardAdapter;
//! use wharf_model::{Credential, NamespaceQuery, Registry};
//!
//! # async fn run() -> Result<(), wharf_adapter::AdapterError> {
//! let registry = Registry::new("https://swr.example.com")
//!     .with_credential(Credential::new("access-key", "access-secret"));
//!
//! let adapter = DockyardAdapter::new(&registry)?;
//! let namespaces = adapter.list_namespaces(&NamespaceQuery::new("team")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Hosts using the factory registry instead call
//! [`register`](crate::register) once at startup and construct adapters
//! through `wharf_adapter::create_adapter`.

mod adapter;
mod factory;
mod filter;
mod record;

pub use adapter::DockyardAdapter;
pub use factory::{register, DockyardFactory};
pub use filter::NamespaceFilter;
pub use record::{CreateNamespaceRequest, NamespaceList, NamespaceRecord};

/// Registry-type tag the Dockyard factory registers under.
pub const REGISTRY_TYPE: &str = "dockyard";
