//! # Wharf Adapter
//!
//! Contract between the Wharf replication platform and its registry
//! adapters.
//!
//! This crate provides:
//!
//! - [`Adapter`] - The operation set every adapter exposes to the host
//! - [`AdapterError`] - The error taxonomy adapters report through
//! - [`Factory`] and the process-wide factory registry - adapters register a
//!   constructor under a registry-type tag during process initialization and
//!   the host constructs them from connection settings
//!
//! ## Registration flow
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wharf_adapter::{create_adapter, register_factory, Factory};
//! use wharf_model::Registry;
//!
//! # fn register(factory: Arc<dyn Factory>) -> Result<(), wharf_adapter::AdapterError> {
//! register_factory("dockyard", factory)?;
//!
//! let registry = Registry::new("https://swr.example.com");
//! let adapter = create_adapter("dockyard", &registry)?;
//! # Ok(())
//! # }
//! ```

mod adapter;
mod error;
mod factory;

pub use adapter::Adapter;
pub use error::AdapterError;
pub use factory::{create_adapter, register_factory, registered_types, Factory};
