//! # Wharf HTTP
//!
//! HTTP plumbing shared by Wharf registry adapters.
//!
//! The crate wraps a pooled [`reqwest::Client`] behind a thin [`Client`] that
//! applies an ordered chain of request [`Modifier`]s (typically
//! authentication) before dispatch. Remote registries sometimes serve
//! different endpoint families under different authorization schemes, so the
//! wrapper also exposes an unmodified send path sharing the same transport:
//! TLS behavior stays consistent no matter which path a call site picks.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use wharf_http::{build_transport, BasicAuthorizer, Client, Modifier};
//!
//! # fn main() -> Result<(), wharf_http::HttpError> {
//! let transport = build_transport(false, Duration::from_secs(30))?;
//! let modifiers: Vec<Box<dyn Modifier>> =
//!     vec![Box::new(BasicAuthorizer::new("access-key", "access-secret")?)];
//! let client = Client::new(transport, modifiers);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod modifier;
mod transport;

pub use client::Client;
pub use error::HttpError;
pub use modifier::{BasicAuthorizer, Modifier};
pub use transport::{build_transport, DEFAULT_TIMEOUT};
