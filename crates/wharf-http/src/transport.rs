//! Shared transport construction.

use crate::error::HttpError;
use std::time::Duration;

/// Default request timeout applied to the shared transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the pooled HTTP transport shared by all send paths of a client.
///
/// `insecure` disables TLS certificate verification; use it only against
/// registries with self-signed certificates in test environments.
///
/// # Errors
///
/// Returns an error if the underlying client cannot be constructed.
pub fn build_transport(insecure: bool, timeout: Duration) -> Result<reqwest::Client, HttpError> {
    let mut builder = reqwest::Client::builder().timeout(timeout);

    if insecure {
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder
        .build()
        .map_err(|source| HttpError::TransportBuild { source })
}
