//! Error taxonomy for adapter operations.

use thiserror::Error;
use wharf_http::HttpError;

/// Errors an adapter reports to the host platform.
///
/// No variant is ever retried or silently swallowed by an adapter: the first
/// failure aborts the whole operation and reaches the caller as-is.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Network or connection failure, surfaced verbatim.
    #[error("transport failure: {source}")]
    Transport {
        /// Underlying error.
        #[from]
        source: HttpError,
    },

    /// Non-2xx HTTP status from a remote call, with the raw body kept
    /// verbatim for diagnostics.
    #[error("remote API error [{status}][{body}]")]
    RemoteApi {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// Malformed JSON in a remote response.
    #[error("failed to decode remote response: {source}")]
    Decode {
        /// Underlying error.
        #[from]
        source: serde_json::Error,
    },

    /// The namespace filter did not compile to a valid pattern.
    #[error("invalid namespace filter pattern '{pattern}': {source}")]
    InvalidFilter {
        /// The pattern after whitespace cleanup.
        pattern: String,
        /// Underlying error.
        #[source]
        source: regex::Error,
    },

    /// A factory was already registered under this registry type.
    #[error("adapter factory for registry type '{registry_type}' already registered")]
    FactoryConflict {
        /// Registry type tag.
        registry_type: String,
    },

    /// No factory is registered under this registry type.
    #[error("no adapter factory registered for registry type '{registry_type}'")]
    UnknownRegistryType {
        /// Registry type tag.
        registry_type: String,
    },
}

impl AdapterError {
    /// Creates a [`AdapterError::RemoteApi`] error from a status and raw
    /// body.
    #[must_use]
    pub fn remote_api(status: u16, body: impl Into<String>) -> Self {
        Self::RemoteApi {
            status,
            body: body.into(),
        }
    }

    /// Returns true if this is a remote-API error with a 404 status.
    ///
    /// Push preparation relies on this to tell "namespace does not exist"
    /// apart from transient lookup failures.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::RemoteApi { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_api_display_keeps_body_verbatim() {
        let err = AdapterError::remote_api(500, "{\"message\":\"boom\"}");
        assert_eq!(
            err.to_string(),
            "remote API error [500][{\"message\":\"boom\"}]"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(AdapterError::remote_api(404, "missing").is_not_found());
        assert!(!AdapterError::remote_api(500, "boom").is_not_found());
        assert!(!AdapterError::UnknownRegistryType {
            registry_type: "x".to_string(),
        }
        .is_not_found());
    }
}
