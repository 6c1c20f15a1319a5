//! Error types for HTTP plumbing.

use thiserror::Error;

/// Errors that can occur while building or using the HTTP client.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network-level failure while sending a request.
    #[error("transport failure: {source}")]
    Transport {
        /// Underlying error.
        #[from]
        source: reqwest::Error,
    },

    /// The HTTP transport could not be constructed.
    #[error("failed to build HTTP transport: {source}")]
    TransportBuild {
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// A request modifier produced a value that is not a valid header.
    #[error("invalid value for header '{header}'")]
    InvalidHeader {
        /// Header name.
        header: &'static str,
    },
}
