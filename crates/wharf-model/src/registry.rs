//! Connection settings for a remote registry endpoint.

use serde::{Deserialize, Serialize};

/// Connection settings for a remote registry.
///
/// Supplied once when an adapter is constructed and immutable for the
/// adapter's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    /// Base URL of the remote registry (e.g., "<https://swr.example.com>").
    pub url: String,

    /// Optional credential for authenticated access.
    pub credential: Option<Credential>,

    /// Whether to skip TLS certificate verification.
    pub insecure: bool,
}

impl Registry {
    /// Creates registry settings for the given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use wharf_model::Registry;
    ///
    /// let registry = Registry::new("https://swr.example.com");
    /// assert_eq!(registry.url, "https://swr.example.com");
    /// assert!(registry.credential.is_none());
    /// ```
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credential: None,
            insecure: false,
        }
    }

    /// Sets the access credential.
    #[must_use]
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Enables or disables TLS certificate verification skipping.
    ///
    /// # Warning
    ///
    /// Insecure mode should only be used against test registries.
    #[must_use]
    pub const fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }
}

/// Access key / access secret pair for registry authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Access key (username-equivalent).
    pub access_key: String,

    /// Access secret (password-equivalent).
    pub access_secret: String,
}

impl Credential {
    /// Creates a credential from an access key / secret pair.
    #[must_use]
    pub fn new(access_key: impl Into<String>, access_secret: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            access_secret: access_secret.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new_defaults() {
        let registry = Registry::new("https://example.com");
        assert_eq!(registry.url, "https://example.com");
        assert!(registry.credential.is_none());
        assert!(!registry.insecure);
    }

    #[test]
    fn test_registry_with_credential() {
        let registry = Registry::new("https://example.com")
            .with_credential(Credential::new("key", "secret"));

        let credential = registry.credential.unwrap();
        assert_eq!(credential.access_key, "key");
        assert_eq!(credential.access_secret, "secret");
    }

    #[test]
    fn test_registry_with_insecure() {
        let registry = Registry::new("http://example.com").with_insecure(true);
        assert!(registry.insecure);
    }
}
