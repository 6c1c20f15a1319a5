//! HTTP client wrapper applying a request-modifier chain.

use crate::error::HttpError;
use crate::modifier::Modifier;

/// HTTP client that applies an ordered modifier chain before dispatch.
///
/// The client performs no retries and no caching; every response is handed
/// back to the caller as-is. Two send paths share one pooled transport:
///
/// - [`Client::send`] runs every configured modifier (e.g., basic-auth
///   attachment) and is used for endpoints expecting that scheme;
/// - [`Client::send_raw`] skips the chain and is reserved for endpoints that
///   use a different authorization scheme than the modifiers provide.
///
/// Because both paths go through the same transport, TLS verification mode
/// and timeouts behave identically for either.
pub struct Client {
    inner: reqwest::Client,
    modifiers: Vec<Box<dyn Modifier>>,
}

impl Client {
    /// Creates a client over the given transport with an ordered modifier
    /// chain.
    #[must_use]
    pub fn new(inner: reqwest::Client, modifiers: Vec<Box<dyn Modifier>>) -> Self {
        Self { inner, modifiers }
    }

    /// Starts building a request against the shared transport.
    pub fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.inner.request(method, url)
    }

    /// Sends a request after applying every modifier in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a modifier fails or the network call fails; the
    /// failure is propagated unmodified, with no retry.
    pub async fn send(&self, mut request: reqwest::Request) -> Result<reqwest::Response, HttpError> {
        self.apply_modifiers(&mut request)?;
        self.inner.execute(request).await.map_err(Into::into)
    }

    /// Sends a request without touching the modifier chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the network call fails.
    pub async fn send_raw(&self, request: reqwest::Request) -> Result<reqwest::Response, HttpError> {
        self.inner.execute(request).await.map_err(Into::into)
    }

    fn apply_modifiers(&self, request: &mut reqwest::Request) -> Result<(), HttpError> {
        for modifier in &self.modifiers {
            modifier.modify(request)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("modifiers", &self.modifiers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};
    use reqwest::{Method, Request, Url};

    struct HeaderAppender {
        name: HeaderName,
        value: &'static str,
    }

    impl Modifier for HeaderAppender {
        fn modify(&self, request: &mut reqwest::Request) -> Result<(), HttpError> {
            request
                .headers_mut()
                .append(self.name.clone(), HeaderValue::from_static(self.value));
            Ok(())
        }
    }

    fn request() -> Request {
        Request::new(Method::GET, Url::parse("http://example.com/").unwrap())
    }

    #[test]
    fn test_modifiers_applied_in_order() {
        let client = Client::new(
            reqwest::Client::new(),
            vec![
                Box::new(HeaderAppender {
                    name: HeaderName::from_static("x-chain"),
                    value: "first",
                }),
                Box::new(HeaderAppender {
                    name: HeaderName::from_static("x-chain"),
                    value: "second",
                }),
            ],
        );

        let mut req = request();
        client.apply_modifiers(&mut req).unwrap();

        let values: Vec<_> = req
            .headers()
            .get_all("x-chain")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(values, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_chain_leaves_request_untouched() {
        let client = Client::new(reqwest::Client::new(), Vec::new());
        let mut req = request();
        client.apply_modifiers(&mut req).unwrap();
        assert!(req.headers().is_empty());
    }
}
