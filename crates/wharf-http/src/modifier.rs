//! Request modifiers applied before dispatch.

use crate::error::HttpError;
use reqwest::header::{HeaderValue, AUTHORIZATION};

/// A mutation applied to an outgoing request before it is sent.
///
/// Modifiers run in the order they were registered on the [`crate::Client`];
/// a typical chain attaches authentication headers.
pub trait Modifier: Send + Sync {
    /// Applies the mutation to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutation cannot be applied (e.g., the
    /// configured value is not a valid header).
    fn modify(&self, request: &mut reqwest::Request) -> Result<(), HttpError>;
}

/// Attaches `Authorization: Basic ...` derived from an access key / access
/// secret pair.
pub struct BasicAuthorizer {
    header: HeaderValue,
}

impl BasicAuthorizer {
    /// Creates an authorizer for the given access key / secret pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoded credential is not a valid header
    /// value.
    pub fn new(access_key: &str, access_secret: &str) -> Result<Self, HttpError> {
        let credentials = base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            format!("{access_key}:{access_secret}"),
        );
        let mut header = HeaderValue::from_str(&format!("Basic {credentials}")).map_err(|_| {
            HttpError::InvalidHeader {
                header: "authorization",
            }
        })?;
        header.set_sensitive(true);
        Ok(Self { header })
    }
}

impl Modifier for BasicAuthorizer {
    fn modify(&self, request: &mut reqwest::Request) -> Result<(), HttpError> {
        request.headers_mut().insert(AUTHORIZATION, self.header.clone());
        Ok(())
    }
}

impl std::fmt::Debug for BasicAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthorizer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Method, Request, Url};

    fn request() -> Request {
        Request::new(Method::GET, Url::parse("http://example.com/").unwrap())
    }

    #[test]
    fn test_basic_authorizer_sets_header() {
        let authorizer = BasicAuthorizer::new("kkkkk", "sssss").unwrap();
        let mut req = request();
        authorizer.modify(&mut req).unwrap();

        let expected = format!(
            "Basic {}",
            base64::Engine::encode(&base64::engine::general_purpose::STANDARD, "kkkkk:sssss")
        );
        let header = req.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), expected);
        assert!(header.is_sensitive());
    }

    #[test]
    fn test_basic_authorizer_overwrites_existing_header() {
        let authorizer = BasicAuthorizer::new("user", "pass").unwrap();
        let mut req = request();
        req.headers_mut()
            .insert(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));

        authorizer.modify(&mut req).unwrap();
        let header = req.headers().get(AUTHORIZATION).unwrap();
        assert!(header.to_str().unwrap().starts_with("Basic "));
    }
}
