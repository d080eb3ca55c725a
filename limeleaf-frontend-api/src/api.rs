use gloo_net::http::{Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::{ensure_ok, into_json, Result};

/// Placeholder sent if no token is stored.
///
/// The backend rejects it like any other invalid token.
pub const UNDEFINED_TOKEN: &str = "undefined";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn from_stored(token: Option<String>) -> Self {
        Self(token.unwrap_or_else(|| UNDEFINED_TOKEN.to_string()))
    }
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.0 == UNDEFINED_TOKEN
    }
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// LimeLeaf backend API
///
/// Every request carries the bearer token,
/// even if the user is not logged in.
#[derive(Clone)]
pub struct Api {
    url: &'static str,
    token: AccessToken,
}

impl Api {
    #[must_use]
    pub const fn new(url: &'static str, token: AccessToken) -> Self {
        Self { url, token }
    }
    #[must_use]
    pub fn token(&self) -> &AccessToken {
        &self.token
    }
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.url)
    }
    pub(crate) fn auth_header_value(&self) -> String {
        format!("Bearer {}", self.token.as_str())
    }
    pub(crate) fn add_auth_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Authorization", &self.auth_header_value())
    }
    pub(crate) async fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .add_auth_headers(req)
            .header("Content-Type", "application/json; charset=utf-8")
            .send()
            .await?;
        into_json(response).await
    }
    pub(crate) async fn send_json<D, T>(&self, req: RequestBuilder, data: &D) -> Result<T>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        let response = self.add_auth_headers(req).json(data)?.send().await?;
        into_json(response).await
    }
    pub(crate) async fn send_without_content(&self, req: RequestBuilder) -> Result<()> {
        let response = self.add_auth_headers(req).send().await?;
        ensure_ok(response).await
    }
    pub(crate) async fn send_json_without_content<D>(
        &self,
        req: RequestBuilder,
        data: &D,
    ) -> Result<()>
    where
        D: Serialize,
    {
        let response = self.add_auth_headers(req).json(data)?.send().await?;
        ensure_ok(response).await
    }
    pub(crate) fn get_request(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path))
    }
    pub(crate) fn post_request(&self, path: &str) -> RequestBuilder {
        Request::post(&self.url(path))
    }
    pub(crate) fn put_request(&self, path: &str) -> RequestBuilder {
        Request::put(&self.url(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_sent_as_undefined() {
        let api = Api::new("", AccessToken::from_stored(None));
        assert!(api.token().is_undefined());
        assert_eq!(api.auth_header_value(), "Bearer undefined");
    }

    #[test]
    fn stored_token_is_sent_as_bearer() {
        let api = Api::new("", AccessToken::from_stored(Some("abc".into())));
        assert!(!api.token().is_undefined());
        assert_eq!(api.auth_header_value(), "Bearer abc");
    }

    #[test]
    fn endpoint_urls() {
        let api = Api::new("https://limeleaf.example", AccessToken::from_stored(None));
        assert_eq!(
            api.url("/posts/42"),
            "https://limeleaf.example/api/posts/42"
        );
        assert_eq!(Api::new("", api.token().clone()).url("/posts"), "/api/posts");
    }
}
