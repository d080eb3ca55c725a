use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod api;
mod communities;
mod posts;

pub use self::{api::*, communities::*, posts::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] limeleaf_boundary::Error),
}

impl Error {
    /// HTTP status of a failed request.
    ///
    /// Anything that did not produce a status code
    /// (network, decoding, JS errors) counts as a server error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Fetch(_) => 500,
            Self::Api(err) => err.http_status,
        }
    }

    pub(crate) fn unauthorized() -> Self {
        Self::Api(limeleaf_boundary::Error {
            http_status: 401,
            message: "Missing access token".to_string(),
        })
    }
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(into_api_error(response).await)
    }
}

pub async fn ensure_ok(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(into_api_error(response).await)
    }
}

async fn into_api_error(response: Response) -> Error {
    let http_status = response.status();
    let body = response.text().await.unwrap_or_default();
    api_error(http_status, &body, &response.status_text()).into()
}

fn api_error(http_status: u16, body: &str, status_text: &str) -> limeleaf_boundary::Error {
    if let Ok(err) = serde_json::from_str::<limeleaf_boundary::Error>(body) {
        return err;
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(ToOwned::to_owned))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status_text.to_owned()
            } else {
                body.to_owned()
            }
        });
    limeleaf_boundary::Error {
        http_status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_from_boundary_json() {
        let err = api_error(400, r#"{"http_status":400,"message":"bad"}"#, "Bad Request");
        assert_eq!(err.http_status, 400);
        assert_eq!(err.message, "bad");
    }

    #[test]
    fn api_error_from_error_field() {
        let err = api_error(403, r#"{"error":"forbidden"}"#, "Forbidden");
        assert_eq!(err.http_status, 403);
        assert_eq!(err.message, "forbidden");
    }

    #[test]
    fn api_error_from_plain_text_or_empty_body() {
        assert_eq!(api_error(500, "boom", "Internal").message, "boom");
        assert_eq!(api_error(500, "  ", "Internal").message, "Internal");
    }

    #[test]
    fn status_of_errors() {
        assert_eq!(Error::Fetch("offline".into()).status(), 500);
        assert_eq!(Error::unauthorized().status(), 401);
    }
}
