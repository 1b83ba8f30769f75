//! HTTP transport seam.
//!
//! [`ApiClient`](crate::ApiClient) never talks to the network directly; it hands
//! a fully built [`HttpRequest`] to a [`Transport`]. The browser build uses
//! [`ReqwestTransport`] (which compiles to `fetch` on wasm32), tests use the
//! scripted transport in [`crate::testing`].

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to go on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Whatever came back, whatever the status.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the declared content type is JSON (`application/json`, or any
    /// `+json` suffix type).
    pub fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| {
            let mime = ct.split(';').next().unwrap_or_default().trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
    }
}

/// No response was obtained.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("response body could not be read: {0}")]
    Body(String),
}

/// Sends a request and returns the response, or fails when none arrived.
///
/// HTTP error statuses are not failures at this level.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> {
        (**self).send(request)
    }
}

/// Transport backed by `reqwest`, which uses `fetch` in the browser.
///
/// No timeout is configured; the platform default applies.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(content_type: Option<&str>) -> HttpResponse {
        HttpResponse {
            status: 200,
            content_type: content_type.map(str::to_string),
            body: String::new(),
        }
    }

    #[test]
    fn test_is_json() {
        assert!(response(Some("application/json")).is_json());
        assert!(response(Some("application/json; charset=utf-8")).is_json());
        assert!(response(Some("application/problem+json")).is_json());
        assert!(!response(Some("text/html")).is_json());
        assert!(!response(None).is_json());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = HttpRequest {
            method: Method::Get,
            url: "https://x/entries".into(),
            headers: vec![("Authorization".into(), "Bearer t".into())],
            body: None,
        };
        assert_eq!(req.header("authorization"), Some("Bearer t"));
        assert_eq!(req.header("content-type"), None);
    }
}
