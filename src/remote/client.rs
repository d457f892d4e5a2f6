//! HTTP transport client
//!
//! Issues one request at a time against the configured host, translates
//! transport failures into [`RemoteError`], and decodes JSON bodies when
//! the response content type asks for it.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::RemoteError;

/// Username/password pair for HTTP basic authentication
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account name
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create a credentials pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Decoded response body
///
/// JSON when the content type says so, otherwise the raw text unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Structured body parsed from `application/json`
    Json(Value),
    /// Opaque text body
    Text(String),
}

/// Transport client for the rgsyn service
#[derive(Debug, Clone)]
pub struct RemoteClient {
    /// HTTP client
    http: reqwest::Client,
    /// Configured host, without trailing slash
    host: Option<String>,
}

impl RemoteClient {
    /// Create a client for the given host
    pub fn new(host: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), host)
    }

    /// Create a client reusing an existing HTTP client
    pub fn with_client(http: reqwest::Client, host: Option<String>) -> Self {
        Self { http, host }
    }

    /// Get the configured host
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Issue one request against `{host}/{path}` and decode the response
    ///
    /// `params` are sent as a form-encoded body; `credentials` selects
    /// HTTP basic authentication. Fails with
    /// [`RemoteError::HostNotSpecified`] before any network I/O when no
    /// host is configured.
    ///
    /// Status handling: 401 maps to [`RemoteError::BadResponse`] carrying
    /// the status line; 300 is a data-bearing success the service uses to
    /// return choices, so its body is decoded like a 2xx; any other
    /// non-2xx maps to `BadResponse` with the response body appended after
    /// a colon when non-empty.
    pub async fn talk(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        credentials: Option<&Credentials>,
    ) -> Result<Body, RemoteError> {
        let host = self.host.as_deref().ok_or(RemoteError::HostNotSpecified)?;
        let url = format!("{host}/{path}");
        debug!(%method, url, "talking to rgsyn service");

        let mut request = self.http.request(method, &url);
        if !params.is_empty() {
            request = request.form(params);
        }
        if let Some(creds) = credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::BadResponse {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() && status != StatusCode::MULTIPLE_CHOICES {
            if status == StatusCode::UNAUTHORIZED {
                return Err(RemoteError::BadResponse {
                    message: status_line(status),
                });
            }

            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status_line(status)
            } else {
                format!("{}: {body}", status_line(status))
            };
            return Err(RemoteError::BadResponse { message });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.split(';').map(str::trim).any(|s| s == "application/json"));

        let text = response.text().await.map_err(|e| RemoteError::BadResponse {
            message: e.to_string(),
        })?;

        if is_json {
            serde_json::from_str(&text)
                .map(Body::Json)
                .map_err(|e| RemoteError::ResponseParse {
                    error: e.to_string(),
                })
        } else {
            Ok(Body::Text(text))
        }
    }
}

/// Human-readable status line, e.g. `500 Internal Server Error`
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}
