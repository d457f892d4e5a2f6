//! Connectivity check
//!
//! Confirms the configured host is actually a reachable rgsyn instance.
//! This is the one place where transport and parse failures are expected
//! and classified into a plain `false` instead of propagating.

use reqwest::Method;
use serde_json::Value;

use crate::config::defaults::SERVICE_NAME;
use crate::error::RemoteError;
use crate::remote::client::{Body, RemoteClient};

/// Check whether the configured host is a valid rgsyn instance
///
/// Issues an unauthenticated `GET info` and returns `Ok(true)` only when
/// the response is a JSON object whose `name` field is `"rgsyn"`. Bad
/// responses and malformed bodies mean "not a valid instance", not a
/// failure; a missing host still propagates as an error.
pub async fn host_valid(client: &RemoteClient) -> Result<bool, RemoteError> {
    match client.talk(Method::GET, "info", &[], None).await {
        Ok(Body::Json(value)) => {
            Ok(value.get("name").and_then(Value::as_str) == Some(SERVICE_NAME))
        }
        Ok(Body::Text(_)) => Ok(false),
        Err(RemoteError::BadResponse { .. } | RemoteError::ResponseParse { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}
