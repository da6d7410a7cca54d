//! Shared request pipeline used by every endpoint group.
//!
//! One [`Transport`] wraps the reqwest client and applies, uniformly:
//!
//! - JSON encoding of request bodies and decoding of 2xx responses
//! - failure classification (`Api`, `Unavailable`, `EmptyResponse`, `Cancelled`)
//! - fixed-delay retries for transport failures only
//! - the throw-on-error policy for non-2xx responses
//!
//! The transport holds no per-call state, so it can be cloned and shared
//! across tasks freely.

use crate::config::ReachyMiniConfig;
use crate::error::{ReachyMiniError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Status and body of a response that made it back from the daemon.
struct RawResponse {
    status: StatusCode,
    body: String,
}

#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: Client,
    base_url: String,
    throw_on_error: bool,
    retry_count: u32,
    retry_delay: Duration,
}

impl Transport {
    pub(crate) fn new(config: &ReachyMiniConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("ReachyMiniSdk/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.normalized_base_url(),
            throw_on_error: config.throw_on_error,
            retry_count: config.retry_count,
            retry_delay: config.retry_delay,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T>(&self, path: &str, cancel: Option<&CancellationToken>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.request(Method::GET, path, None, cancel).await
    }

    /// POST without a request body.
    pub(crate) async fn post<T>(&self, path: &str, cancel: Option<&CancellationToken>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.request(Method::POST, path, None, cancel).await
    }

    pub(crate) async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        cancel: Option<&CancellationToken>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let body = serde_json::to_vec(body).map_err(|e| {
            ReachyMiniError::InvalidRequest(format!("Failed to serialize request body: {}", e))
        })?;
        self.request(Method::POST, path, Some(body), cancel).await
    }

    pub(crate) async fn delete<T>(&self, path: &str, cancel: Option<&CancellationToken>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.request(Method::DELETE, path, None, cancel).await
    }

    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        cancel: Option<&CancellationToken>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .send_with_retry(&method, &url, body.as_deref(), cancel)
            .await?;

        if !response.status.is_success() {
            let status = response.status.as_u16();

            if self.throw_on_error {
                return Err(ReachyMiniError::Api {
                    status,
                    body: response.body,
                });
            }

            warn!(
                method = %method,
                url = %url,
                status,
                body = %response.body,
                "API request failed, returning empty value"
            );
            return Ok(T::default());
        }

        decode(path, &response.body)
    }

    /// Send the request, retrying transport failures with a fixed delay.
    ///
    /// Any HTTP status counts as a response and ends the loop.
    async fn send_with_retry(
        &self,
        method: &Method,
        url: &str,
        body: Option<&[u8]>,
        cancel: Option<&CancellationToken>,
    ) -> Result<RawResponse> {
        let max_attempts = self.retry_count.saturating_add(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(method = %method, url = %url, attempt, "Sending request");

            let outcome = cancellable(self.attempt(method.clone(), url, body), cancel).await?;

            match outcome {
                Ok(response) => {
                    debug!(url = %url, status = %response.status, "Received response");
                    return Ok(response);
                }
                Err(source) if attempt >= max_attempts => {
                    warn!(url = %url, attempts = attempt, error = %source, "Robot unreachable");
                    return Err(ReachyMiniError::Unavailable {
                        url: url.to_string(),
                        source,
                    });
                }
                Err(source) => {
                    warn!(
                        url = %url,
                        attempt,
                        max_attempts,
                        error = %source,
                        "Request failed, retrying"
                    );
                    cancellable(tokio::time::sleep(self.retry_delay), cancel).await?;
                }
            }
        }
    }

    /// A single round trip. Errors here are transport-level by construction.
    async fn attempt(
        &self,
        method: Method,
        url: &str,
        body: Option<&[u8]>,
    ) -> std::result::Result<RawResponse, reqwest::Error> {
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

/// Run `future` unless `cancel` fires first.
async fn cancellable<F>(future: F, cancel: Option<&CancellationToken>) -> Result<F::Output>
where
    F: Future,
{
    match cancel {
        Some(token) => tokio::select! {
            biased;
            () = token.cancelled() => Err(ReachyMiniError::Cancelled),
            output = future => Ok(output),
        },
        None => Ok(future.await),
    }
}

/// Parse a 2xx body. An empty body is read as JSON `null`.
fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T> {
    let text = if body.trim().is_empty() { "null" } else { body };

    serde_json::from_str(text).map_err(|e| ReachyMiniError::EmptyResponse {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Percent-encode a caller-supplied path segment.
pub(crate) fn encode_path_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DaemonStatus;

    #[test]
    fn test_decode_empty_body_as_none() {
        let value: Option<DaemonStatus> = decode("/api/apps/current-app-status", "").unwrap();
        assert!(value.is_none());

        let value: Option<DaemonStatus> = decode("/api/apps/current-app-status", "null").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_decode_empty_body_for_required_type_fails() {
        let result: Result<DaemonStatus> = decode("/api/daemon/status", "  ");
        match result {
            Err(ReachyMiniError::EmptyResponse { path, .. }) => {
                assert_eq!(path, "/api/daemon/status");
            }
            other => panic!("Expected EmptyResponse, got: {:?}", other),
        }
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result: Result<f64> = decode("/api/state/present_body_yaw", "not json");
        assert!(matches!(result, Err(ReachyMiniError::EmptyResponse { .. })));
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("dataset1"), "dataset1");
        assert_eq!(encode_path_segment("my moves/v2"), "my%20moves%2Fv2");
        assert_eq!(encode_path_segment("a+b"), "a%2Bb");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Transport::new(&ReachyMiniConfig::new("not-a-url"));
        assert!(matches!(result, Err(ReachyMiniError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_cancellable_prefers_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let result = cancellable(async { 42 }, Some(&token)).await;
        assert!(matches!(result, Err(ReachyMiniError::Cancelled)));

        let result = cancellable(async { 42 }, None).await;
        assert_eq!(result.unwrap(), 42);
    }
}
