//! HTTP client for the prediction endpoint.

use std::time::Duration;

use serde_json::json;
use thiserror::Error;
use veriscope_domain::ModelType;

use crate::report::PredictionResult;

/// Default base URL of a locally running prediction service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors a prediction call can produce.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The call exceeded its timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The service could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The service answered with a non-success status.
    #[error("service returned status {status}")]
    UnexpectedStatus {
        /// HTTP status code from the service.
        status: u16,
    },

    /// The response body was not a well-formed prediction result.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

/// Client for `POST {base_url}/predict`.
pub struct PredictClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl PredictClient {
    /// Creates a client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("veriscope-verify/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits one text for prediction and parses the result.
    ///
    /// Unrecognized response fields are ignored; the verdict is kept
    /// as a plain string since the service may emit labels beyond the
    /// set this harness exercises.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] for transport failures, non-success
    /// statuses, and malformed bodies.
    pub async fn predict(
        &self,
        text: &str,
        model: ModelType,
    ) -> Result<PredictionResult, ClientError> {
        let url = format!("{}/predict", self.base_url);
        tracing::debug!(%url, model = %model, "submitting prediction request");

        let response = self
            .client
            .post(&url)
            .json(&json!({ "text": text, "model_type": model.as_str() }))
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<PredictionResult>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn map_error(&self, error: &reqwest::Error) -> ClientError {
        if error.is_timeout() {
            return ClientError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            };
        }
        if error.is_connect() {
            return ClientError::Connection(error.to_string());
        }
        ClientError::Other(error.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PredictClient::new(DEFAULT_BASE_URL);
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_preserved() {
        let client = PredictClient::new("http://127.0.0.1:9/api").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/api");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_connection_error() {
        // Port 9 (discard) on localhost is not listening.
        let client = PredictClient::with_timeout(
            "http://127.0.0.1:9/api",
            Duration::from_millis(500),
        )
        .unwrap();

        let result = client.predict("some text", veriscope_domain::ModelType::DeepLearning).await;
        assert!(matches!(
            result,
            Err(ClientError::Connection(_) | ClientError::Timeout { .. })
        ));
    }
}
