//! HTTP implementation of the inquiry API.

use crate::{ApiResponse, InquiryApi, SubmissionError};
use intake_types::SubmissionPayload;
use serde::Deserialize;
use std::time::Duration;

/// Default timeout for the submission request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Path of the inquiry endpoint under the configured base address.
const INQUIRY_PATH: &str = "/api/inquiry";

/// HTTP client for the inquiry endpoint.
///
/// Sends `POST {base}{INQUIRY_PATH}` with the JSON payload. Holds the
/// configured base address; an unset address is only reported when a
/// submission is actually attempted.
pub struct InquiryClient {
    http_client: reqwest::Client,
    base_url: Option<String>,
}

/// Structured reason the endpoint may attach to a non-success response.
/// Absence is tolerated.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

impl InquiryClient {
    /// Create a client for the configured base address (or `None` when the
    /// backend address is unset).
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: Option<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            base_url,
        }
    }

    fn endpoint(&self) -> Result<String, SubmissionError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or(SubmissionError::NotConfigured)?;
        Ok(format!("{}{}", base.trim_end_matches('/'), INQUIRY_PATH))
    }
}

impl InquiryApi for InquiryClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<ApiResponse, SubmissionError> {
        let url = self.endpoint()?;

        let response = self
            .http_client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmissionError::Transport(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    SubmissionError::Transport(format!("connection failed: {e}"))
                } else {
                    SubmissionError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            tracing::warn!(status = status.as_u16(), ?detail, "inquiry endpoint rejected submission");
            return Err(match detail {
                Some(detail) => SubmissionError::Rejected(detail),
                None => SubmissionError::Status(status.as_u16()),
            });
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            SubmissionError::InvalidResponse(format!("failed to parse success body: {e}"))
        })?;
        tracing::info!(message = %api_response.message, "inquiry accepted");
        Ok(api_response)
    }
}
