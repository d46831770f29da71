//! The outbound API surface.

use crate::SubmissionError;
use intake_types::SubmissionPayload;
use serde::Deserialize;

/// Structured success body returned by the inquiry endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    pub message: String,
}

/// Capability trait for delivering a confirmed inquiry.
///
/// The workflow driver is generic over this so tests can substitute a
/// recording stand-in; [`crate::InquiryClient`] is the HTTP implementation.
pub trait InquiryApi {
    /// Deliver `payload`. Exactly one attempt; either the endpoint fully
    /// accepts (an [`ApiResponse`] comes back) or the call fully fails.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<ApiResponse, SubmissionError>;
}
