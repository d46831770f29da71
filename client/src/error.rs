use intake_types::ErrorNotice;
use thiserror::Error;

/// Generic localized failure text, used whenever the backend supplied no
/// human-readable reason of its own.
pub const GENERIC_FAILURE_NOTICE: &str = "送信に失敗しました";

#[derive(Clone, Debug, Error)]
pub enum SubmissionError {
    /// Backend base address unset. Fatal misconfiguration, discoverable
    /// only at submit time; not user-correctable by resubmission.
    #[error("submission endpoint is not configured")]
    NotConfigured,

    #[error("transport failure: {0}")]
    Transport(String),

    /// Non-success HTTP status with a structured reason in the body.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// Non-success HTTP status without a readable reason.
    #[error("submission failed with HTTP status {0}")]
    Status(u16),

    #[error("invalid response from submission endpoint: {0}")]
    InvalidResponse(String),
}

impl SubmissionError {
    /// Collapse this error into the single notice shown on the form. A
    /// backend-supplied reason is surfaced verbatim; everything else gets
    /// the generic localized text.
    pub fn user_notice(&self) -> ErrorNotice {
        match self {
            Self::Rejected(detail) => ErrorNotice::new(detail.clone()),
            _ => ErrorNotice::new(GENERIC_FAILURE_NOTICE),
        }
    }
}
