//! Nullable inquiry API — record payloads without sending them.

use intake_client::{ApiResponse, InquiryApi, SubmissionError};
use intake_types::SubmissionPayload;
use std::cell::RefCell;
use std::collections::VecDeque;

/// A test API that records submissions instead of delivering them.
///
/// Outcomes are scripted per call; when the script runs dry the API keeps
/// accepting. Submitted payloads are kept for assertions.
pub struct NullInquiryApi {
    script: RefCell<VecDeque<Result<ApiResponse, SubmissionError>>>,
    submitted: RefCell<Vec<SubmissionPayload>>,
}

impl NullInquiryApi {
    /// An API that accepts every submission.
    pub fn accepting() -> Self {
        Self {
            script: RefCell::new(VecDeque::new()),
            submitted: RefCell::new(Vec::new()),
        }
    }

    /// An API whose next submission fails with `error`, then accepts.
    pub fn failing_once(error: SubmissionError) -> Self {
        let api = Self::accepting();
        api.push_outcome(Err(error));
        api
    }

    /// Queue the outcome for the next unscripted submission.
    pub fn push_outcome(&self, outcome: Result<ApiResponse, SubmissionError>) {
        self.script.borrow_mut().push_back(outcome);
    }

    /// All payloads "submitted" so far (for assertions).
    pub fn submitted(&self) -> Vec<SubmissionPayload> {
        self.submitted.borrow().clone()
    }

    fn accepted() -> ApiResponse {
        ApiResponse {
            ok: true,
            message: "お問い合わせを受け付けました".to_string(),
        }
    }
}

impl InquiryApi for NullInquiryApi {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<ApiResponse, SubmissionError> {
        self.submitted.borrow_mut().push(payload.clone());
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Self::accepted()))
    }
}

/// Shared-reference impl so a test can hand the gateway `&api` and keep
/// the original for assertions.
impl InquiryApi for &NullInquiryApi {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<ApiResponse, SubmissionError> {
        <NullInquiryApi as InquiryApi>::submit(self, payload).await
    }
}
