//! Async driver wiring the gates, the machine, and the submission API.

use crate::{ConfirmationSummary, GatewayConfig, SubmissionMachine, WorkflowError};
use intake_client::{InquiryApi, InquiryClient};
use intake_identity::{IdentityGate, IdentityProvider};
use intake_types::{Category, ErrorNotice, InquiryDraft, WorkflowPhase};
use intake_verification::{ChallengeSignal, VerificationGate};

/// The inquiry gateway: everything a front end needs to run the workflow.
///
/// Owns the identity gate, the submission API, and the state machine. All
/// I/O happens here; the machine stays pure. One gateway serves one
/// session.
pub struct InquiryGateway<P, A> {
    machine: SubmissionMachine,
    identity: IdentityGate<P>,
    api: A,
}

impl<P: IdentityProvider, A: InquiryApi> InquiryGateway<P, A> {
    pub fn new(config: &GatewayConfig, provider: P, api: A) -> Self {
        let verification =
            VerificationGate::from_site_key(config.verification_site_key.as_deref());
        Self {
            machine: SubmissionMachine::new(verification),
            identity: IdentityGate::new(provider, config.channel_app_id.clone()),
            api,
        }
    }

    /// Run identity initialization and resolve the opening phase: `form`
    /// when the channel check passes, terminal `blocked` otherwise.
    pub async fn start(&mut self) -> Result<WorkflowPhase, WorkflowError> {
        let session = self.identity.initialize().await;
        self.machine.session_resolved(session)?;
        let phase = self.machine.phase();
        tracing::info!(?phase, "workflow started");
        Ok(phase)
    }

    // ── User events, delegated to the machine ──────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), WorkflowError> {
        self.machine.set_name(name)
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), WorkflowError> {
        self.machine.set_email(email)
    }

    pub fn set_category(&mut self, category: Category) -> Result<(), WorkflowError> {
        self.machine.set_category(category)
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> Result<(), WorkflowError> {
        self.machine.set_message(message)
    }

    pub fn request_submit(&mut self) -> Result<(), WorkflowError> {
        self.machine.request_submit()
    }

    pub fn cancel_confirmation(&mut self) -> Result<(), WorkflowError> {
        self.machine.cancel_confirmation()
    }

    pub fn reset(&mut self) -> Result<(), WorkflowError> {
        self.machine.reset()
    }

    pub fn challenge_signal(&mut self, signal: ChallengeSignal) -> Result<(), WorkflowError> {
        self.machine.challenge_signal(signal)
    }

    // ── Submission ─────────────────────────────────────────────────────

    /// The explicit confirm event: snapshot the payload, deliver it, and
    /// feed the outcome back into the machine.
    ///
    /// The returned phase is `succeeded` or `form`; a delivery failure is
    /// a handled outcome (notice set, token cleared), not an `Err`.
    pub async fn confirm_and_submit(&mut self) -> Result<WorkflowPhase, WorkflowError> {
        let payload = self.machine.confirm()?;

        match self.api.submit(&payload).await {
            Ok(response) => {
                tracing::info!(message = %response.message, "submission accepted");
                self.machine.submission_succeeded()?;
            }
            Err(e) => {
                tracing::warn!(error = %e, "submission attempt failed");
                self.machine.submission_failed(e.user_notice())?;
            }
        }
        Ok(self.machine.phase())
    }

    // ── Host surface ───────────────────────────────────────────────────

    /// Ask the host application to dismiss the surface. Honored only when
    /// the session resolved inside the approved channel.
    pub fn request_close(&self) {
        self.identity.request_close();
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn phase(&self) -> WorkflowPhase {
        self.machine.phase()
    }

    pub fn draft(&self) -> &InquiryDraft {
        self.machine.draft()
    }

    pub fn confirmation(&self) -> Option<&ConfirmationSummary> {
        self.machine.confirmation()
    }

    pub fn notice(&self) -> Option<&ErrorNotice> {
        self.machine.notice()
    }

    pub fn can_submit(&self) -> bool {
        self.machine.can_submit()
    }

    /// Direct access to the machine for read-only inspection.
    pub fn machine(&self) -> &SubmissionMachine {
        &self.machine
    }
}

impl<P: IdentityProvider> InquiryGateway<P, InquiryClient> {
    /// Gateway backed by the real HTTP client, built from configuration.
    pub fn with_http_client(config: &GatewayConfig, provider: P) -> Self {
        let api = InquiryClient::new(config.api_base_url.clone());
        Self::new(config, provider, api)
    }
}
