//! The submission state machine.
//!
//! Pure and synchronous: the machine never performs I/O. The gateway feeds
//! it the identity-gate result, the widget signals, and the outcome of each
//! submission attempt; the machine decides every transition and owns the
//! draft, the verification token slot, the confirmation snapshot, and the
//! inline error notice.

use crate::WorkflowError;
use intake_types::{
    Category, ErrorNotice, InquiryDraft, SessionContext, SubmissionPayload, WorkflowPhase,
};
use intake_validation::validate;
use intake_verification::{ChallengeSignal, VerificationGate, CHALLENGE_FAILED_NOTICE};

/// Trimmed snapshot of the draft shown during the confirmation step.
///
/// Built when validation passes, discarded on cancel or confirm. The draft
/// itself is untouched, so canceling loses nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmationSummary {
    pub name: String,
    pub email: String,
    pub category: Category,
    pub message: String,
}

impl ConfirmationSummary {
    fn from_draft(draft: &InquiryDraft) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            category: draft.category,
            message: draft.message.trim().to_string(),
        }
    }

    /// Display label for the selected category.
    pub fn category_label(&self) -> &'static str {
        self.category.label()
    }
}

/// The orchestrating state machine.
///
/// Exactly one [`WorkflowPhase`] is active at a time. Every event method
/// checks the phase first and rejects misuse with
/// [`WorkflowError::Phase`]; `blocked` and `succeeded` are terminal, so no
/// event method accepts them.
pub struct SubmissionMachine {
    phase: WorkflowPhase,
    session: Option<SessionContext>,
    draft: InquiryDraft,
    verification: VerificationGate,
    confirmation: Option<ConfirmationSummary>,
    notice: Option<ErrorNotice>,
}

impl SubmissionMachine {
    /// A machine waiting for the identity gate. The verification gate
    /// variant was decided from configuration before construction.
    pub fn new(verification: VerificationGate) -> Self {
        Self {
            phase: WorkflowPhase::Initializing,
            session: None,
            draft: InquiryDraft::new(),
            verification,
            confirmation: None,
            notice: None,
        }
    }

    // ── Identity resolution ────────────────────────────────────────────

    /// Feed the identity gate's resolved session context.
    ///
    /// Approved sessions enter `form` with the name prefilled from the
    /// display-name hint; everything else lands in terminal `blocked`.
    pub fn session_resolved(&mut self, session: SessionContext) -> Result<(), WorkflowError> {
        self.expect_phase(WorkflowPhase::Initializing, "session_resolved")?;

        if session.in_approved_channel {
            if let Some(hint) = &session.display_name_hint {
                self.draft.name = hint.clone();
            }
            self.phase = WorkflowPhase::Form;
        } else {
            self.phase = WorkflowPhase::Blocked;
        }
        self.session = Some(session);
        Ok(())
    }

    // ── User input ─────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), WorkflowError> {
        self.expect_phase(WorkflowPhase::Form, "set_name")?;
        self.draft.name = name.into();
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), WorkflowError> {
        self.expect_phase(WorkflowPhase::Form, "set_email")?;
        self.draft.email = email.into();
        Ok(())
    }

    pub fn set_category(&mut self, category: Category) -> Result<(), WorkflowError> {
        self.expect_phase(WorkflowPhase::Form, "set_category")?;
        self.draft.category = category;
        Ok(())
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> Result<(), WorkflowError> {
        self.expect_phase(WorkflowPhase::Form, "set_message")?;
        self.draft.message = message.into();
        Ok(())
    }

    /// Clear all draft fields, the error notice, and any held verification
    /// token. Stays in `form`.
    pub fn reset(&mut self) -> Result<(), WorkflowError> {
        self.expect_phase(WorkflowPhase::Form, "reset")?;
        self.draft.clear();
        self.notice = None;
        self.verification.clear_token();
        Ok(())
    }

    // ── Submit attempt ─────────────────────────────────────────────────

    /// Attempt to submit: run the validator, then open the confirmation
    /// step.
    ///
    /// A validation failure is a handled outcome, not an error: the machine
    /// stays in `form` with the notice set and the fields untouched. A
    /// missing verification token (when the gate is configured) is an
    /// error: the submit control is supposed to be disabled, so the call
    /// itself is a binding-layer bug.
    pub fn request_submit(&mut self) -> Result<(), WorkflowError> {
        self.expect_phase(WorkflowPhase::Form, "request_submit")?;

        if let Err(issue) = validate(&self.draft) {
            self.notice = Some(ErrorNotice::new(issue.message()));
            return Ok(());
        }

        if !self.verification.ready() {
            return Err(WorkflowError::VerificationPending);
        }

        self.notice = None;
        self.confirmation = Some(ConfirmationSummary::from_draft(&self.draft));
        self.phase = WorkflowPhase::Confirming;
        Ok(())
    }

    /// Back out of the confirmation step. The snapshot is discarded; the
    /// draft is kept as-is.
    pub fn cancel_confirmation(&mut self) -> Result<(), WorkflowError> {
        self.expect_phase(WorkflowPhase::Confirming, "cancel_confirmation")?;
        self.confirmation = None;
        self.phase = WorkflowPhase::Form;
        Ok(())
    }

    /// The explicit confirm event. Builds the payload that the gateway
    /// must now deliver; the machine moves to `submitting` and rejects all
    /// input until the outcome is fed back.
    pub fn confirm(&mut self) -> Result<SubmissionPayload, WorkflowError> {
        self.expect_phase(WorkflowPhase::Confirming, "confirm")?;
        let session = match &self.session {
            Some(session) => session,
            None => {
                return Err(WorkflowError::Phase {
                    event: "confirm",
                    phase: self.phase,
                })
            }
        };

        let payload = SubmissionPayload::new(&self.draft, session, self.verification.token());
        self.confirmation = None;
        self.phase = WorkflowPhase::Submitting;
        Ok(payload)
    }

    // ── Submission outcome ─────────────────────────────────────────────

    pub fn submission_succeeded(&mut self) -> Result<(), WorkflowError> {
        self.expect_phase(WorkflowPhase::Submitting, "submission_succeeded")?;
        self.phase = WorkflowPhase::Succeeded;
        Ok(())
    }

    /// A failed attempt returns to `form` with the notice set. The held
    /// token is cleared: one token backs at most one attempt, so the user
    /// must re-verify before retrying. The draft survives untouched.
    pub fn submission_failed(&mut self, notice: ErrorNotice) -> Result<(), WorkflowError> {
        self.expect_phase(WorkflowPhase::Submitting, "submission_failed")?;
        self.notice = Some(notice);
        self.verification.clear_token();
        self.phase = WorkflowPhase::Form;
        Ok(())
    }

    // ── Challenge widget ───────────────────────────────────────────────

    /// Apply an inbound widget signal. The widget is only mounted while
    /// the form (or its confirmation step) is showing; signals in any
    /// other phase are rejected.
    ///
    /// Error and expiry both drop the token, but only the error is
    /// surfaced: expiry is routine.
    pub fn challenge_signal(&mut self, signal: ChallengeSignal) -> Result<(), WorkflowError> {
        match self.phase {
            WorkflowPhase::Form | WorkflowPhase::Confirming => {}
            phase => {
                return Err(WorkflowError::Phase {
                    event: "challenge_signal",
                    phase,
                })
            }
        }

        match signal {
            ChallengeSignal::Verified(token) => {
                self.verification.store_token(token)?;
            }
            ChallengeSignal::Errored => {
                self.verification.clear_token();
                self.notice = Some(ErrorNotice::new(CHALLENGE_FAILED_NOTICE));
            }
            ChallengeSignal::Expired => {
                self.verification.clear_token();
            }
        }
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    pub fn session(&self) -> Option<&SessionContext> {
        self.session.as_ref()
    }

    pub fn verification(&self) -> &VerificationGate {
        &self.verification
    }

    pub fn confirmation(&self) -> Option<&ConfirmationSummary> {
        self.confirmation.as_ref()
    }

    pub fn notice(&self) -> Option<&ErrorNotice> {
        self.notice.as_ref()
    }

    /// UI-level reflection of the machine: whether the submit control
    /// should be enabled. Never a second source of truth; `request_submit`
    /// re-checks everything.
    pub fn can_submit(&self) -> bool {
        self.phase.accepts_input() && self.verification.ready()
    }

    fn expect_phase(
        &self,
        expected: WorkflowPhase,
        event: &'static str,
    ) -> Result<(), WorkflowError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(WorkflowError::Phase {
                event,
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_client::SubmissionError;
    use intake_types::VerificationToken;
    use intake_validation::Rule;

    fn approved_session() -> SessionContext {
        SessionContext::approved(Some("jwt".into()), Some("太郎".into()))
    }

    fn fill_valid_draft(machine: &mut SubmissionMachine) {
        machine.set_name("太郎").unwrap();
        machine.set_email("a@b.com").unwrap();
        machine.set_category(Category::General).unwrap();
        machine.set_message("1234567890").unwrap();
    }

    /// Machine with the verification gate disabled, already in `form`.
    fn form_machine() -> SubmissionMachine {
        let mut machine = SubmissionMachine::new(VerificationGate::Disabled);
        machine.session_resolved(approved_session()).unwrap();
        machine
    }

    /// Machine with the verification gate enabled, already in `form`.
    fn gated_machine() -> SubmissionMachine {
        let mut machine =
            SubmissionMachine::new(VerificationGate::from_site_key(Some("site-key")));
        machine.session_resolved(approved_session()).unwrap();
        machine
    }

    fn verify(machine: &mut SubmissionMachine, token: &str) {
        machine
            .challenge_signal(ChallengeSignal::Verified(VerificationToken::new(token)))
            .unwrap();
    }

    // ── Initialization ─────────────────────────────────────────────────

    #[test]
    fn approved_session_enters_form_with_prefill() {
        let machine = form_machine();
        assert_eq!(machine.phase(), WorkflowPhase::Form);
        assert_eq!(machine.draft().name, "太郎");
    }

    #[test]
    fn approved_session_without_hint_leaves_name_empty() {
        let mut machine = SubmissionMachine::new(VerificationGate::Disabled);
        machine
            .session_resolved(SessionContext::approved(None, None))
            .unwrap();
        assert_eq!(machine.phase(), WorkflowPhase::Form);
        assert_eq!(machine.draft().name, "");
    }

    #[test]
    fn unapproved_session_blocks() {
        let mut machine = SubmissionMachine::new(VerificationGate::Disabled);
        machine.session_resolved(SessionContext::blocked()).unwrap();
        assert_eq!(machine.phase(), WorkflowPhase::Blocked);
    }

    #[test]
    fn blocked_is_terminal_for_every_event() {
        let mut machine = SubmissionMachine::new(VerificationGate::from_site_key(Some("k")));
        machine.session_resolved(SessionContext::blocked()).unwrap();

        assert!(machine.set_name("x").is_err());
        assert!(machine.set_email("x@y.zz").is_err());
        assert!(machine.set_message("x".repeat(10)).is_err());
        assert!(machine.request_submit().is_err());
        assert!(machine.cancel_confirmation().is_err());
        assert!(machine.confirm().is_err());
        assert!(machine.submission_succeeded().is_err());
        assert!(machine
            .submission_failed(ErrorNotice::new("x"))
            .is_err());
        assert!(machine
            .challenge_signal(ChallengeSignal::Expired)
            .is_err());
        assert!(machine.reset().is_err());
        assert_eq!(machine.phase(), WorkflowPhase::Blocked);
    }

    #[test]
    fn session_resolved_twice_is_rejected() {
        let mut machine = form_machine();
        let err = machine.session_resolved(approved_session()).unwrap_err();
        assert!(matches!(err, WorkflowError::Phase { .. }));
    }

    // ── Validation on submit ───────────────────────────────────────────

    #[test]
    fn validation_failure_stays_in_form_with_notice() {
        let mut machine = form_machine();
        machine.set_email("bad-email").unwrap();
        machine.set_message("1234567890").unwrap();

        machine.request_submit().unwrap();
        assert_eq!(machine.phase(), WorkflowPhase::Form);
        assert_eq!(
            machine.notice().unwrap().as_str(),
            Rule::EmailShape.message()
        );
        // Fields untouched.
        assert_eq!(machine.draft().email, "bad-email");
    }

    #[test]
    fn nine_character_message_fails_ten_passes() {
        let mut machine = form_machine();
        fill_valid_draft(&mut machine);
        machine.set_message("123456789").unwrap();

        machine.request_submit().unwrap();
        assert_eq!(machine.phase(), WorkflowPhase::Form);
        assert_eq!(
            machine.notice().unwrap().as_str(),
            Rule::MessageTooShort.message()
        );

        machine.set_message("1234567890").unwrap();
        machine.request_submit().unwrap();
        assert_eq!(machine.phase(), WorkflowPhase::Confirming);
        assert_eq!(machine.notice(), None);
    }

    #[test]
    fn validation_pass_snapshots_trimmed_draft() {
        let mut machine = form_machine();
        machine.set_name("  太郎 ").unwrap();
        machine.set_email(" a@b.com ").unwrap();
        machine.set_category(Category::Bug).unwrap();
        machine.set_message("  アプリが起動しません  ").unwrap();

        machine.request_submit().unwrap();
        let summary = machine.confirmation().unwrap();
        assert_eq!(summary.name, "太郎");
        assert_eq!(summary.email, "a@b.com");
        assert_eq!(summary.category, Category::Bug);
        assert_eq!(summary.category_label(), "不具合報告");
        assert_eq!(summary.message, "アプリが起動しません");
        // The draft keeps its raw, untrimmed content.
        assert_eq!(machine.draft().name, "  太郎 ");
    }

    // ── Confirmation step ──────────────────────────────────────────────

    #[test]
    fn cancel_returns_to_form_with_draft_unchanged() {
        let mut machine = form_machine();
        fill_valid_draft(&mut machine);
        let before = machine.draft().clone();

        machine.request_submit().unwrap();
        machine.cancel_confirmation().unwrap();

        assert_eq!(machine.phase(), WorkflowPhase::Form);
        assert_eq!(machine.confirmation(), None);
        assert_eq!(machine.draft(), &before);
    }

    #[test]
    fn confirm_builds_payload_and_enters_submitting() {
        let mut machine = gated_machine();
        fill_valid_draft(&mut machine);
        verify(&mut machine, "tok-1");

        machine.request_submit().unwrap();
        let payload = machine.confirm().unwrap();

        assert_eq!(machine.phase(), WorkflowPhase::Submitting);
        assert_eq!(payload.name(), "太郎");
        assert_eq!(payload.id_token(), Some("jwt"));
        assert_eq!(payload.verification_token().unwrap().as_str(), "tok-1");
    }

    #[test]
    fn input_is_rejected_while_submitting() {
        let mut machine = form_machine();
        fill_valid_draft(&mut machine);
        machine.request_submit().unwrap();
        machine.confirm().unwrap();

        assert!(machine.set_name("別名").is_err());
        assert!(machine.request_submit().is_err());
        assert!(machine.reset().is_err());
        assert!(!machine.can_submit());
    }

    #[test]
    fn success_is_unreachable_without_confirming() {
        let mut machine = form_machine();
        fill_valid_draft(&mut machine);

        // Straight from form: rejected.
        assert!(machine.submission_succeeded().is_err());

        // From confirming without the confirm event: still rejected.
        machine.request_submit().unwrap();
        assert!(machine.submission_succeeded().is_err());

        // Only the explicit confirm opens the path.
        machine.confirm().unwrap();
        machine.submission_succeeded().unwrap();
        assert_eq!(machine.phase(), WorkflowPhase::Succeeded);
    }

    // ── Submission outcomes ────────────────────────────────────────────

    #[test]
    fn failure_returns_to_form_clears_token_keeps_draft() {
        let mut machine = gated_machine();
        fill_valid_draft(&mut machine);
        verify(&mut machine, "tok-1");
        machine.request_submit().unwrap();
        machine.confirm().unwrap();

        let notice = SubmissionError::Transport("connection refused".into()).user_notice();
        machine.submission_failed(notice).unwrap();

        assert_eq!(machine.phase(), WorkflowPhase::Form);
        assert_eq!(machine.notice().unwrap().as_str(), "送信に失敗しました");
        assert_eq!(machine.verification().token(), None);
        assert_eq!(machine.draft().name, "太郎");
        assert_eq!(machine.draft().message, "1234567890");
    }

    #[test]
    fn resubmission_without_fresh_token_is_blocked() {
        let mut machine = gated_machine();
        fill_valid_draft(&mut machine);
        verify(&mut machine, "tok-1");
        machine.request_submit().unwrap();
        machine.confirm().unwrap();
        machine
            .submission_failed(ErrorNotice::new("送信に失敗しました"))
            .unwrap();

        assert!(!machine.can_submit());
        let err = machine.request_submit().unwrap_err();
        assert!(matches!(err, WorkflowError::VerificationPending));

        // A fresh token reopens the path.
        verify(&mut machine, "tok-2");
        assert!(machine.can_submit());
        machine.request_submit().unwrap();
        assert_eq!(machine.phase(), WorkflowPhase::Confirming);
    }

    #[test]
    fn second_attempt_payload_carries_the_fresh_token() {
        let mut machine = gated_machine();
        fill_valid_draft(&mut machine);
        verify(&mut machine, "tok-1");
        machine.request_submit().unwrap();
        machine.confirm().unwrap();
        machine
            .submission_failed(ErrorNotice::new("送信に失敗しました"))
            .unwrap();

        verify(&mut machine, "tok-2");
        machine.request_submit().unwrap();
        let payload = machine.confirm().unwrap();
        assert_eq!(payload.verification_token().unwrap().as_str(), "tok-2");
        // Draft content is unchanged between attempts.
        assert_eq!(payload.name(), "太郎");
    }

    #[test]
    fn succeeded_is_terminal() {
        let mut machine = form_machine();
        fill_valid_draft(&mut machine);
        machine.request_submit().unwrap();
        machine.confirm().unwrap();
        machine.submission_succeeded().unwrap();

        assert!(machine.set_name("x").is_err());
        assert!(machine.request_submit().is_err());
        assert!(machine.reset().is_err());
        assert_eq!(machine.phase(), WorkflowPhase::Succeeded);
    }

    // ── Verification gating ────────────────────────────────────────────

    #[test]
    fn gated_submit_without_token_is_an_error_not_a_notice() {
        let mut machine = gated_machine();
        fill_valid_draft(&mut machine);

        assert!(!machine.can_submit());
        let err = machine.request_submit().unwrap_err();
        assert!(matches!(err, WorkflowError::VerificationPending));
        assert_eq!(machine.notice(), None);
        assert_eq!(machine.phase(), WorkflowPhase::Form);
    }

    #[test]
    fn validation_is_checked_before_the_token() {
        let mut machine = gated_machine();
        machine.set_email("bad-email").unwrap();

        // Invalid draft and no token: the validator answers first, so this
        // is a handled notice, not a VerificationPending error.
        machine.request_submit().unwrap();
        assert_eq!(machine.phase(), WorkflowPhase::Form);
        assert_eq!(
            machine.notice().unwrap().as_str(),
            Rule::EmailShape.message()
        );
    }

    #[test]
    fn disabled_gate_submits_without_token() {
        let mut machine = form_machine();
        fill_valid_draft(&mut machine);

        assert!(machine.can_submit());
        machine.request_submit().unwrap();
        let payload = machine.confirm().unwrap();
        assert_eq!(payload.verification_token(), None);
    }

    #[test]
    fn widget_error_clears_token_and_surfaces_notice() {
        let mut machine = gated_machine();
        verify(&mut machine, "tok-1");

        machine.challenge_signal(ChallengeSignal::Errored).unwrap();
        assert_eq!(machine.verification().token(), None);
        assert_eq!(machine.notice().unwrap().as_str(), CHALLENGE_FAILED_NOTICE);
    }

    #[test]
    fn widget_expiry_clears_token_silently() {
        let mut machine = gated_machine();
        verify(&mut machine, "tok-1");

        machine.challenge_signal(ChallengeSignal::Expired).unwrap();
        assert_eq!(machine.verification().token(), None);
        assert_eq!(machine.notice(), None);
    }

    #[test]
    fn token_may_arrive_during_confirmation() {
        let mut machine = gated_machine();
        fill_valid_draft(&mut machine);
        verify(&mut machine, "tok-1");
        machine.request_submit().unwrap();

        // The widget re-issues while the user stares at the summary.
        verify(&mut machine, "tok-2");
        let payload = machine.confirm().unwrap();
        assert_eq!(payload.verification_token().unwrap().as_str(), "tok-2");
    }

    #[test]
    fn verified_signal_on_disabled_gate_is_rejected() {
        let mut machine = form_machine();
        let err = machine
            .challenge_signal(ChallengeSignal::Verified(VerificationToken::new("t")))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Verification(_)));
    }

    // ── Reset ──────────────────────────────────────────────────────────

    #[test]
    fn reset_clears_draft_notice_and_token() {
        let mut machine = gated_machine();
        fill_valid_draft(&mut machine);
        verify(&mut machine, "tok-1");
        machine.set_email("bad-email").unwrap();
        machine.request_submit().unwrap(); // sets the notice

        machine.reset().unwrap();
        assert_eq!(machine.draft(), &InquiryDraft::new());
        assert_eq!(machine.notice(), None);
        assert_eq!(machine.verification().token(), None);
        assert_eq!(machine.phase(), WorkflowPhase::Form);
    }
}
