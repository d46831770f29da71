//! The outbound submission payload.

use crate::{Category, InquiryDraft, SessionContext, VerificationToken};
use serde::Serialize;

/// A read-only snapshot of the draft, built at the moment of confirmed
/// submission.
///
/// All string fields are trimmed at construction. The payload is never
/// mutated afterward, so a retry of the same attempt would send
/// byte-identical content. Fields are private: there is no way to alter a
/// payload once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmissionPayload {
    name: String,
    email: String,
    category: Category,
    message: String,
    #[serde(rename = "idToken")]
    id_token: Option<String>,
    #[serde(rename = "turnstileToken")]
    verification_token: Option<VerificationToken>,
}

impl SubmissionPayload {
    /// Snapshot `draft` together with the session's identity token and the
    /// current verification token (absent when the gate is disabled).
    pub fn new(
        draft: &InquiryDraft,
        session: &SessionContext,
        verification_token: Option<&VerificationToken>,
    ) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            category: draft.category,
            message: draft.message.trim().to_string(),
            id_token: session.identity_token.clone(),
            verification_token: verification_token.cloned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }

    pub fn verification_token(&self) -> Option<&VerificationToken> {
        self.verification_token.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> InquiryDraft {
        InquiryDraft {
            name: "  太郎 ".into(),
            email: " a@b.com ".into(),
            category: Category::Support,
            message: "  パスワードを再設定できません  ".into(),
        }
    }

    #[test]
    fn construction_trims_string_fields() {
        let session = SessionContext::approved(Some("jwt".into()), None);
        let payload = SubmissionPayload::new(&draft(), &session, None);
        assert_eq!(payload.name(), "太郎");
        assert_eq!(payload.email(), "a@b.com");
        assert_eq!(payload.message(), "パスワードを再設定できません");
        assert_eq!(payload.id_token(), Some("jwt"));
    }

    #[test]
    fn wire_format_uses_renamed_token_fields() {
        let session = SessionContext::approved(None, None);
        let token = VerificationToken::new("tok");
        let payload = SubmissionPayload::new(&draft(), &session, Some(&token));
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], "support");
        assert_eq!(json["idToken"], serde_json::Value::Null);
        assert_eq!(json["turnstileToken"], "tok");
    }

    #[test]
    fn identical_inputs_build_identical_payloads() {
        let session = SessionContext::approved(Some("jwt".into()), None);
        let a = SubmissionPayload::new(&draft(), &session, None);
        let b = SubmissionPayload::new(&draft(), &session, None);
        assert_eq!(a, b);
    }
}
