//! Opaque proof issued by the human-verification widget.

use serde::{Deserialize, Serialize};

/// A human-verification token.
///
/// The content is opaque to the workflow: it is stored when the widget
/// reports success, sent verbatim with the submission, and discarded on
/// expiry, widget error, or any failed submission attempt. One token backs
/// at most one attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken(String);

impl VerificationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
