//! The user-editable, not-yet-submitted inquiry content.

use crate::Category;
use serde::{Deserialize, Serialize};

/// The mutable inquiry draft, owned exclusively by the workflow.
///
/// Carries no invariants while the form is being edited; the field
/// validator decides whether a submission attempt may proceed. The draft
/// persists across failed submission attempts so the user never retypes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub category: Category,
    pub message: String,
}

impl InquiryDraft {
    /// An empty draft with the default category selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field to its initial value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
