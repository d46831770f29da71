//! Workflow phase enum.

use serde::{Deserialize, Serialize};

/// The phase of the submission workflow. Exactly one is active at a time.
///
/// Submission failure is not a phase of its own: a failed attempt returns
/// the workflow to [`WorkflowPhase::Form`] with an error notice set, so the
/// draft stays editable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowPhase {
    /// Waiting for the identity gate to resolve.
    Initializing,
    /// Channel check failed. Terminal; no event leaves this phase.
    Blocked,
    /// The draft is being edited.
    Form,
    /// Validation passed; awaiting explicit user confirmation.
    Confirming,
    /// A submission is in flight. Input events are rejected.
    Submitting,
    /// The inquiry was accepted. Terminal.
    Succeeded,
}

impl WorkflowPhase {
    /// Whether any further transition is possible from this phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Blocked | Self::Succeeded)
    }

    /// Whether user edits to the draft are accepted.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Form)
    }
}
