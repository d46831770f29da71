//! Inbound events from the challenge widget.

use intake_types::VerificationToken;

/// The three signals the external widget can emit. Event-driven only; the
/// gate never polls the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChallengeSignal {
    /// The challenge was solved; carry the issued token.
    Verified(VerificationToken),
    /// The widget failed. Surfaced to the user.
    Errored,
    /// The issued token aged out. Routine, not surfaced.
    Expired,
}
