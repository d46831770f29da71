//! Human-verification gate for the intake workflow.
//!
//! Wraps the external challenge widget behind an event surface: the widget
//! pushes [`ChallengeSignal`]s, the gate keeps (at most) the current token,
//! and the workflow reads the token exactly once per submission attempt.
//! Whether the gate exists at all is decided once from configuration, not
//! re-checked at runtime.

pub mod error;
pub mod gate;
pub mod signal;

pub use error::VerificationGateError;
pub use gate::VerificationGate;
pub use signal::ChallengeSignal;

/// Notice shown when the widget reports an error. Expiry, by contrast, is
/// silent: the token is simply dropped and the widget re-arms.
pub const CHALLENGE_FAILED_NOTICE: &str = "認証に失敗しました。もう一度お試しください。";
