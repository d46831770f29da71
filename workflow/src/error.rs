use intake_types::WorkflowPhase;
use intake_verification::VerificationGateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("{event} is not a valid event in phase {phase:?}")]
    Phase {
        event: &'static str,
        phase: WorkflowPhase,
    },

    #[error("human verification has not been completed")]
    VerificationPending,

    #[error("verification gate error: {0}")]
    Verification(#[from] VerificationGateError),

    #[error("config error: {0}")]
    Config(String),
}
