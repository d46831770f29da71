use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationGateError {
    #[error("human verification is not configured for this deployment")]
    NotConfigured,
}
