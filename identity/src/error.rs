use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider application id is not configured")]
    NotConfigured,

    #[error("identity provider initialization failed: {0}")]
    InitFailed(String),
}
