//! Capability trait for the external identity provider.

use crate::IdentityError;

/// Profile of the logged-in user, as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
    pub picture_url: Option<String>,
}

/// A pluggable identity provider.
///
/// Models the SDK surface the workflow actually depends on, not a concrete
/// library binding. Implementations wrap the real host-application SDK; the
/// nullables crate provides a deterministic stand-in for tests.
pub trait IdentityProvider {
    /// Initialize the provider session for the given application id.
    ///
    /// Called at most once per [`crate::IdentityGate`]; the gate owns the
    /// idempotency guard, so implementations need not.
    async fn initialize(&self, app_id: &str) -> Result<(), IdentityError>;

    /// Whether the session runs inside the approved host application.
    /// Only meaningful after a successful `initialize`.
    fn in_approved_channel(&self) -> bool;

    /// Bearer token for the current login, if the user is logged in.
    fn id_token(&self) -> Option<String>;

    /// Profile of the logged-in user. `None` when unavailable; profile
    /// retrieval failure is not an initialization failure.
    async fn profile(&self) -> Option<Profile>;

    /// Ask the host application to dismiss the surface. Fire-and-forget.
    fn request_close(&self);
}
