//! The identity gate: one channel decision per session.

use crate::{IdentityError, IdentityProvider};
use intake_types::SessionContext;

/// Wraps an [`IdentityProvider`] and resolves the session context exactly
/// once.
///
/// Fails closed: a missing application id, a provider error, and a negative
/// channel check all produce the same blocked context. Repeated
/// `initialize` calls after the first return the cached result; the guard
/// is owned by the gate instance, not by process-global state.
pub struct IdentityGate<P> {
    provider: P,
    app_id: Option<String>,
    session: Option<SessionContext>,
}

impl<P: IdentityProvider> IdentityGate<P> {
    /// `app_id` comes from configuration; `None` deactivates the identity
    /// feature entirely, which fails the channel check.
    pub fn new(provider: P, app_id: Option<String>) -> Self {
        Self {
            provider,
            app_id,
            session: None,
        }
    }

    /// Resolve the session context, caching the result.
    pub async fn initialize(&mut self) -> SessionContext {
        if let Some(session) = &self.session {
            return session.clone();
        }

        let session = match self.resolve().await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "identity initialization failed, blocking session");
                SessionContext::blocked()
            }
        };

        self.session = Some(session.clone());
        session
    }

    async fn resolve(&self) -> Result<SessionContext, IdentityError> {
        let app_id = self.app_id.as_deref().ok_or(IdentityError::NotConfigured)?;

        self.provider.initialize(app_id).await?;

        if !self.provider.in_approved_channel() {
            tracing::info!("session is outside the approved channel");
            return Ok(SessionContext::blocked());
        }

        let token = self.provider.id_token();
        let hint = self.provider.profile().await.map(|p| p.display_name);
        tracing::debug!(
            logged_in = token.is_some(),
            has_hint = hint.is_some(),
            "identity session approved"
        );
        Ok(SessionContext::approved(token, hint))
    }

    /// The resolved session, if `initialize` has completed.
    pub fn session(&self) -> Option<&SessionContext> {
        self.session.as_ref()
    }

    /// Ask the host application to dismiss the surface. No-op unless the
    /// session resolved inside the approved channel.
    pub fn request_close(&self) {
        match &self.session {
            Some(session) if session.in_approved_channel => self.provider.request_close(),
            _ => tracing::debug!("ignoring close request outside approved channel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Profile;
    use std::cell::Cell;

    struct StubProvider {
        approved: bool,
        token: Option<String>,
        display_name: Option<String>,
        fail_init: bool,
        init_calls: Cell<u32>,
        close_calls: Cell<u32>,
    }

    impl StubProvider {
        fn approved() -> Self {
            Self {
                approved: true,
                token: Some("jwt".into()),
                display_name: Some("太郎".into()),
                fail_init: false,
                init_calls: Cell::new(0),
                close_calls: Cell::new(0),
            }
        }

        fn outside_channel() -> Self {
            Self {
                approved: false,
                ..Self::approved()
            }
        }

        fn failing() -> Self {
            Self {
                fail_init: true,
                ..Self::approved()
            }
        }
    }

    impl IdentityProvider for StubProvider {
        async fn initialize(&self, _app_id: &str) -> Result<(), IdentityError> {
            self.init_calls.set(self.init_calls.get() + 1);
            if self.fail_init {
                return Err(IdentityError::InitFailed("sdk unavailable".into()));
            }
            Ok(())
        }

        fn in_approved_channel(&self) -> bool {
            self.approved
        }

        fn id_token(&self) -> Option<String> {
            self.token.clone()
        }

        async fn profile(&self) -> Option<Profile> {
            self.display_name.clone().map(|display_name| Profile {
                user_id: "U1".into(),
                display_name,
                picture_url: None,
            })
        }

        fn request_close(&self) {
            self.close_calls.set(self.close_calls.get() + 1);
        }
    }

    fn gate(provider: StubProvider) -> IdentityGate<StubProvider> {
        IdentityGate::new(provider, Some("app-123".into()))
    }

    #[tokio::test]
    async fn approved_session_carries_token_and_hint() {
        let mut gate = gate(StubProvider::approved());
        let session = gate.initialize().await;
        assert!(session.in_approved_channel);
        assert_eq!(session.identity_token.as_deref(), Some("jwt"));
        assert_eq!(session.display_name_hint.as_deref(), Some("太郎"));
    }

    #[tokio::test]
    async fn negative_channel_check_blocks() {
        let mut gate = gate(StubProvider::outside_channel());
        let session = gate.initialize().await;
        assert_eq!(session, SessionContext::blocked());
    }

    #[tokio::test]
    async fn provider_error_blocks_identically() {
        let mut gate = gate(StubProvider::failing());
        let session = gate.initialize().await;
        assert_eq!(session, SessionContext::blocked());
    }

    #[tokio::test]
    async fn missing_app_id_blocks_without_touching_provider() {
        let mut gate = IdentityGate::new(StubProvider::approved(), None);
        let session = gate.initialize().await;
        assert_eq!(session, SessionContext::blocked());
        assert_eq!(gate.provider.init_calls.get(), 0);
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let mut gate = gate(StubProvider::approved());
        let first = gate.initialize().await;
        let second = gate.initialize().await;
        assert_eq!(first, second);
        assert_eq!(gate.provider.init_calls.get(), 1);
    }

    #[tokio::test]
    async fn close_honored_only_inside_approved_channel() {
        let mut approved = gate(StubProvider::approved());
        approved.request_close(); // before init: no session yet
        assert_eq!(approved.provider.close_calls.get(), 0);

        approved.initialize().await;
        approved.request_close();
        assert_eq!(approved.provider.close_calls.get(), 1);

        let mut blocked = gate(StubProvider::outside_channel());
        blocked.initialize().await;
        blocked.request_close();
        assert_eq!(blocked.provider.close_calls.get(), 0);
    }

    #[tokio::test]
    async fn guest_session_is_legal_when_channel_passes() {
        let mut provider = StubProvider::approved();
        provider.token = None;
        let mut gate = gate(provider);
        let session = gate.initialize().await;
        assert!(session.in_approved_channel);
        assert_eq!(session.identity_token, None);
    }
}
