//! Nullable identity provider — programmed session, recorded calls.

use intake_identity::{IdentityError, IdentityProvider, Profile};
use std::cell::{Cell, RefCell};

/// A test identity provider with a programmable outcome.
///
/// Records initialization and close-surface calls so tests can assert the
/// gate's idempotency and channel guard.
pub struct NullIdentityProvider {
    approved: bool,
    token: Option<String>,
    profile: Option<Profile>,
    fail_init: Option<String>,
    init_calls: Cell<u32>,
    initialized_with: RefCell<Vec<String>>,
    close_requests: Cell<u32>,
}

impl NullIdentityProvider {
    /// A provider inside the approved channel, logged in as `太郎`.
    pub fn approved() -> Self {
        Self {
            approved: true,
            token: Some("null-id-token".to_string()),
            profile: Some(Profile {
                user_id: "U0000000000000000000000000000000".to_string(),
                display_name: "太郎".to_string(),
                picture_url: None,
            }),
            fail_init: None,
            init_calls: Cell::new(0),
            initialized_with: RefCell::new(Vec::new()),
            close_requests: Cell::new(0),
        }
    }

    /// A provider outside the approved channel.
    pub fn outside_channel() -> Self {
        Self {
            approved: false,
            token: None,
            profile: None,
            ..Self::approved()
        }
    }

    /// A provider whose initialization fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_init: Some(reason.into()),
            ..Self::approved()
        }
    }

    /// Replace the programmed bearer token (`None` models a guest).
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }

    /// Replace the programmed profile (`None` models retrieval failure).
    pub fn with_profile(mut self, profile: Option<Profile>) -> Self {
        self.profile = profile;
        self
    }

    /// How many times `initialize` ran.
    pub fn init_calls(&self) -> u32 {
        self.init_calls.get()
    }

    /// Application ids passed to `initialize`, in order.
    pub fn initialized_with(&self) -> Vec<String> {
        self.initialized_with.borrow().clone()
    }

    /// How many close-surface requests were received.
    pub fn close_requests(&self) -> u32 {
        self.close_requests.get()
    }
}

impl IdentityProvider for NullIdentityProvider {
    async fn initialize(&self, app_id: &str) -> Result<(), IdentityError> {
        self.init_calls.set(self.init_calls.get() + 1);
        self.initialized_with.borrow_mut().push(app_id.to_string());
        match &self.fail_init {
            Some(reason) => Err(IdentityError::InitFailed(reason.clone())),
            None => Ok(()),
        }
    }

    fn in_approved_channel(&self) -> bool {
        self.approved
    }

    fn id_token(&self) -> Option<String> {
        self.token.clone()
    }

    async fn profile(&self) -> Option<Profile> {
        self.profile.clone()
    }

    fn request_close(&self) {
        self.close_requests.set(self.close_requests.get() + 1);
    }
}

/// Shared-reference impl so a test can hand the gateway `&provider` and
/// keep the original for assertions.
impl IdentityProvider for &NullIdentityProvider {
    async fn initialize(&self, app_id: &str) -> Result<(), IdentityError> {
        <NullIdentityProvider as IdentityProvider>::initialize(self, app_id).await
    }

    fn in_approved_channel(&self) -> bool {
        <NullIdentityProvider as IdentityProvider>::in_approved_channel(self)
    }

    fn id_token(&self) -> Option<String> {
        <NullIdentityProvider as IdentityProvider>::id_token(self)
    }

    async fn profile(&self) -> Option<Profile> {
        <NullIdentityProvider as IdentityProvider>::profile(self).await
    }

    fn request_close(&self) {
        <NullIdentityProvider as IdentityProvider>::request_close(self)
    }
}
