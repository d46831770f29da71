//! Session context established once by the identity gate.

use serde::{Deserialize, Serialize};

/// The result of identity-gate initialization.
///
/// Produced once at workflow start and immutable for the lifetime of the
/// session. A missing identity token is legal (guest-equivalent) only when
/// the channel check passed; a session that failed the channel check never
/// carries a token or a hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Whether the session originates from the approved host application.
    pub in_approved_channel: bool,
    /// Bearer token for the logged-in user, if any.
    pub identity_token: Option<String>,
    /// Display name used to prefill the name field, if known.
    pub display_name_hint: Option<String>,
}

impl SessionContext {
    /// A session that passed the channel check.
    pub fn approved(identity_token: Option<String>, display_name_hint: Option<String>) -> Self {
        Self {
            in_approved_channel: true,
            identity_token,
            display_name_hint,
        }
    }

    /// A session that failed the channel check, or whose check could not be
    /// completed. The two cases are indistinguishable by construction.
    pub fn blocked() -> Self {
        Self {
            in_approved_channel: false,
            identity_token: None,
            display_name_hint: None,
        }
    }
}
