//! Token slot with a config-time presence switch.

use crate::VerificationGateError;
use intake_types::VerificationToken;

/// The human-verification gate.
///
/// The variant is fixed at construction from the configured site key:
/// [`VerificationGate::Disabled`] means the widget is absent entirely and
/// submission proceeds without a token (an explicit configuration switch,
/// not a fallback-on-error). [`VerificationGate::Enabled`] holds the token
/// slot the widget callbacks write into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationGate {
    /// No site key configured; submissions carry no token.
    Disabled,
    /// Widget configured; a current token is required before submission.
    Enabled { token: Option<VerificationToken> },
}

impl VerificationGate {
    /// Decide the variant once from configuration. An absent or empty site
    /// key disables the gate.
    pub fn from_site_key(site_key: Option<&str>) -> Self {
        match site_key {
            Some(key) if !key.trim().is_empty() => Self::Enabled { token: None },
            _ => Self::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }

    /// The token that would accompany a submission right now.
    pub fn token(&self) -> Option<&VerificationToken> {
        match self {
            Self::Disabled => None,
            Self::Enabled { token } => token.as_ref(),
        }
    }

    /// Whether submission may proceed: trivially true when disabled,
    /// otherwise a current token must be held.
    pub fn ready(&self) -> bool {
        match self {
            Self::Disabled => true,
            Self::Enabled { token } => token.is_some(),
        }
    }

    /// Store the token from a `verified` widget signal. A later signal
    /// replaces an earlier token.
    pub fn store_token(&mut self, new: VerificationToken) -> Result<(), VerificationGateError> {
        match self {
            Self::Disabled => Err(VerificationGateError::NotConfigured),
            Self::Enabled { token } => {
                *token = Some(new);
                Ok(())
            }
        }
    }

    /// Drop the held token: on expiry, on widget error, and after any
    /// failed submission attempt. No-op when disabled or empty.
    pub fn clear_token(&mut self) {
        if let Self::Enabled { token } = self {
            *token = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_site_key_disables() {
        assert_eq!(VerificationGate::from_site_key(None), VerificationGate::Disabled);
        assert_eq!(VerificationGate::from_site_key(Some("")), VerificationGate::Disabled);
        assert_eq!(VerificationGate::from_site_key(Some("  ")), VerificationGate::Disabled);
    }

    #[test]
    fn site_key_enables_with_empty_slot() {
        let gate = VerificationGate::from_site_key(Some("0x4AAA"));
        assert!(gate.is_enabled());
        assert_eq!(gate.token(), None);
        assert!(!gate.ready());
    }

    #[test]
    fn disabled_gate_is_always_ready_and_tokenless() {
        let mut gate = VerificationGate::Disabled;
        assert!(gate.ready());
        assert_eq!(gate.token(), None);
        gate.clear_token(); // no-op
        assert!(gate.ready());
    }

    #[test]
    fn storing_into_a_disabled_gate_is_an_error() {
        let mut gate = VerificationGate::Disabled;
        let err = gate.store_token(VerificationToken::new("t")).unwrap_err();
        assert!(matches!(err, VerificationGateError::NotConfigured));
    }

    #[test]
    fn token_lifecycle() {
        let mut gate = VerificationGate::from_site_key(Some("key"));
        gate.store_token(VerificationToken::new("one")).unwrap();
        assert!(gate.ready());
        assert_eq!(gate.token().unwrap().as_str(), "one");

        // A fresh signal replaces the held token.
        gate.store_token(VerificationToken::new("two")).unwrap();
        assert_eq!(gate.token().unwrap().as_str(), "two");

        gate.clear_token();
        assert_eq!(gate.token(), None);
        assert!(!gate.ready());
    }
}
