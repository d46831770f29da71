//! Identity gate for the intake workflow.
//!
//! Wraps the external identity provider behind a capability trait and
//! decides, once per session, whether the workflow may proceed: the gate
//! fails closed, so an initialization error and an explicit negative
//! channel check are indistinguishable downstream.

pub mod error;
pub mod gate;
pub mod provider;

pub use error::IdentityError;
pub use gate::IdentityGate;
pub use provider::{IdentityProvider, Profile};
