//! Nullable collaborators for deterministic testing.
//!
//! Every external dependency of the workflow (identity provider,
//! submission API, challenge widget) is abstracted behind a trait or an
//! event surface. This crate provides test-friendly implementations that:
//! - return programmed values,
//! - record every interaction for assertions,
//! - never touch the network.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod api;
pub mod identity;
pub mod widget;

pub use api::NullInquiryApi;
pub use identity::NullIdentityProvider;
pub use widget::NullChallengeWidget;
