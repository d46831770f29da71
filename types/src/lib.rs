//! Fundamental types for the intake submission workflow.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: the inquiry draft, the session context established by the
//! identity gate, the verification token, the workflow phase enum, and the
//! submission payload sent over the wire.

pub mod category;
pub mod draft;
pub mod notice;
pub mod payload;
pub mod phase;
pub mod session;
pub mod token;

pub use category::Category;
pub use draft::InquiryDraft;
pub use notice::ErrorNotice;
pub use payload::SubmissionPayload;
pub use phase::WorkflowPhase;
pub use session::SessionContext;
pub use token::VerificationToken;
