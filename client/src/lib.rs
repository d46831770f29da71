//! Submission client for the intake workflow.
//!
//! One confirmed attempt, one request, no internal retry: retrying is a
//! user-initiated, workflow-level decision, never a transport-level one.
//! Every failure mode collapses into [`SubmissionError`], which in turn
//! collapses into a single localized notice for the form.

pub mod api;
pub mod client;
pub mod error;

pub use api::{ApiResponse, InquiryApi};
pub use client::InquiryClient;
pub use error::SubmissionError;
