//! Field-level validation for inquiry drafts.
//!
//! Pure functions only: validation runs on submit attempts, never on edits.
//! Rules are evaluated in a fixed order and the first violation wins, so
//! the error message shown to the user is deterministic.

pub mod rules;

pub use rules::{validate, Field, Rule, ValidationIssue, MIN_MESSAGE_CHARS};
