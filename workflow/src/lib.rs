//! Workflow orchestrator for the intake submission flow.
//!
//! Two layers, mirroring the split between pure logic and async plumbing:
//!
//! - [`SubmissionMachine`] is the synchronous state machine. Every
//!   transition is a phase-guarded method; events are processed to
//!   completion before the next one is handled, so there is no concurrent
//!   mutation of workflow state.
//! - [`InquiryGateway`] is the async driver. It owns the identity gate and
//!   the submission API, feeds their outcomes into the machine, and is the
//!   only place I/O happens.

pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod machine;

pub use config::GatewayConfig;
pub use error::WorkflowError;
pub use gateway::InquiryGateway;
pub use logging::{init_logging, LogFormat};
pub use machine::{ConfirmationSummary, SubmissionMachine};
