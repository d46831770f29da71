//! Structured logging initialisation for the gateway host.
//!
//! The filter level can be overridden at runtime via the `RUST_LOG`
//! environment variable; when it is not set, the configured level string is
//! used (e.g. `"info"`, `"debug,intake_workflow=trace"`).

use crate::{GatewayConfig, WorkflowError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines for local development.
    Human,
    /// Newline-delimited JSON for log aggregation pipelines.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(WorkflowError::Config(format!(
                "unknown log format: {other} (expected \"human\" or \"json\")"
            ))),
        }
    }
}

/// Initialise the global tracing subscriber from the gateway config.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (i.e. this function
/// was called twice in the same process).
pub fn init_logging(config: &GatewayConfig) -> Result<(), WorkflowError> {
    let format: LogFormat = config.log_format.parse()?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match format {
        LogFormat::Human => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(true))
                .init();
        }
    }
    Ok(())
}
