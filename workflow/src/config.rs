//! Gateway configuration with TOML file support.

use crate::WorkflowError;
use serde::{Deserialize, Serialize};

/// Configuration for an [`crate::InquiryGateway`].
///
/// Each optional field activates one external collaborator: an absent
/// verification site key is a legal "feature disabled" state, an absent
/// identity application id fails the channel check closed, and an absent
/// backend address surfaces as a submission error on the first attempt.
///
/// Can be loaded from a TOML file via [`GatewayConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base address of the inquiry backend.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Application id for the identity provider.
    #[serde(default)]
    pub channel_app_id: Option<String>,

    /// Site key for the human-verification widget.
    #[serde(default)]
    pub verification_site_key: Option<String>,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl GatewayConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, WorkflowError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WorkflowError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WorkflowError> {
        toml::from_str(s).map_err(|e| WorkflowError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("GatewayConfig is always serializable to TOML")
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            channel_app_id: None,
            verification_site_key: None,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
