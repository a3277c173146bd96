// ⚙️ Configuration - shelter name and log filter
// Read from the environment or from an in-memory JSON document

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_SHELTER_NAME: &str = "Digital Pet Shelter";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelterConfig {
    /// Display name used in reports
    #[serde(default = "default_shelter_name")]
    pub shelter_name: String,

    /// `tracing_subscriber::EnvFilter` directive string
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_shelter_name() -> String {
    DEFAULT_SHELTER_NAME.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for ShelterConfig {
    fn default() -> Self {
        ShelterConfig {
            shelter_name: default_shelter_name(),
            log_filter: default_log_filter(),
        }
    }
}

impl ShelterConfig {
    /// `SHELTER_NAME` and `SHELTER_LOG`, each falling back to its default
    pub fn from_env() -> Self {
        ShelterConfig {
            shelter_name: env::var("SHELTER_NAME").unwrap_or_else(|_| default_shelter_name()),
            log_filter: env::var("SHELTER_LOG").unwrap_or_else(|_| default_log_filter()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse shelter config JSON")
    }
}

// ============================================================================
// TESTS
// ============================================================================
