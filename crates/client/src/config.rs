use eyre::{Result, eyre};
use serde::Deserialize;
use std::env;

/// Configuration for the schedule API client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the appointment backend (required)
    pub base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("SCHEDULE_API_URL")
            .map_err(|_| eyre!("SCHEDULE_API_URL environment variable not set"))?;

        Ok(Self::new(base_url))
    }

    /// Build a configuration from an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        // Trailing slashes are stripped so endpoint paths can be appended
        // uniformly.
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }
}
