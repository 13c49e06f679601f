//! Client configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Connection settings for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend API, including the mount prefix.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Overrides the default `labsched-client/<version>` user agent.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a file, with `LABSCHED_*` environment
    /// variables taking precedence over file values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("timeout_secs", defaults.timeout_secs)?
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("LABSCHED"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from defaults and `LABSCHED_*` environment
    /// variables alone.
    pub fn from_env() -> Result<Self, ClientError> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("timeout_secs", defaults.timeout_secs)?
            .add_source(config::Environment::with_prefix("LABSCHED"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
