use crate::{ConfigError, ConfigErrorResult, DEFAULT_ENDPOINT};

use serde::Deserialize;

/// Configuration for the REST API the client talks to
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g., "http://127.0.0.1:8000")
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::api("api.endpoint must not be empty"));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::api(
                "api.endpoint must start with http:// or https://",
            ));
        }
        Ok(())
    }
}
