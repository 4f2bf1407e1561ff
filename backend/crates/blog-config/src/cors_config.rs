use crate::{ConfigError, ConfigErrorResult, DEFAULT_CORS_ORIGIN};

use serde::Deserialize;

/// Cross-origin callers allowed to send credentials
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from(DEFAULT_CORS_ORIGIN)],
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for origin in &self.allowed_origins {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entry '{}' must start with http:// or https://",
                    origin
                )));
            }
            if origin.ends_with('/') || !origin.chars().all(|c| c.is_ascii_graphic()) {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entry '{}' is not a valid origin",
                    origin
                )));
            }
        }

        Ok(())
    }
}
