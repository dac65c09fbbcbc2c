//! Configuration for the pizza console
//!
//! The console talks to one backend, identified by a base URL. The URL
//! defaults to the development backend but is explicit configuration:
//! it can come from an optional `console.toml` file and be overridden per
//! invocation by the binary's CLI flag or environment variable. The
//! resolved value is injected into the HTTP client at construction.

use crate::error::{ConsoleError, ConsoleResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default backend base URL (the development backend)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "console.toml";

// ============================================================================
// Configuration Types
// ============================================================================

/// Top-level console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConsoleConfig {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend API connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the billing backend, e.g. `http://localhost:8080`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ConsoleConfig {
    /// Create a configuration with the default base URL
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at a specific backend
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> ConsoleResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConsoleError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: ConsoleConfig = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the default config file if it exists, otherwise fall back to
    /// the built-in defaults
    pub fn load_or_default() -> ConsoleResult<Self> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load(DEFAULT_CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    /// Override the base URL, e.g. from a CLI flag
    pub fn override_base_url(&mut self, base_url: impl Into<String>) {
        self.api.base_url = base_url.into();
    }

    /// Check the configuration for obvious mistakes
    pub fn validate(&self) -> ConsoleResult<()> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(ConsoleError::InvalidConfig(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConsoleError::InvalidConfig(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        Ok(())
    }

    /// The base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

// ============================================================================
// Tests
// ============================================================================
