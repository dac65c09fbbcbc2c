//! Error types for the pizza console
//!
//! This module provides unified error handling across the console,
//! covering load failures, save/delete failures, client-side validation,
//! and configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the pizza console
#[derive(Debug, Error)]
pub enum ConsoleError {
    // ========================================================================
    // Collection Errors
    // ========================================================================
    /// Loading a resource collection failed (transport failure or non-2xx)
    #[error("Failed to load {resource}: {message}")]
    Fetch { resource: String, message: String },

    /// Creating or updating an entity failed
    #[error("Failed to save {resource}: {message}")]
    Save {
        resource: String,
        /// HTTP status, if the server was reachable
        status: Option<u16>,
        message: String,
    },

    /// Deleting an entity failed
    #[error("Failed to delete {resource} '{id}': {message}")]
    Delete {
        resource: String,
        id: String,
        message: String,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Client-side field validation failed before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    // ========================================================================
    // IO / Serialization Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl ConsoleError {
    /// Create a fetch error for a resource collection
    pub fn fetch(resource: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::Fetch {
            resource: resource.into(),
            message: msg.into(),
        }
    }

    /// Create a save error without a known HTTP status (transport failure)
    pub fn save(resource: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::Save {
            resource: resource.into(),
            status: None,
            message: msg.into(),
        }
    }

    /// Create a save error from a non-success HTTP status
    pub fn save_status(resource: impl Into<String>, status: u16) -> Self {
        ConsoleError::Save {
            resource: resource.into(),
            status: Some(status),
            message: format!("server returned status {}", status),
        }
    }

    /// Create a delete error
    pub fn delete(
        resource: impl Into<String>,
        id: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        ConsoleError::Delete {
            resource: resource.into(),
            id: id.into(),
            message: msg.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ConsoleError::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ConsoleError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a fetch (list-load) error
    pub fn is_fetch(&self) -> bool {
        matches!(self, ConsoleError::Fetch { .. })
    }

    /// Check if this error is a save (create/update) error
    pub fn is_save(&self) -> bool {
        matches!(self, ConsoleError::Save { .. })
    }

    /// Check if this error is a delete error
    pub fn is_delete(&self) -> bool {
        matches!(self, ConsoleError::Delete { .. })
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, ConsoleError::Validation(_))
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ConsoleError::InvalidConfig(_) | ConsoleError::ConfigRead { .. }
        )
    }

    /// Check if the failed operation may simply be retried by the user
    ///
    /// Fetch, save, and delete failures are all terminal per attempt; the
    /// only recovery anywhere is a manual repeat of the user action.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ConsoleError::Fetch { .. } | ConsoleError::Save { .. } | ConsoleError::Delete { .. }
        )
    }

    /// Get a message suitable for showing directly to the user
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Fetch { resource, .. } => {
                format!("Failed to load {}. Please try again later.", resource)
            }
            ConsoleError::Save { resource, .. } => {
                format!("Error saving {}. Please try again.", resource)
            }
            ConsoleError::Delete { resource, .. } => {
                format!("Error deleting the {}. Please try again.", resource)
            }
            ConsoleError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> ConsoleResult<T>;
}

impl<T, E: Into<ConsoleError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> ConsoleResult<T> {
        self.map_err(|e| {
            let err: ConsoleError = e.into();
            ConsoleError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
