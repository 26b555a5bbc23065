//! # Harness Error Types
//!
//! Endpoint resolution itself never fails: missing configuration falls back to
//! defaults. These errors cover the opt-in edges around it (role parsing, typed
//! URL conversion, and building a layered configuration).

use thiserror::Error;

/// Harness operation result type
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Error types for harness operations
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Unknown deployer role: {name}")]
    UnknownRole { name: String },

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl HarnessError {
    /// Create an unknown role error
    pub fn unknown_role(name: impl Into<String>) -> Self {
        Self::UnknownRole { name: name.into() }
    }
}
