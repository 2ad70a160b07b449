//! Error types for README Forge
//!
//! This module defines the error types for every component of the application.
//! Errors are designed to be actionable and to double as the user-facing text
//! shown by the form.

use std::path::PathBuf;

use thiserror::Error;

use crate::app::client::ErrorBody;
use crate::constants::messages;

/// Repository URL validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The URL does not match the accepted repository URL shape
    #[error("{}", messages::INVALID_GIT_URL)]
    InvalidGitUrl,
}

/// Reasons a submit is not acted on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The repository URL field is empty
    #[error("A Git repository URL is required")]
    EmptyUrl,

    /// The repository URL failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A generation request is already in flight
    #[error("A README is already being generated")]
    InFlight,
}

/// Errors talking to the generation service
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never produced a response (connection, DNS, timeout)
    #[error("Request to the generation service failed")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Generation service responded with HTTP {status}")]
    Status { status: u16, body: ErrorBody },

    /// Endpoint URL could not be built from configuration
    #[error("Invalid service URL: {url} - {error}")]
    InvalidUrl { url: String, error: String },
}

impl TransportError {
    /// User-facing message for the failed request
    ///
    /// Precedence: the `message` field of a JSON error payload, then the raw
    /// payload as text, then the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::Status { body, .. } => body
                .describe()
                .unwrap_or_else(|| messages::GENERIC_FAILURE.to_string()),
            TransportError::Network(_) | TransportError::InvalidUrl { .. } => {
                messages::GENERIC_FAILURE.to_string()
            }
        }
    }
}

/// Host environment (clipboard, file export) errors
#[derive(Error, Debug)]
pub enum HostError {
    /// Clipboard could not be opened or written
    #[error("Clipboard unavailable: {reason}")]
    Clipboard { reason: String },

    /// Export target and every numbered alternative already exist
    #[error("File already exists: {path}, and no numbered copy name is free")]
    FileExists { path: PathBuf },

    /// I/O error during export
    #[error("File I/O error")]
    Io(#[from] std::io::Error),

    /// Atomic rename of the exported file failed
    #[error("Atomic file operation failed: could not persist {final_path}")]
    AtomicOperationFailed { final_path: PathBuf },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be read or written
    #[error("Configuration file I/O failed for {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Configuration serialization failed")]
    Serialize(#[from] toml::ser::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// No user configuration directory on this platform
    #[error("Could not determine user config directory")]
    NoConfigDir,
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Submit rejected by the eligibility gate
    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// Generation service error
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Host environment error
    #[error(transparent)]
    Host(#[from] HostError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Check if the user can simply try again
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Transport(TransportError::Network(_))
            | AppError::Transport(TransportError::Status { .. })
            | AppError::Submit(SubmitError::InFlight)
            | AppError::Host(HostError::Clipboard { .. }) => true,

            AppError::Validation(_)
            | AppError::Submit(_)
            | AppError::Transport(TransportError::InvalidUrl { .. })
            | AppError::Config(_) => false,

            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::Submit(_) => "submit",
            AppError::Transport(_) => "transport",
            AppError::Host(_) => "host",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Validation result type alias
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Transport result type alias
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Host result type alias
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Config result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
