//! Application layer errors

use serde::Serialize;
use thiserror::Error;

/// Error kinds reported to the caller of a format operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    ValidationError,
    InvalidSyntax,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationError => "ValidationError",
            ErrorKind::InvalidSyntax => "InvalidSyntax",
        }
    }
}

/// Format operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Request shape, language or indent width rejected before transforming
    #[error("Validation error: {0}")]
    Validation(String),

    /// The message is fixed and never carries parser details
    #[error("Invalid JSON syntax")]
    InvalidSyntax,
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormatError::Validation(_) => ErrorKind::ValidationError,
            FormatError::InvalidSyntax => ErrorKind::InvalidSyntax,
        }
    }
}

/// Plugin host errors
#[derive(Error, Debug)]
pub enum PluginError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Plugin '{0}' not found")]
    NotFound(String),

    #[error("Plugin '{0}' already registered")]
    AlreadyRegistered(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PluginError {
    /// Kind tag for reporting; host-side failures have no format kind
    pub fn kind(&self) -> &'static str {
        match self {
            PluginError::Format(e) => e.kind().as_str(),
            PluginError::NotFound(_) => "NotFound",
            PluginError::AlreadyRegistered(_) => "AlreadyRegistered",
            PluginError::Serialization(_) => "Serialization",
            PluginError::Internal(_) => "Internal",
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
