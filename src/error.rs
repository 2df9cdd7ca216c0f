//! Error types for unknown-sdk operations.
//!
//! This module defines [`SdkError`], the error type used by the surfaces
//! around the descriptor (tool type parsing, descriptor files, version rules),
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Descriptor accessors and predicate evaluation never return errors
//! - Use `SdkError` for failures while building descriptors from input
//! - Use `anyhow::Error` (via `SdkError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for unknown-sdk operations.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Descriptor file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse descriptor file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A tool type identifier was blank.
    #[error("Invalid tool type: '{value}'")]
    InvalidToolType { value: String },

    /// A version rule could not be compiled into a predicate.
    #[error("Invalid version rule '{rule}': {message}")]
    InvalidVersionRule { rule: String, message: String },

    /// No descriptor with the requested key exists in the file.
    #[error("Unknown SDK descriptor: {name}")]
    UnknownDescriptor { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for unknown-sdk operations.
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = SdkError::ConfigNotFound {
            path: PathBuf::from("/foo/.unknown-sdk.yml"),
        };
        assert!(err.to_string().contains("/foo/.unknown-sdk.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = SdkError::ConfigParseError {
            path: PathBuf::from("/sdks.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/sdks.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn invalid_tool_type_displays_value() {
        let err = SdkError::InvalidToolType { value: "  ".into() };
        assert!(err.to_string().starts_with("Invalid tool type"));
    }

    #[test]
    fn invalid_version_rule_displays_rule_and_message() {
        let err = SdkError::InvalidVersionRule {
            rule: "pattern".into(),
            message: "unclosed group".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pattern"));
        assert!(msg.contains("unclosed group"));
    }

    #[test]
    fn unknown_descriptor_displays_name() {
        let err = SdkError::UnknownDescriptor {
            name: "backend".into(),
        };
        assert!(err.to_string().contains("backend"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SdkError = io_err.into();
        assert!(matches!(err, SdkError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: SdkError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, SdkError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
