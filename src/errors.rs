// ABOUTME: Unified error handling for the volume advisor application
// ABOUTME: Defines error codes, the AppError type, and conversions from crate-level errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the application crate returns [`AppResult`].
//! Lower crates keep their own `thiserror` enums (`ModelError`, `ConfigError`)
//! which convert into [`AppError`] with a stable [`ErrorCode`].

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use volume_core::ModelError;
use volume_intelligence::ConfigError;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be interpreted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required value was not supplied
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A value was outside its acceptable range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration loaded but failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Output could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit code for command-line front ends
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 2,
            Self::ConfigError | Self::ConfigInvalid => 78,
            Self::SerializationError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required value is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required value missing
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ModelError> for AppError {
    fn from(error: ModelError) -> Self {
        let code = match error {
            ModelError::InvertedRange { .. } => ErrorCode::ValueOutOfRange,
            ModelError::UnknownMuscleGroup(_)
            | ModelError::UnknownExperienceLevel(_)
            | ModelError::UnknownVolumeStatus(_) => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_maps_to_invalid_input() {
        let error = AppError::from(ModelError::UnknownMuscleGroup("neck".to_owned()));
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.to_string().contains("neck"));
    }

    #[test]
    fn test_config_error_maps_to_config_invalid() {
        let error = AppError::from(ConfigError::InvalidRange("training days"));
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert_eq!(error.code.exit_code(), 78);
    }

    #[test]
    fn test_missing_field_is_usage_error() {
        let error = AppError::missing_field("--volume or --muscle");
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.code.exit_code(), 2);
        assert!(error.to_string().ends_with("--volume or --muscle is required"));
    }

    #[test]
    fn test_serialization_error_code_name() {
        let json = serde_json::to_string(&ErrorCode::SerializationError).unwrap_or_default();
        assert_eq!(json, "\"SERIALIZATION_ERROR\"");
    }
}
