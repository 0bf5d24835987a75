// ABOUTME: Unified error handling with standard error codes and user-facing descriptions
// ABOUTME: AppError and ErrorCode shared by the engine, stores, and remote lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

//! # Unified Error Handling System
//!
//! Centralized error handling for the Ahara platform. Every failure class the
//! system can surface maps to one [`ErrorCode`] with a distinct user-facing
//! description; the remote-lookup subclasses (rate limit, quota, malformed
//! response, generic failure) each carry their own code so callers can show
//! distinct messages. No error here is fatal to the process.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (1000-1999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 1000,
    /// A required field is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 1001,
    /// Data is present but malformed (unrecognized enum text, bad JSON)
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 1002,
    /// Numeric value outside the acceptable range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 1003,

    // Resource Management (2000-2999)
    /// Requested record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 2000,

    // Remote Lookup (3000-3999)
    /// Remote nutrition service returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 3000,
    /// Remote nutrition service rate limit hit (HTTP 429)
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 3001,
    /// Remote nutrition service credits exhausted (HTTP 402)
    #[serde(rename = "QUOTA_EXHAUSTED")]
    QuotaExhausted = 3002,

    // Configuration (4000-4999)
    /// Configuration error (missing API key, bad environment)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 4000,

    // Internal (9000-9999)
    /// Unclassified internal error
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Record store read or write failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9001,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested record was not found",
            Self::ExternalServiceError => "The nutrition lookup service encountered an error",
            Self::ExternalRateLimited => {
                "Nutrition lookup rate limit exceeded. Please try again in a moment"
            }
            Self::QuotaExhausted => "Nutrition lookup credits exhausted. Please add credits to continue",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Record store operation failed",
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
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("missing required field: {}", field.into()),
        )
    }

    /// Malformed data
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value outside acceptable range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Record not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Remote lookup failed for an unclassified reason
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceError, message)
    }

    /// Remote lookup hit the upstream rate limit
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalRateLimited, message)
    }

    /// Remote lookup credits exhausted
    pub fn quota_exhausted(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::QuotaExhausted, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Store read/write failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}
