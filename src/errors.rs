// ABOUTME: Unified error handling with error codes, classification, and HTTP rendering
// ABOUTME: Maps analysis failures to the `{"detail": ...}` body the inbound contract requires
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! # Unified Error Handling
//!
//! This module provides the centralized error taxonomy for NutriLens. Two
//! error kinds can reach the `/analyze` caller: an upstream failure (the
//! completion provider could not be invoked or rejected the call, with a
//! distinct model-not-found class) and a parse failure (the provider
//! returned text that is not valid JSON). Both render as HTTP 500 with a
//! human-readable `detail` string; neither is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request payload failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // External Services (5000-5999)
    /// The completion provider failed or could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The configured model identifier was not recognized upstream
    #[serde(rename = "EXTERNAL_MODEL_NOT_FOUND")]
    ExternalModelNotFound = 5001,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,

    // Internal Errors (9000-9999)
    /// An internal error occurred
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// The completion provider returned text that is not valid JSON
    #[serde(rename = "PARSE_ERROR")]
    ParseError = 9001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    ///
    /// Analysis failures (upstream, model-not-found, parse) all surface as
    /// 500 per the inbound contract — the caller sees success-with-list or
    /// a 500 with a `detail` string, nothing in between.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ExternalServiceError
            | Self::ExternalModelNotFound
            | Self::ConfigError
            | Self::ConfigMissing
            | Self::InternalError
            | Self::ParseError => 500,
        }
    }

    /// Get a short description of this error class
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ExternalServiceError => "The completion provider returned an error",
            Self::ExternalModelNotFound => "The configured model was not found upstream",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigMissing => "Required configuration is missing",
            Self::InternalError => "An internal server error occurred",
            Self::ParseError => "The completion provider returned unparseable output",
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

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Required configuration missing
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Upstream completion failure, classified by the provider error text
    ///
    /// A description containing "404" indicates the configured model
    /// identifier was not recognized and is reported as the distinct
    /// model-not-found class. Classification is a substring match on the
    /// provider error text, which is all the upstream contract exposes.
    pub fn upstream(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("404") {
            Self::new(ErrorCode::ExternalModelNotFound, message)
        } else {
            Self::new(ErrorCode::ExternalServiceError, message)
        }
    }

    /// Completion output that is not valid JSON, carrying the raw text
    pub fn parse(raw: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ParseError,
            format!("completion output is not valid JSON: {}", raw.into()),
        )
    }

    /// Render the `detail` string for the HTTP error body
    ///
    /// Model-not-found failures read distinctly so the operator knows to
    /// inspect the startup model listing; all other analysis failures carry
    /// the raw failure text behind an "AI Error:" prefix.
    #[must_use]
    pub fn detail(&self) -> String {
        match self.code {
            ErrorCode::ExternalModelNotFound => {
                "Model not found. Check server logs for available models.".to_owned()
            }
            ErrorCode::ExternalServiceError | ErrorCode::ParseError => {
                format!("AI Error: {}", self.message)
            }
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub detail: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            detail: error.detail(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ExternalServiceError.http_status(), 500);
        assert_eq!(ErrorCode::ExternalModelNotFound.http_status(), 500);
        assert_eq!(ErrorCode::ParseError.http_status(), 500);
    }

    #[test]
    fn test_upstream_classification() {
        let not_found = AppError::upstream("Gemini API error (404): model unknown");
        assert_eq!(not_found.code, ErrorCode::ExternalModelNotFound);

        let quota = AppError::upstream("Gemini API error (429): quota exceeded");
        assert_eq!(quota.code, ErrorCode::ExternalServiceError);
    }

    #[test]
    fn test_detail_rendering() {
        let not_found = AppError::upstream("HTTP 404 from upstream");
        assert_eq!(
            not_found.detail(),
            "Model not found. Check server logs for available models."
        );

        let upstream = AppError::upstream("connection refused");
        assert_eq!(upstream.detail(), "AI Error: connection refused");

        let parse = AppError::parse("not json");
        assert!(parse.detail().starts_with("AI Error:"));
        assert!(parse.detail().contains("not json"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::upstream("boom");
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"detail":"AI Error: boom"}"#);
    }
}
