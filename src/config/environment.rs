// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig with fail-fast credential checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! Environment-based configuration management

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::{AppError, AppResult};

/// Environment variable holding the Gemini API credential
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the Gemini model identifier
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";

/// Environment variable overriding the HTTP port
pub const HTTP_PORT_ENV: &str = "HTTP_PORT";

/// Environment variable restricting CORS origins
pub const CORS_ALLOWED_ORIGINS_ENV: &str = "CORS_ALLOWED_ORIGINS";

/// Default model identifier, matching the original deployment
const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite-preview-02-05";

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8000;

/// Completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API credential for the completion provider
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Model identifier to request completions from
    pub model: String,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or "*" for any origin
    pub allowed_origins: String,
}

/// Server configuration assembled from environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP port the server binds to
    pub http_port: u16,
    /// Completion provider settings
    pub llm: LlmConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// The API credential is required and must come from the environment —
    /// startup fails immediately when it is absent so a misconfigured
    /// deployment never serves requests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when `GEMINI_API_KEY` is unset and
    /// `ConfigError` when `HTTP_PORT` is not a valid port number.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            AppError::config_missing(format!("{GEMINI_API_KEY_ENV} environment variable not set"))
        })?;

        let model = env::var(GEMINI_MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_owned());

        let http_port = match env::var(HTTP_PORT_ENV) {
            Ok(raw) => raw.parse::<u16>().map_err(|e| {
                AppError::config(format!("{HTTP_PORT_ENV} is not a valid port: {e}"))
            })?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let allowed_origins =
            env::var(CORS_ALLOWED_ORIGINS_ENV).unwrap_or_else(|_| "*".to_owned());

        Ok(Self {
            http_port,
            llm: LlmConfig { api_key, model },
            cors: CorsConfig { allowed_origins },
        })
    }

    /// Render a one-line summary of the effective configuration
    ///
    /// The credential is redacted; only its presence is reported.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} model={} cors_origins={} api_key={}",
            self.http_port,
            self.llm.model,
            self.cors.allowed_origins,
            if self.llm.api_key.is_empty() {
                "absent"
            } else {
                "present"
            }
        )
    }
}
