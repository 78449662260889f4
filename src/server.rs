// ABOUTME: Server resources and router assembly for the NutriLens HTTP service
// ABOUTME: Wires configuration, the completion provider, and routes into a running server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! Server assembly
//!
//! [`ServerResources`] holds everything handlers share: the configuration
//! and the analysis service (which owns the injected completion provider).
//! Resources are constructed once at startup and shared behind an `Arc` —
//! there is no process-global client state.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analysis::AnalysisService;
use crate::config::environment::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{GeminiProvider, LlmProvider};
use crate::middleware::setup_cors;
use crate::routes::{AnalyzeRoutes, HealthRoutes};

/// Shared resources for HTTP handlers
pub struct ServerResources {
    /// Effective server configuration
    pub config: ServerConfig,
    /// Nutrition analysis service
    pub analysis: AnalysisService,
}

impl ServerResources {
    /// Create resources with an explicit completion provider
    ///
    /// Used by tests to inject a scripted provider.
    pub fn new(config: ServerConfig, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            analysis: AnalysisService::new(provider),
            config,
        }
    }

    /// Create resources from configuration, constructing the Gemini provider
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the configured credential is
    /// empty.
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        if config.llm.api_key.is_empty() {
            return Err(AppError::config_missing("completion API key is empty"));
        }

        let provider =
            GeminiProvider::new(config.llm.api_key.clone()).with_default_model(&config.llm.model);

        Ok(Self::new(config, Arc::new(provider)))
    }
}

/// Assemble the application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(AnalyzeRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind the listener and serve until shutdown
///
/// # Errors
///
/// Returns an error when the listener cannot bind or the server fails.
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let port = resources.config.http_port;
    let app = router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| AppError::internal(format!("failed to bind port {port}: {e}")))?;

    info!("NutriLens serving on port {port}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("server error: {e}")))
}
