// ABOUTME: Server binary for the NutriLens nutrition analysis API
// ABOUTME: Loads configuration, runs the startup model diagnostic, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! # NutriLens Server Binary
//!
//! Starts the HTTP API. Configuration comes from the environment
//! (`GEMINI_API_KEY` is required); the port can be overridden on the
//! command line.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use nutrilens::{
    config::environment::ServerConfig,
    llm::{GeminiProvider, LlmProvider},
    logging, server,
    server::ServerResources,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "nutrilens-server")]
#[command(about = "NutriLens - AI-backed nutrition estimation API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment; fails fast when the API key is
    // absent.
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting NutriLens API");
    info!("{}", config.summary());

    // Startup diagnostic: list the models this credential can reach and
    // warn when the configured model is not among them. Read-only, never on
    // the request path.
    let provider =
        GeminiProvider::new(config.llm.api_key.clone()).with_default_model(&config.llm.model);
    report_available_models(&provider, &config.llm.model).await;

    let resources = Arc::new(ServerResources::new(config, Arc::new(provider)));

    display_available_endpoints(&resources.config);

    server::run(resources).await?;

    Ok(())
}

/// Log the models available to the configured credential
async fn report_available_models(provider: &GeminiProvider, configured_model: &str) {
    match provider.list_models().await {
        Ok(models) => {
            let mut configured_found = false;
            for model in models.iter().filter(|m| m.supports_generation) {
                info!("available model: {}", model.name);
                if model.name.ends_with(configured_model) {
                    configured_found = true;
                }
            }
            if !configured_found {
                warn!(
                    model = configured_model,
                    "configured model not in the available-model listing"
                );
            }
        }
        Err(e) => {
            warn!("could not list models (check API key): {e}");
        }
    }
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Analyze Food:  POST http://{host}:{port}/analyze");
    info!("   Health Check:  GET  http://{host}:{port}/health");
    info!("   Readiness:     GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
