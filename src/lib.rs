// ABOUTME: Main library entry point for the NutriLens nutrition analysis API
// ABOUTME: Relays free-text food descriptions to an LLM and returns normalized nutrition records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

#![deny(unsafe_code)]

//! # NutriLens
//!
//! An HTTP API that turns free-text food descriptions ("1 banana and 2
//! apples") into per-item nutrition estimates. The service forwards the text
//! with a fixed instruction prompt to Google Gemini, parses the returned
//! text as JSON, normalizes it into a list of records, and returns that list
//! to the caller.
//!
//! ## Architecture
//!
//! - **llm**: Completion provider abstraction and the Gemini implementation
//! - **analysis**: Prompt construction, response normalization, record model
//! - **routes**: HTTP endpoints (`POST /analyze`, health checks)
//! - **config**: Environment-driven server configuration
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nutrilens::config::environment::ServerConfig;
//! use nutrilens::server::{self, ServerResources};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nutrilens::errors::AppError> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config)?);
//!     server::run(resources).await
//! }
//! ```

/// Prompt construction, response normalization, and the nutrition record model
pub mod analysis;
/// Environment-driven configuration management
pub mod config;
/// Unified error handling with `AppError`, `ErrorCode`, and HTTP rendering
pub mod errors;
/// Completion provider abstraction and the Gemini implementation
pub mod llm;
/// Logging configuration and structured logging setup
pub mod logging;
/// HTTP middleware (CORS)
pub mod middleware;
/// HTTP route handlers organized by domain
pub mod routes;
/// Server resources and router assembly
pub mod server;
