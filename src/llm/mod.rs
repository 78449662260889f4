// ABOUTME: Completion provider abstraction layer for pluggable AI model integration
// ABOUTME: Defines the contract providers must implement plus shared request/response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! # Completion Provider Service Provider Interface
//!
//! This module defines the contract the analysis service consumes. A
//! provider takes a single completion request (system instruction + user
//! text + generation options) and returns generated text or fails. The
//! Gemini implementation lives in [`gemini`]; tests script their own
//! providers against the same trait.
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: Bitflags describing provider features (JSON
//!   mode, system instructions, model listing)
//! - **`LlmProvider`**: Async trait for one-shot text completion
//! - **`CompletionRequest`**: Request configuration including model,
//!   temperature, and response format

mod gemini;
pub mod prompts;

pub use gemini::GeminiProvider;
pub use prompts::nutrition_system_prompt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// Completion provider capability flags
    ///
    /// Indicates which features a provider supports. The analysis service
    /// checks `JSON_MODE` before relying on provider-side response shaping.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider supports JSON mode output
        const JSON_MODE = 0b0000_0001;
        /// Provider supports a separate system instruction
        const SYSTEM_INSTRUCTIONS = 0b0000_0010;
        /// Provider supports listing available models
        const MODEL_LISTING = 0b0000_0100;
    }
}

impl LlmCapabilities {
    /// Check if JSON mode output is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Check if a separate system instruction is supported
    #[must_use]
    pub const fn supports_system_instructions(&self) -> bool {
        self.contains(Self::SYSTEM_INSTRUCTIONS)
    }

    /// Check if model listing is supported
    #[must_use]
    pub const fn supports_model_listing(&self) -> bool {
        self.contains(Self::MODEL_LISTING)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a one-shot completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// User content to complete against
    pub prompt: String,
    /// System instruction fixed by the caller
    pub system: Option<String>,
    /// Model identifier (provider-specific); `None` uses the provider default
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Whether the provider should constrain output to JSON text
    pub json_output: bool,
}

impl CompletionRequest {
    /// Create a new completion request with user content
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            model: None,
            temperature: None,
            json_output: false,
        }
    }

    /// Set the system instruction
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Request JSON-constrained output
    #[must_use]
    pub const fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }
}

/// Response from a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text content
    pub content: String,
    /// Model used for generation
    pub model: String,
}

/// Metadata about a model available to the configured credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Provider-qualified model name
    pub name: String,
    /// Whether the model supports text generation
    pub supports_generation: bool,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Completion provider trait
///
/// Implement this trait to plug a new completion backend into NutriLens.
/// One invocation is a single stateless round trip; providers perform no
/// retries and hold no per-request state.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Provider capabilities (JSON mode, model listing, etc.)
    fn capabilities(&self) -> LlmCapabilities;

    /// Default model to use if not specified in the request
    fn default_model(&self) -> &str;

    /// Perform a one-shot completion
    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResponse>;

    /// List the models available to the configured credential
    ///
    /// Read-only diagnostic used at startup; never part of the request path.
    async fn list_models(&self) -> AppResult<Vec<ModelInfo>>;
}
