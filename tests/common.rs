// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Provides a scripted completion provider and server resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use nutrilens::config::environment::{CorsConfig, LlmConfig, ServerConfig};
use nutrilens::errors::{AppError, AppResult};
use nutrilens::llm::{
    CompletionRequest, CompletionResponse, LlmCapabilities, LlmProvider, ModelInfo,
};
use nutrilens::server::ServerResources;

/// A completion provider that replays scripted outcomes and records the
/// requests it receives
#[derive(Default)]
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<AppResult<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    /// Queue a successful completion returning the given text
    pub fn push_content(&self, content: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(content.into()));
    }

    /// Queue a failed completion
    pub fn push_error(&self, error: AppError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Requests the provider has received, in order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::JSON_MODE | LlmCapabilities::SYSTEM_INSTRUCTIONS
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let scripted = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("no scripted response queued")));
        scripted.map(|content| CompletionResponse {
            content,
            model: "scripted-model".to_owned(),
        })
    }

    async fn list_models(&self) -> AppResult<Vec<ModelInfo>> {
        Ok(Vec::new())
    }
}

/// Server configuration for tests; no environment access
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        llm: LlmConfig {
            api_key: "test-key".to_owned(),
            model: "test-model".to_owned(),
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    }
}

/// Build server resources over a scripted provider
pub fn scripted_resources() -> (Arc<ServerResources>, Arc<ScriptedProvider>) {
    let provider = Arc::new(ScriptedProvider::default());
    let resources = Arc::new(ServerResources::new(test_config(), provider.clone()));
    (resources, provider)
}
