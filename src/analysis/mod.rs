// ABOUTME: Nutrition analysis service orchestrating prompt, completion, and normalization
// ABOUTME: Defines the nutrition record model and the analyze() request pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! # Nutrition Analysis
//!
//! The analysis service is the one component with decision structure in this
//! system: it fixes the instruction prompt, invokes the completion provider
//! once (no retry), parses the returned text as JSON, and normalizes the
//! shape into an ordered list of items.
//!
//! Items are passed through as raw JSON values — the contract requires
//! shape normalization only, never per-field validation. [`NutritionRecord`]
//! documents the element shape consumers can expect.

pub mod normalize;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::{AppError, AppResult};
use crate::llm::{nutrition_system_prompt, CompletionRequest, LlmProvider};

/// Sampling temperature for analysis completions
///
/// Kept low so repeated calls with identical input vary as little as the
/// provider allows.
const ANALYSIS_TEMPERATURE: f32 = 0.1;

/// A single per-food-item nutrition estimate
///
/// One record describes one unit of one food: "2 burgers" in the input
/// yields two records. Records are created fresh per request and owned by
/// the response being built; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Name of the food item
    pub food_name: String,
    /// Estimated calories for one standard serving
    pub calories: i64,
    /// Estimated protein in grams
    pub protein: i64,
    /// Estimated carbohydrates in grams
    pub carbs: i64,
    /// Estimated fats in grams
    pub fats: i64,
    /// Category label (e.g. Fruit, Vegetable, Fast Food, Drink)
    pub food_type: String,
    /// One-sentence explanation of the estimate
    pub reasoning_summary: String,
}

/// Nutrition analysis service
///
/// Owns the completion provider injected at startup. Holds no per-request
/// state; concurrent requests share the provider freely.
#[derive(Clone)]
pub struct AnalysisService {
    provider: Arc<dyn LlmProvider>,
}

impl AnalysisService {
    /// Create an analysis service over a completion provider
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        if !provider.capabilities().supports_json_mode() {
            warn!(
                provider = provider.name(),
                "provider lacks JSON mode; relying on the instruction block alone"
            );
        }
        Self { provider }
    }

    /// Analyze a free-text food description into nutrition items
    ///
    /// Builds a completion request from the fixed instruction block and the
    /// literal user text, invokes the provider once, parses the returned
    /// text as JSON, and normalizes the shape into a list. There is no
    /// partial success: either the full normalized list is returned or an
    /// error is.
    ///
    /// # Errors
    ///
    /// Returns an upstream error when the completion call fails (with the
    /// model-not-found class for unrecognized model identifiers) and a
    /// parse error, carrying the raw text, when the returned text is not
    /// valid JSON.
    pub async fn analyze(&self, text: &str) -> AppResult<Vec<Value>> {
        let request = CompletionRequest::new(text)
            .with_system(nutrition_system_prompt())
            .with_temperature(ANALYSIS_TEMPERATURE)
            .with_json_output();

        let response = self.provider.complete(&request).await?;

        // Raw provider output, logged for diagnosis only
        info!(response = %response.content, "completion provider response");

        let parsed: Value = serde_json::from_str(&response.content)
            .map_err(|e| AppError::parse(response.content.clone()).with_source(e))?;

        let items = normalize::into_items(parsed);
        debug!(count = items.len(), "normalized analysis items");

        Ok(items)
    }
}
