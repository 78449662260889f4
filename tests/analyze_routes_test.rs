// ABOUTME: Integration tests for the analysis and health route handlers
// ABOUTME: Tests the HTTP status and body contract of POST /analyze end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::scripted_resources;
use helpers::axum_test::AxumTestRequest;
use nutrilens::analysis::NutritionRecord;
use nutrilens::errors::{AppError, ErrorResponse};
use nutrilens::server;

use axum::http::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Success Contract
// ============================================================================

#[tokio::test]
async fn analyze_returns_the_normalized_array() {
    let (resources, provider) = scripted_resources();
    provider.push_content(
        r#"{"items":[{"food_name":"apple","calories":95,"protein":0,"carbs":25,"fats":0,"food_type":"Fruit","reasoning_summary":"One medium apple."}]}"#,
    );
    let app = server::router(resources);

    let response = AxumTestRequest::post("/analyze")
        .json(&json!({"text": "one apple"}))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let items: Vec<Value> = response.json();
    assert_eq!(items.len(), 1);

    // A well-formed element deserializes into the record model
    let record: NutritionRecord = serde_json::from_value(items[0].clone()).unwrap();
    assert_eq!(record.food_name, "apple");
    assert_eq!(record.food_type, "Fruit");
    assert_eq!(record.calories, 95);
}

#[tokio::test]
async fn analyze_returns_an_empty_array_when_nothing_matched() {
    let (resources, provider) = scripted_resources();
    provider.push_content("[]");
    let app = server::router(resources);

    let response = AxumTestRequest::post("/analyze")
        .json(&json!({"text": "nothing edible"}))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let items: Vec<Value> = response.json();
    assert!(items.is_empty());
}

// ============================================================================
// Failure Contract
// ============================================================================

#[tokio::test]
async fn upstream_failure_maps_to_500_with_ai_error_detail() {
    let (resources, provider) = scripted_resources();
    provider.push_error(AppError::upstream("connection refused"));
    let app = server::router(resources);

    let response = AxumTestRequest::post("/analyze")
        .json(&json!({"text": "an apple"}))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = response.json();
    assert_eq!(body.detail, "AI Error: connection refused");
}

#[tokio::test]
async fn model_not_found_gets_the_distinct_detail() {
    let (resources, provider) = scripted_resources();
    provider.push_error(AppError::upstream("Gemini API error (404): unknown model"));
    let app = server::router(resources);

    let response = AxumTestRequest::post("/analyze")
        .json(&json!({"text": "an apple"}))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = response.json();
    assert_eq!(
        body.detail,
        "Model not found. Check server logs for available models."
    );
}

#[tokio::test]
async fn unparseable_completion_maps_to_500_with_the_raw_text() {
    let (resources, provider) = scripted_resources();
    provider.push_content("Sure! Here are your results: ...");
    let app = server::router(resources);

    let response = AxumTestRequest::post("/analyze")
        .json(&json!({"text": "an apple"}))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = response.json();
    assert!(body.detail.starts_with("AI Error:"));
    assert!(body.detail.contains("Sure! Here are your results:"));
}

// ============================================================================
// Health Endpoints
// ============================================================================

#[tokio::test]
async fn health_and_ready_respond_without_touching_the_provider() {
    let (resources, provider) = scripted_resources();
    let app = server::router(resources);

    let response = AxumTestRequest::get("/health").send(app.clone()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");

    let response = AxumTestRequest::get("/ready").send(app).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    assert!(provider.requests().is_empty());
}
