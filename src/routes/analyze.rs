// ABOUTME: Analysis route handler relaying food descriptions to the analysis service
// ABOUTME: Provides the POST /analyze endpoint returning a JSON array of nutrition items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! Analysis routes
//!
//! One endpoint: `POST /analyze` takes `{ "text": ... }` and responds with a
//! JSON array of nutrition items (possibly empty) or a 500 with a `detail`
//! string. Requests are independent; the handler holds no state beyond the
//! shared server resources.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::server::ServerResources;

/// Request payload for `POST /analyze`
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Free-text food description, possibly with quantities
    pub text: String,
}

/// Analysis routes handler
pub struct AnalyzeRoutes;

impl AnalyzeRoutes {
    /// Create all analysis routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/analyze", post(Self::analyze))
            .with_state(resources)
    }

    /// Analyze a food description into per-item nutrition estimates
    async fn analyze(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<AnalyzeRequest>,
    ) -> Result<Response, AppError> {
        info!(text = %request.text, "received analysis request");

        let items = resources.analysis.analyze(&request.text).await?;

        Ok((StatusCode::OK, Json(items)).into_response())
    }
}
