// ABOUTME: Route module organization for NutriLens HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers over the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! Route module for NutriLens
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the analysis service.

/// Nutrition analysis routes
pub mod analyze;
/// Health check and system status routes
pub mod health;

/// Analysis route handlers
pub use analyze::AnalyzeRoutes;
/// Analysis request payload
pub use analyze::AnalyzeRequest;
/// Health check route handlers
pub use health::HealthRoutes;
