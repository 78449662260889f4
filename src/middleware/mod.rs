// ABOUTME: HTTP middleware module organization
// ABOUTME: Re-exports CORS configuration for the server router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! HTTP middleware

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;
