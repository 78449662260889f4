// ABOUTME: Configuration module organization for NutriLens
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! Configuration management
//!
//! All configuration is environment-driven; there is no config file. The
//! credential for the completion provider is required and never embedded.

/// Environment-based configuration management
pub mod environment;

pub use environment::{CorsConfig, LlmConfig, ServerConfig};
