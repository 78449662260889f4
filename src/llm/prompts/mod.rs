// ABOUTME: System prompts for completion requests loaded at compile time
// ABOUTME: Provides the nutrition analyzer instruction block sent with every analysis call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy
//! maintenance.

/// Nutrition analyzer system instruction
///
/// Fixed instruction block sent with every analysis request. It pins the
/// output contract the normalizer depends on:
/// - a raw JSON array with no surrounding prose
/// - the exact per-item field set
/// - per-unit expansion of quantity expressions ("2 burgers" becomes two
///   separate objects)
/// - estimates based on standard serving sizes
pub const NUTRITION_SYSTEM_PROMPT: &str = include_str!("nutrition_system.md");

/// Get the nutrition analyzer system instruction
#[must_use]
pub const fn nutrition_system_prompt() -> &'static str {
    NUTRITION_SYSTEM_PROMPT
}
